use business::domain::product::model::ProductDraft;

/// Fixed catalog the store starts with on every process start. Entry `n`
/// receives id `n + 1`.
pub fn seed_drafts() -> Vec<ProductDraft> {
    vec![
        draft(
            "Wireless Mouse",
            29.99,
            50,
            Some("Ergonomic 2.4 GHz mouse with silent clicks"),
            Some("Accessories"),
        ),
        draft(
            "USB-C Hub",
            49.99,
            3,
            Some("7-in-1 hub with HDMI, SD card reader and 100 W passthrough"),
            Some("Accessories"),
        ),
        draft(
            "Mechanical Keyboard",
            129.99,
            25,
            Some("Tenkeyless keyboard with hot-swappable brown switches"),
            Some("Peripherals"),
        ),
        draft(
            "27-inch 4K Monitor",
            399.99,
            0,
            Some("IPS panel, 60 Hz, factory calibrated"),
            Some("Displays"),
        ),
        draft("Laptop Stand", 39.99, 15, None, None),
    ]
}

fn draft(
    name: &str,
    price: f64,
    stock: i32,
    description: Option<&str>,
    category: Option<&str>,
) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        stock,
        description: description.map(str::to_string),
        category: category.map(str::to_string),
        is_available: true,
    }
}

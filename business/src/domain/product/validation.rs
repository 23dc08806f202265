use super::errors::ProductError;
use super::model::ProductDraft;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const CATEGORY_MAX_CHARS: usize = 50;
/// Lower price bound, exclusive.
pub const PRICE_MIN: f64 = 0.01;
/// Upper price bound, inclusive.
pub const PRICE_MAX: f64 = 999_999.99;

/// A single rejected field, identified by its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
}

impl FieldViolation {
    fn new(field: &'static str, code: &'static str) -> Self {
        Self { field, code }
    }
}

/// Rejects ids that can never address a stored product.
pub fn validate_id(id: i64) -> Result<i64, ProductError> {
    if id <= 0 {
        return Err(ProductError::InvalidId);
    }
    Ok(id)
}

impl ProductDraft {
    /// Checks every field and reports all violations at once.
    pub fn validate(&self) -> Result<(), ProductError> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "product.name_required"));
        } else if self.name.chars().count() > NAME_MAX_CHARS {
            violations.push(FieldViolation::new("name", "product.name_too_long"));
        }

        if !(self.price.is_finite() && self.price > PRICE_MIN && self.price <= PRICE_MAX) {
            violations.push(FieldViolation::new("price", "product.price_out_of_range"));
        }

        if self.stock < 0 {
            violations.push(FieldViolation::new("stock", "product.stock_negative"));
        }

        if exceeds(self.description.as_deref(), DESCRIPTION_MAX_CHARS) {
            violations.push(FieldViolation::new(
                "description",
                "product.description_too_long",
            ));
        }

        if exceeds(self.category.as_deref(), CATEGORY_MAX_CHARS) {
            violations.push(FieldViolation::new("category", "product.category_too_long"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ProductError::Validation(violations))
        }
    }
}

fn exceeds(value: Option<&str>, max_chars: usize) -> bool {
    value.is_some_and(|v| v.chars().count() > max_chars)
}

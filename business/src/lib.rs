pub mod application {
    pub mod product {
        pub mod check_health;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_categories;
        pub mod get_stats;
        pub mod update;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod insights;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod use_cases {
            pub mod check_health;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_categories;
            pub mod get_stats;
            pub mod update;
        }
    }
}

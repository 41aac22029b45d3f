pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod remove_item;
        pub mod update_quantity;
        pub mod view;
    }
    pub mod catalog {
        pub mod browse;
        pub mod get_product;
        pub mod list_categories;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod remove_item;
            pub mod update_quantity;
            pub mod view;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod sorting;
        pub mod use_cases {
            pub mod browse;
            pub mod get_product;
            pub mod list_categories;
        }
    }
}

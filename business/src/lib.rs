pub mod application {
    pub mod credential {
        pub mod load;
    }
    pub mod chat_model {
        pub mod build;
        pub mod invoke;
    }
}

pub mod domain {
    pub mod logger;
    pub mod credential {
        pub mod errors;
        pub mod model;
        pub mod source;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod chat_model {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod build;
            pub mod invoke;
        }
    }
}

pub mod application {
    pub mod user {
        pub mod add_skin_goal;
        pub mod create;
        pub mod delete;
        pub mod get_current;
        pub mod update;
        pub mod update_goal_progress;
        pub mod update_onboarding;
        pub mod update_skin_profile;
    }
    pub mod skin_analysis {
        pub mod get_latest;
        pub mod get_results;
        pub mod list;
        pub mod upload;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_skin_goal;
            pub mod create;
            pub mod delete;
            pub mod get_current;
            pub mod update;
            pub mod update_goal_progress;
            pub mod update_onboarding;
            pub mod update_skin_profile;
        }
    }
    pub mod skin_analysis {
        pub mod errors;
        pub mod image;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_latest;
            pub mod get_results;
            pub mod list;
            pub mod upload;
        }
    }
}

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod daily_summary_store;
        pub mod email_sender;
        pub mod identity_store;
    }
}

pub mod modules {
    pub mod appointments {
        pub mod core {
            pub mod change;
            pub mod record;
        }
    }
    pub mod metrics {
        pub mod core {
            pub mod adjustment;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod aggregate_appointment_change {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_daily_summary {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
    }
    pub mod notifications {
        pub mod use_cases {
            pub mod send_appointment_confirmation {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod roles {
        pub mod core {
            pub mod claims;
        }
        pub mod use_cases {
            pub mod set_user_role {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

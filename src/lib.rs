pub mod shared {
    pub mod core {
        pub mod record;
        pub mod validation;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
    pub mod inbound {
        pub mod envelope;
        pub mod http;
        pub mod problem;
        pub mod translator;
    }
}

pub mod modules {
    pub mod work_orders {
        pub mod core {
            pub mod equality;
            pub mod example_data;
            pub mod work_order;
        }
        pub mod use_cases {
            pub mod create_work_order {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_work_order {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_work_order {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod query_work_orders {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod payload;
            }
        }
    }
}

pub mod shell;

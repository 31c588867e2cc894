pub mod shared {
    pub mod core {
        pub mod entities;
        pub mod geography;
    }
    pub mod infrastructure {
        pub mod entity_store;
        pub mod location_provider;
    }
}

pub mod modules {
    pub mod catalogue {
        pub mod core {
            pub mod labels;
        }
        pub mod use_cases {
            pub mod query_error;
            pub mod list_cities {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_cinemas_by_city {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_cinemas_within_radius {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_screenings {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod seed_catalogue {
                pub mod command;
                pub mod handler;
            }
        }
    }
    pub mod tickets {
        pub mod use_cases {
            pub mod ticket_error;
            pub mod purchase_ticket {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_ticket {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_tickets {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
        }
    }
}

pub mod shell;

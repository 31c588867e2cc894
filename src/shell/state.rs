use crate::modules::catalogue::use_cases::list_cinemas_by_city::handler::ListCinemasByCityHandler;
use crate::modules::catalogue::use_cases::list_cinemas_within_radius::handler::ListCinemasWithinRadiusHandler;
use crate::modules::catalogue::use_cases::list_cities::handler::ListCitiesHandler;
use crate::modules::catalogue::use_cases::list_screenings::handler::ListScreeningsHandler;
use crate::modules::tickets::use_cases::cancel_ticket::handler::CancelTicketHandler;
use crate::modules::tickets::use_cases::list_tickets::handler::ListTicketsHandler;
use crate::modules::tickets::use_cases::purchase_ticket::handler::PurchaseTicketHandler;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use crate::shared::infrastructure::location_provider::fixed::FixedLocationProvider;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_cities: Arc<ListCitiesHandler<InMemoryEntityStore>>,
    pub list_cinemas_by_city: Arc<ListCinemasByCityHandler<InMemoryEntityStore>>,
    pub list_cinemas_within_radius:
        Arc<ListCinemasWithinRadiusHandler<InMemoryEntityStore, FixedLocationProvider>>,
    pub list_screenings: Arc<ListScreeningsHandler<InMemoryEntityStore>>,
    pub list_tickets: Arc<ListTicketsHandler<InMemoryEntityStore>>,
    pub purchase_ticket: Arc<PurchaseTicketHandler<InMemoryEntityStore>>,
    pub cancel_ticket: Arc<CancelTicketHandler<InMemoryEntityStore>>,
    pub search_radius_meters: f64,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryEntityStore>,
        location: Arc<FixedLocationProvider>,
        config: &AppConfig,
    ) -> Self {
        Self {
            list_cities: Arc::new(ListCitiesHandler::new(store.clone())),
            list_cinemas_by_city: Arc::new(ListCinemasByCityHandler::new(store.clone())),
            list_cinemas_within_radius: Arc::new(ListCinemasWithinRadiusHandler::new(
                store.clone(),
                location,
                config.location_timeout,
            )),
            list_screenings: Arc::new(ListScreeningsHandler::new(store.clone())),
            list_tickets: Arc::new(ListTicketsHandler::new(store.clone())),
            purchase_ticket: Arc::new(PurchaseTicketHandler::new(store.clone())),
            cancel_ticket: Arc::new(CancelTicketHandler::new(store)),
            search_radius_meters: config.search_radius_meters,
        }
    }
}

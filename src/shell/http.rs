use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;

use crate::modules::catalogue::use_cases::list_cinemas_by_city::inbound::http as list_cinemas_http;
use crate::modules::catalogue::use_cases::list_cinemas_within_radius::inbound::http as nearby_cinemas_http;
use crate::modules::catalogue::use_cases::list_cities::inbound::http as list_cities_http;
use crate::modules::catalogue::use_cases::list_screenings::inbound::http as list_screenings_http;
use crate::modules::tickets::use_cases::cancel_ticket::inbound::http as cancel_ticket_http;
use crate::modules::tickets::use_cases::list_tickets::inbound::http as list_tickets_http;
use crate::modules::tickets::use_cases::purchase_ticket::inbound::http as purchase_ticket_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cities", get(list_cities_http::handle))
        .route("/cinemas", get(list_cinemas_http::handle))
        .route("/cinemas/nearby", get(nearby_cinemas_http::handle))
        .route(
            "/cinemas/{name}/screenings",
            get(list_screenings_http::handle),
        )
        .route(
            "/tickets",
            get(list_tickets_http::handle).post(purchase_ticket_http::handle),
        )
        .route("/tickets/{ticket_id}", delete(cancel_ticket_http::handle))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

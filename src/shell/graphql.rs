use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::catalogue::use_cases::list_cinemas_by_city::inbound::graphql::ListCinemasByCityQuery;
use crate::modules::catalogue::use_cases::list_cinemas_within_radius::inbound::graphql::ListCinemasWithinRadiusQuery;
use crate::modules::catalogue::use_cases::list_cities::inbound::graphql::ListCitiesQuery;
use crate::modules::catalogue::use_cases::list_screenings::inbound::graphql::ListScreeningsQuery;
use crate::modules::tickets::use_cases::cancel_ticket::inbound::graphql::CancelTicketMutation;
use crate::modules::tickets::use_cases::list_tickets::inbound::graphql::ListTicketsQuery;
use crate::modules::tickets::use_cases::purchase_ticket::inbound::graphql::PurchaseTicketMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    ListCitiesQuery,
    ListCinemasByCityQuery,
    ListCinemasWithinRadiusQuery,
    ListScreeningsQuery,
    ListTicketsQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(PurchaseTicketMutation, CancelTicketMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(schema: AppSchema) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

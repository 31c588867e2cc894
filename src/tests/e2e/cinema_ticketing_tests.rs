use crate::modules::catalogue::use_cases::list_cinemas_by_city::handler::ListCinemasByCityHandler;
use crate::modules::catalogue::use_cases::list_cities::handler::ListCitiesHandler;
use crate::modules::catalogue::use_cases::list_screenings::handler::ListScreeningsHandler;
use crate::modules::catalogue::use_cases::seed_catalogue::command::{SeedDocument, SeedScreening};
use crate::modules::catalogue::use_cases::seed_catalogue::handler::SeedCatalogueHandler;
use crate::modules::tickets::use_cases::cancel_ticket::handler::CancelTicketHandler;
use crate::modules::tickets::use_cases::list_tickets::handler::ListTicketsHandler;
use crate::modules::tickets::use_cases::purchase_ticket::command::PurchaseTicket;
use crate::modules::tickets::use_cases::purchase_ticket::handler::{
    PurchaseOutcome, PurchaseTicketHandler,
};
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use crate::tests::fixtures::catalogue::{SPRINGFIELD, at, cinema, movie, springfield_catalogue};
use std::collections::BTreeSet;
use std::sync::Arc;

#[tokio::test]
async fn browses_purchases_and_cancels_a_ticket() {
    let store = Arc::new(InMemoryEntityStore::new());
    SeedCatalogueHandler::new(store.clone())
        .handle(SeedDocument {
            movies: vec![movie("Vertigo", 128, (1958, 5, 9))],
            cinemas: vec![cinema("Grand", "Springfield", SPRINGFIELD)],
            screenings: vec![SeedScreening {
                movie: "Vertigo".to_string(),
                cinema: "Grand".to_string(),
                time: at(18, 30),
            }],
        })
        .await
        .unwrap();

    let cities = ListCitiesHandler::new(store.clone()).handle().await.unwrap();
    assert_eq!(cities, BTreeSet::from(["Springfield".to_string()]));

    let names = ListCinemasByCityHandler::new(store.clone())
        .handle("Springfield")
        .await
        .unwrap();
    assert_eq!(names, vec!["Grand".to_string()]);

    let screenings = ListScreeningsHandler::new(store.clone())
        .handle("Grand")
        .await
        .unwrap();
    assert_eq!(screenings.len(), 1);
    assert_eq!(screenings[0].movie_title, "Vertigo");
    assert_eq!(screenings[0].time_label, "18:30");
    let screening_id = screenings[0].screening_id;

    let purchase = PurchaseTicketHandler::new(store.clone());
    let ticket = match purchase.handle(PurchaseTicket::now(screening_id)).await.unwrap() {
        PurchaseOutcome::Purchased(ticket) => ticket,
        other => panic!("expected a purchase, got {other:?}"),
    };
    assert_eq!(
        purchase.handle(PurchaseTicket::now(screening_id)).await.unwrap(),
        PurchaseOutcome::Rejected { screening_id }
    );

    let tickets = ListTicketsHandler::new(store.clone());
    let held = tickets.handle().await.unwrap();
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].ticket_id, ticket.id);
    assert_eq!(held[0].screening.cinema_name, "Grand");

    CancelTicketHandler::new(store.clone())
        .handle(ticket.id)
        .await
        .unwrap();
    assert!(tickets.handle().await.unwrap().is_empty());

    assert!(matches!(
        purchase.handle(PurchaseTicket::now(screening_id)).await.unwrap(),
        PurchaseOutcome::Purchased(_)
    ));
}

#[tokio::test]
async fn resolves_each_ticket_to_its_own_movie_and_cinema() {
    let catalogue = springfield_catalogue().await;
    let purchase = PurchaseTicketHandler::new(catalogue.store.clone());

    for screening in [&catalogue.grand_vertigo, &catalogue.roxy_psycho] {
        let outcome = purchase
            .handle(PurchaseTicket::now(screening.id))
            .await
            .unwrap();
        assert!(matches!(outcome, PurchaseOutcome::Purchased(_)));
    }

    let held = ListTicketsHandler::new(catalogue.store.clone())
        .handle()
        .await
        .unwrap();
    let resolved: BTreeSet<(String, String)> = held
        .into_iter()
        .map(|ticket| (ticket.screening.movie_title, ticket.screening.cinema_name))
        .collect();

    assert_eq!(
        resolved,
        BTreeSet::from([
            ("Psycho".to_string(), "Roxy".to_string()),
            ("Vertigo".to_string(), "Grand".to_string()),
        ])
    );
}

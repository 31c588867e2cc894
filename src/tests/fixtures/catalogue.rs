// Shared catalogue fixture for handler and inbound tests.
//
// Springfield has the Grand (Vertigo 18:30, Psycho 21:00) and the Roxy (Psycho 20:15).
// Shelbyville has the Odeon, with no screenings.

use crate::shared::core::entities::{Cinema, Movie, NewCinema, NewMovie, NewScreening, Screening};
use crate::shared::core::geography::Coordinate;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

pub const SPRINGFIELD: Coordinate = Coordinate {
    latitude: 39.7817,
    longitude: -89.6501,
};

pub struct SpringfieldCatalogue {
    pub store: Arc<InMemoryEntityStore>,
    pub vertigo: Movie,
    pub psycho: Movie,
    pub grand: Cinema,
    pub roxy: Cinema,
    pub odeon: Cinema,
    pub grand_vertigo: Screening,
    pub grand_psycho: Screening,
    pub roxy_psycho: Screening,
}

pub fn movie(title: &str, runtime_minutes: u16, release_date: (i32, u32, u32)) -> NewMovie {
    let (year, month, day) = release_date;
    NewMovie {
        title: title.to_string(),
        runtime_minutes,
        release_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        poster_ref: format!("{}.jpg", title.to_lowercase()),
    }
}

pub fn cinema(name: &str, city: &str, coordinate: Coordinate) -> NewCinema {
    NewCinema {
        name: name.to_string(),
        city: city.to_string(),
        coordinate,
    }
}

pub fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub async fn springfield_catalogue() -> SpringfieldCatalogue {
    let store = Arc::new(InMemoryEntityStore::new());
    populate(store).await
}

pub async fn populate(store: Arc<InMemoryEntityStore>) -> SpringfieldCatalogue {
    let vertigo = store
        .create_movie(movie("Vertigo", 128, (1958, 5, 9)))
        .await
        .unwrap();
    let psycho = store
        .create_movie(movie("Psycho", 109, (1960, 6, 16)))
        .await
        .unwrap();

    let grand = store
        .create_cinema(cinema("Grand", "Springfield", SPRINGFIELD))
        .await
        .unwrap();
    let roxy = store
        .create_cinema(cinema(
            "Roxy",
            "Springfield",
            Coordinate::new(39.8017, -89.6437),
        ))
        .await
        .unwrap();
    let odeon = store
        .create_cinema(cinema(
            "Odeon",
            "Shelbyville",
            Coordinate::new(39.4064, -88.7901),
        ))
        .await
        .unwrap();

    let grand_psycho = store
        .create_screening(NewScreening {
            time: at(21, 0),
            movie_id: psycho.id,
            cinema_id: grand.id,
        })
        .await
        .unwrap();
    let grand_vertigo = store
        .create_screening(NewScreening {
            time: at(18, 30),
            movie_id: vertigo.id,
            cinema_id: grand.id,
        })
        .await
        .unwrap();
    let roxy_psycho = store
        .create_screening(NewScreening {
            time: at(20, 15),
            movie_id: psycho.id,
            cinema_id: roxy.id,
        })
        .await
        .unwrap();

    SpringfieldCatalogue {
        store,
        vertigo,
        psycho,
        grand,
        roxy,
        odeon,
        grand_vertigo,
        grand_psycho,
        roxy_psycho,
    }
}

// Read model for one screening with its movie and cinema resolved.
//
// Purpose
// - Carry everything a client needs to show a screening without further lookups.
//
// Responsibilities
// - Map from the eager-joined store record.
// - Precompute display labels for time, runtime, release year and poster.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalogue::core::labels::{poster_path, runtime_label, time_label};
use crate::shared::core::entities::ScreeningWithRelations;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningView {
    pub screening_id: Uuid,
    pub time: NaiveTime,
    pub time_label: String,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub runtime_minutes: u16,
    pub runtime_label: String,
    pub release_date: NaiveDate,
    pub release_year: i32,
    pub poster_path: String,
    pub cinema_id: Uuid,
    pub cinema_name: String,
    pub city: String,
}

impl From<ScreeningWithRelations> for ScreeningView {
    fn from(record: ScreeningWithRelations) -> Self {
        let ScreeningWithRelations {
            screening,
            movie,
            cinema,
        } = record;
        Self {
            screening_id: screening.id,
            time: screening.time,
            time_label: time_label(screening.time),
            movie_id: movie.id,
            runtime_label: runtime_label(movie.runtime_minutes),
            runtime_minutes: movie.runtime_minutes,
            release_year: movie.release_date.year(),
            release_date: movie.release_date,
            poster_path: poster_path(&movie.poster_ref),
            movie_title: movie.title,
            cinema_id: cinema.id,
            cinema_name: cinema.name,
            city: cinema.city,
        }
    }
}

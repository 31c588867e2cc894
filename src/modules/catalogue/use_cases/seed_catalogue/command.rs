// Seed document for the catalogue.
//
// Purpose
// - Describe the movies, cinemas and screenings to create, as read from JSON.
//
// Responsibilities
// - Screenings refer to movies by title and to cinemas by name.
// - Be independent of where the document comes from (file, request body, test code).

use chrono::NaiveTime;
use serde::Deserialize;
use std::path::Path;

use crate::modules::catalogue::use_cases::seed_catalogue::handler::SeedError;
use crate::shared::core::entities::{NewCinema, NewMovie};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub movies: Vec<NewMovie>,
    #[serde(default)]
    pub cinemas: Vec<NewCinema>,
    #[serde(default)]
    pub screenings: Vec<SeedScreening>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedScreening {
    pub movie: String,
    pub cinema: String,
    pub time: NaiveTime,
}

pub async fn load_seed_document(path: &Path) -> Result<SeedDocument, SeedError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}

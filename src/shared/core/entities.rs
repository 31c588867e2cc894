// Records owned by the entity store and the inputs used to create them.
//
// Purpose
// - Describe Movie, Cinema, Screening and Ticket as plain data with foreign key ids.
// - Provide eager-join shapes so queries state exactly which relations they resolve.
//
// Responsibilities
// - Validate text bounds on creation inputs. Uniqueness and link checks belong to the store.
//
// Boundaries
// - No input or output here.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::core::geography::Coordinate;

pub const MAX_TEXT_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub runtime_minutes: u16,
    pub release_date: NaiveDate,
    pub poster_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cinema {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    pub id: Uuid,
    pub time: NaiveTime,
    pub movie_id: Uuid,
    pub cinema_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub screening_id: Uuid,
    pub purchased_at: DateTime<Utc>,
}

// Screening with its owning Movie and Cinema resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningWithRelations {
    pub screening: Screening,
    pub movie: Movie,
    pub cinema: Cinema,
}

// Ticket with Screening, Movie and Cinema resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketWithRelations {
    pub ticket: Ticket,
    pub screening: ScreeningWithRelations,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub runtime_minutes: u16,
    pub release_date: NaiveDate,
    pub poster_ref: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewCinema {
    pub name: String,
    pub city: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScreening {
    pub time: NaiveTime,
    pub movie_id: Uuid,
    pub cinema_id: Uuid,
}

impl NewMovie {
    pub fn validate(&self) -> Result<(), String> {
        require_text("movie.title", &self.title)?;
        require_text("movie.poster_ref", &self.poster_ref)
    }
}

impl NewCinema {
    pub fn validate(&self) -> Result<(), String> {
        require_text("cinema.name", &self.name)?;
        require_text("cinema.city", &self.city)?;
        if !self.coordinate.latitude.is_finite() || !self.coordinate.longitude.is_finite() {
            return Err("cinema.coordinate must be finite".to_string());
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(format!("{field} must be at most {MAX_TEXT_LENGTH} characters"));
    }
    Ok(())
}

// Display labels derived from catalogue data.
//
// Purpose
// - Give every client the same text for showtimes, runtimes and poster locations.

use chrono::NaiveTime;
use chrono::Timelike;

pub const POSTER_DIRECTORY: &str = "Posters";

// "18:30". Seconds are dropped.
pub fn time_label(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

// "2h 8m"
pub fn runtime_label(runtime_minutes: u16) -> String {
    format!("{}h {}m", runtime_minutes / 60, runtime_minutes % 60)
}

pub fn poster_path(poster_ref: &str) -> String {
    format!("{POSTER_DIRECTORY}/{poster_ref}")
}

//! Response bodies.  Each one is a projection of a `db` row.
//!
//! Fields are declared in alphabetical order, which is the key order clients
//! see in the pretty-printed body.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use db::models::{EventRow, SessionRow, SpeakerRow, SpeakerWithBio};

/// Shown in place of `bio_text` for speakers without a bio.
pub const NO_BIO: &str = "No bio available";

#[derive(Debug, Serialize)]
pub struct EventDto {
    pub id: i64,
    pub location: String,
    pub name: String,
}

impl From<EventRow> for EventDto {
    fn from(row: EventRow) -> Self {
        Self { id: row.id, location: row.location, name: row.name }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionDto {
    pub id: i64,
    /// ISO-8601 without zone, or `null` when unset.
    pub start_time: Option<String>,
    pub title: String,
}

impl From<SessionRow> for SessionDto {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            start_time: row.start_time.as_ref().map(iso_8601),
            title: row.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeakerSummaryDto {
    pub id: i64,
    pub name: String,
}

impl From<SpeakerRow> for SpeakerSummaryDto {
    fn from(row: SpeakerRow) -> Self {
        Self { id: row.id, name: row.name }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeakerDto {
    pub bio_text: String,
    pub id: i64,
    pub name: String,
}

impl From<SpeakerWithBio> for SpeakerDto {
    fn from(sp: SpeakerWithBio) -> Self {
        Self {
            bio_text: sp.bio.map_or_else(|| NO_BIO.to_string(), |b| b.bio_text),
            id: sp.speaker.id,
            name: sp.speaker.name,
        }
    }
}

/// `2024-05-01T09:00:00`, or `2024-05-01T09:00:00.500000` when the
/// microsecond part is non-zero.  Precision below a microsecond is truncated.
fn iso_8601(t: &NaiveDateTime) -> String {
    if t.nanosecond() / 1_000 == 0 {
        t.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        t.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

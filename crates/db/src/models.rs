//! Row structs that map 1-to-1 onto database tables, plus the composite
//! structs returned by relationship traversals.
//!
//! These are *persistence* models — they carry no HTTP shape.  Response
//! DTOs live in the `api` crate.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// events
// ---------------------------------------------------------------------------

/// A persisted event row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// An event together with every session it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWithSessions {
    pub event: EventRow,
    pub sessions: Vec<SessionRow>,
}

// ---------------------------------------------------------------------------
// sessions
// ---------------------------------------------------------------------------

/// A persisted session row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SessionRow {
    pub id: i64,
    pub title: String,
    /// Wall-clock start, stored without a zone.
    pub start_time: Option<NaiveDateTime>,
    pub event_id: i64,
}

/// A session together with its linked speakers (and their bios).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWithSpeakers {
    pub session: SessionRow,
    pub speakers: Vec<SpeakerWithBio>,
}

// ---------------------------------------------------------------------------
// speakers
// ---------------------------------------------------------------------------

/// A persisted speaker row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SpeakerRow {
    pub id: i64,
    pub name: String,
}

/// A speaker with its optional bio resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerWithBio {
    pub speaker: SpeakerRow,
    pub bio: Option<BioRow>,
}

// ---------------------------------------------------------------------------
// bios
// ---------------------------------------------------------------------------

/// A persisted bio row.  At most one exists per speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BioRow {
    pub id: i64,
    pub bio_text: String,
    pub speaker_id: i64,
}

// ---------------------------------------------------------------------------
// session_speakers
// ---------------------------------------------------------------------------

/// Membership of a speaker in a session.  No attributes beyond the keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct SessionSpeakerRow {
    pub session_id: i64,
    pub speaker_id: i64,
}

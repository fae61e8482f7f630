//! Speaker repository functions.
//!
//! Bio resolution uses a `LEFT JOIN` on the unique `bios.speaker_id` key, so
//! each speaker yields exactly one row with the bio columns possibly NULL.

use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::{
    DbError,
    models::{BioRow, SpeakerRow, SpeakerWithBio},
};

/// Flat shape of a speaker `LEFT JOIN` bio row.
#[derive(FromRow)]
struct SpeakerBioJoinRow {
    id: i64,
    name: String,
    bio_id: Option<i64>,
    bio_text: Option<String>,
}

impl From<SpeakerBioJoinRow> for SpeakerWithBio {
    fn from(row: SpeakerBioJoinRow) -> Self {
        let bio = match (row.bio_id, row.bio_text) {
            (Some(id), Some(bio_text)) => Some(BioRow { id, bio_text, speaker_id: row.id }),
            _ => None,
        };
        Self {
            speaker: SpeakerRow { id: row.id, name: row.name },
            bio,
        }
    }
}

/// Insert a new speaker and return the stored row.
pub async fn create_speaker(pool: &SqlitePool, name: &str) -> Result<SpeakerRow, DbError> {
    let row = sqlx::query_as::<_, SpeakerRow>(
        r#"
        INSERT INTO speakers (name)
        VALUES (?1)
        RETURNING id, name
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    debug!(speaker_id = row.id, "speaker created");
    Ok(row)
}

/// Fetch a single speaker by its primary key.
pub async fn get_speaker(pool: &SqlitePool, id: i64) -> Result<Option<SpeakerRow>, DbError> {
    let row = sqlx::query_as::<_, SpeakerRow>(r#"SELECT id, name FROM speakers WHERE id = ?1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Return every speaker.
pub async fn list_speakers(pool: &SqlitePool) -> Result<Vec<SpeakerRow>, DbError> {
    let rows = sqlx::query_as::<_, SpeakerRow>(r#"SELECT id, name FROM speakers"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch a speaker with its bio, if it has one.
pub async fn get_speaker_with_bio(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<SpeakerWithBio>, DbError> {
    let row = sqlx::query_as::<_, SpeakerBioJoinRow>(
        r#"
        SELECT sp.id, sp.name, b.id AS bio_id, b.bio_text
        FROM speakers sp
        LEFT JOIN bios b ON b.speaker_id = sp.id
        WHERE sp.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(SpeakerWithBio::from))
}

/// Return every speaker linked to `session_id`, each with its bio.
pub async fn list_speakers_for_session(
    pool: &SqlitePool,
    session_id: i64,
) -> Result<Vec<SpeakerWithBio>, DbError> {
    let rows = sqlx::query_as::<_, SpeakerBioJoinRow>(
        r#"
        SELECT sp.id, sp.name, b.id AS bio_id, b.bio_text
        FROM session_speakers ss
        JOIN speakers sp ON sp.id = ss.speaker_id
        LEFT JOIN bios b ON b.speaker_id = sp.id
        WHERE ss.session_id = ?1
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SpeakerWithBio::from).collect())
}

/// Permanently delete a speaker.  Its bio and session memberships are
/// removed through the `ON DELETE CASCADE` keys.
///
/// Returns `DbError::Missing` if no row was deleted.
pub async fn delete_speaker(pool: &SqlitePool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM speakers WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::Missing { table: "speakers" });
    }

    debug!(speaker_id = id, "speaker deleted");
    Ok(())
}

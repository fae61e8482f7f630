//! Session and session-speaker membership repository functions.

use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::debug;

use crate::{
    DbError,
    models::{SessionRow, SessionSpeakerRow, SessionWithSpeakers},
    repository::speakers,
};

// ---------------------------------------------------------------------------
// sessions
// ---------------------------------------------------------------------------

/// Insert a new session under `event_id`.
///
/// Fails with a foreign-key violation when the event does not exist.
pub async fn create_session(
    pool: &SqlitePool,
    event_id: i64,
    title: &str,
    start_time: Option<NaiveDateTime>,
) -> Result<SessionRow, DbError> {
    let row = sqlx::query_as::<_, SessionRow>(
        r#"
        INSERT INTO sessions (title, start_time, event_id)
        VALUES (?1, ?2, ?3)
        RETURNING id, title, start_time, event_id
        "#,
    )
    .bind(title)
    .bind(start_time)
    .bind(event_id)
    .fetch_one(pool)
    .await?;

    debug!(session_id = row.id, event_id, "session created");
    Ok(row)
}

/// Fetch a single session by its primary key.
pub async fn get_session(pool: &SqlitePool, id: i64) -> Result<Option<SessionRow>, DbError> {
    let row = sqlx::query_as::<_, SessionRow>(
        r#"SELECT id, title, start_time, event_id FROM sessions WHERE id = ?1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Return every session.
pub async fn list_sessions(pool: &SqlitePool) -> Result<Vec<SessionRow>, DbError> {
    let rows = sqlx::query_as::<_, SessionRow>(
        r#"SELECT id, title, start_time, event_id FROM sessions"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every session owned by `event_id`.
pub async fn list_sessions_for_event(
    pool: &SqlitePool,
    event_id: i64,
) -> Result<Vec<SessionRow>, DbError> {
    let rows = sqlx::query_as::<_, SessionRow>(
        r#"SELECT id, title, start_time, event_id FROM sessions WHERE event_id = ?1"#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch a session and resolve its speakers, each with its bio.
pub async fn get_session_with_speakers(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<SessionWithSpeakers>, DbError> {
    let Some(session) = get_session(pool, id).await? else {
        return Ok(None);
    };

    let speakers = speakers::list_speakers_for_session(pool, session.id).await?;
    Ok(Some(SessionWithSpeakers { session, speakers }))
}

/// Permanently delete a session.  Speaker memberships are dropped by the
/// storage engine; the speakers themselves survive.
///
/// Returns `DbError::Missing` if no row was deleted.
pub async fn delete_session(pool: &SqlitePool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM sessions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::Missing { table: "sessions" });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// session_speakers
// ---------------------------------------------------------------------------

/// Link a speaker to a session.
///
/// Linking the same pair twice violates the composite primary key.
pub async fn add_speaker_to_session(
    pool: &SqlitePool,
    session_id: i64,
    speaker_id: i64,
) -> Result<SessionSpeakerRow, DbError> {
    let row = sqlx::query_as::<_, SessionSpeakerRow>(
        r#"
        INSERT INTO session_speakers (session_id, speaker_id)
        VALUES (?1, ?2)
        RETURNING session_id, speaker_id
        "#,
    )
    .bind(session_id)
    .bind(speaker_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Return every membership row.
pub async fn list_session_speakers(pool: &SqlitePool) -> Result<Vec<SessionSpeakerRow>, DbError> {
    let rows = sqlx::query_as::<_, SessionSpeakerRow>(
        r#"SELECT session_id, speaker_id FROM session_speakers"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

//! Event repository functions.

use sqlx::SqlitePool;
use tracing::debug;

use crate::{
    DbError,
    models::{EventRow, EventWithSessions},
    repository::sessions,
};

/// Insert a new event and return the stored row.
pub async fn create_event(
    pool: &SqlitePool,
    name: &str,
    location: &str,
) -> Result<EventRow, DbError> {
    let row = sqlx::query_as::<_, EventRow>(
        r#"
        INSERT INTO events (name, location)
        VALUES (?1, ?2)
        RETURNING id, name, location
        "#,
    )
    .bind(name)
    .bind(location)
    .fetch_one(pool)
    .await?;

    debug!(event_id = row.id, "event created");
    Ok(row)
}

/// Fetch a single event by its primary key.
pub async fn get_event(pool: &SqlitePool, id: i64) -> Result<Option<EventRow>, DbError> {
    let row = sqlx::query_as::<_, EventRow>(
        r#"SELECT id, name, location FROM events WHERE id = ?1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Return every event.
pub async fn list_events(pool: &SqlitePool) -> Result<Vec<EventRow>, DbError> {
    let rows = sqlx::query_as::<_, EventRow>(r#"SELECT id, name, location FROM events"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch an event and resolve the sessions it owns.
pub async fn get_event_with_sessions(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<EventWithSessions>, DbError> {
    let Some(event) = get_event(pool, id).await? else {
        return Ok(None);
    };

    let sessions = sessions::list_sessions_for_event(pool, event.id).await?;
    Ok(Some(EventWithSessions { event, sessions }))
}

/// Permanently delete an event.  Its sessions (and their speaker
/// memberships) go with it through the `ON DELETE CASCADE` keys.
///
/// Returns `DbError::Missing` if no row was deleted.
pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM events WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::Missing { table: "events" });
    }

    debug!(event_id = id, "event deleted");
    Ok(())
}

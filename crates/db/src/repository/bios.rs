//! Bio repository functions.

use sqlx::SqlitePool;

use crate::{DbError, models::BioRow};

/// Attach a bio to `speaker_id`.
///
/// A second bio for the same speaker violates `uq_bios_speaker_id`.
pub async fn create_bio(
    pool: &SqlitePool,
    speaker_id: i64,
    bio_text: &str,
) -> Result<BioRow, DbError> {
    let row = sqlx::query_as::<_, BioRow>(
        r#"
        INSERT INTO bios (bio_text, speaker_id)
        VALUES (?1, ?2)
        RETURNING id, bio_text, speaker_id
        "#,
    )
    .bind(bio_text)
    .bind(speaker_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch a single bio by its primary key.
pub async fn get_bio(pool: &SqlitePool, id: i64) -> Result<Option<BioRow>, DbError> {
    let row = sqlx::query_as::<_, BioRow>(
        r#"SELECT id, bio_text, speaker_id FROM bios WHERE id = ?1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Fetch the bio belonging to `speaker_id`, if any.
pub async fn get_bio_for_speaker(
    pool: &SqlitePool,
    speaker_id: i64,
) -> Result<Option<BioRow>, DbError> {
    let row = sqlx::query_as::<_, BioRow>(
        r#"SELECT id, bio_text, speaker_id FROM bios WHERE speaker_id = ?1"#,
    )
    .bind(speaker_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Return every bio.
pub async fn list_bios(pool: &SqlitePool) -> Result<Vec<BioRow>, DbError> {
    let rows = sqlx::query_as::<_, BioRow>(r#"SELECT id, bio_text, speaker_id FROM bios"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

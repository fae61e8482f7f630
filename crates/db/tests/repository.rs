//! Repository integration tests against an in-memory, migrated SQLite pool.

use std::collections::HashSet;

use chrono::NaiveDate;
use db::models::SpeakerWithBio;
use db::pool::open_in_memory;
use db::repository::{bios, events, sessions, speakers};
use db::DbError;

fn at(y: i32, m: u32, d: u32, h: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn assert_unique_violation(err: DbError) {
    match err {
        DbError::Sqlx(sqlx::Error::Database(e)) => assert!(e.is_unique_violation(), "{e}"),
        other => panic!("expected a unique violation, got {other:?}"),
    }
}

// ============================================================
// Lookups
// ============================================================

#[tokio::test]
async fn list_events_returns_every_row() {
    let pool = open_in_memory().await.unwrap();
    let a = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let b = events::create_event(&pool, "RustConf", "Montreal").await.unwrap();

    let listed: HashSet<_> = events::list_events(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.name, e.location))
        .collect();

    let expected: HashSet<_> = [a, b].into_iter().map(|e| (e.id, e.name, e.location)).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let pool = open_in_memory().await.unwrap();
    assert!(events::list_events(&pool).await.unwrap().is_empty());
    assert!(sessions::list_sessions(&pool).await.unwrap().is_empty());
    assert!(speakers::list_speakers(&pool).await.unwrap().is_empty());
    assert!(bios::list_bios(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_ids_are_none_not_errors() {
    let pool = open_in_memory().await.unwrap();
    assert!(events::get_event(&pool, 999).await.unwrap().is_none());
    assert!(events::get_event_with_sessions(&pool, 999).await.unwrap().is_none());
    assert!(sessions::get_session(&pool, 999).await.unwrap().is_none());
    assert!(sessions::get_session_with_speakers(&pool, 999).await.unwrap().is_none());
    assert!(speakers::get_speaker(&pool, 999).await.unwrap().is_none());
    assert!(speakers::get_speaker_with_bio(&pool, 999).await.unwrap().is_none());
    assert!(bios::get_bio(&pool, 999).await.unwrap().is_none());
}

#[tokio::test]
async fn session_start_time_survives_storage() {
    let pool = open_in_memory().await.unwrap();
    let event = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let timed = sessions::create_session(&pool, event.id, "Keynote", Some(at(2024, 5, 1, 9)))
        .await
        .unwrap();
    let untimed = sessions::create_session(&pool, event.id, "Hallway", None)
        .await
        .unwrap();

    let loaded = sessions::get_session(&pool, timed.id).await.unwrap().unwrap();
    assert_eq!(loaded.start_time, Some(at(2024, 5, 1, 9)));
    assert_eq!(loaded.event_id, event.id);

    let loaded = sessions::get_session(&pool, untimed.id).await.unwrap().unwrap();
    assert_eq!(loaded.start_time, None);
}

// ============================================================
// Relationship traversal
// ============================================================

#[tokio::test]
async fn event_with_sessions_only_includes_its_own() {
    let pool = open_in_memory().await.unwrap();
    let pycon = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let other = events::create_event(&pool, "RustConf", "Montreal").await.unwrap();
    let s1 = sessions::create_session(&pool, pycon.id, "Keynote", None).await.unwrap();
    let s2 = sessions::create_session(&pool, pycon.id, "Lightning", None).await.unwrap();
    sessions::create_session(&pool, other.id, "Borrowck", None).await.unwrap();

    let loaded = events::get_event_with_sessions(&pool, pycon.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.event, pycon);

    let ids: HashSet<i64> = loaded.sessions.iter().map(|s| s.id).collect();
    assert_eq!(ids, HashSet::from([s1.id, s2.id]));
}

#[tokio::test]
async fn event_without_sessions_has_empty_list() {
    let pool = open_in_memory().await.unwrap();
    let event = events::create_event(&pool, "Empty", "Nowhere").await.unwrap();

    let loaded = events::get_event_with_sessions(&pool, event.id)
        .await
        .unwrap()
        .unwrap();
    assert!(loaded.sessions.is_empty());
}

#[tokio::test]
async fn speaker_with_bio_resolves_zero_or_one() {
    let pool = open_in_memory().await.unwrap();
    let with = speakers::create_speaker(&pool, "Ada").await.unwrap();
    let without = speakers::create_speaker(&pool, "Grace").await.unwrap();
    let bio = bios::create_bio(&pool, with.id, "Hello").await.unwrap();

    let loaded = speakers::get_speaker_with_bio(&pool, with.id).await.unwrap().unwrap();
    assert_eq!(loaded.speaker, with);
    assert_eq!(loaded.bio, Some(bio.clone()));

    let loaded = speakers::get_speaker_with_bio(&pool, without.id).await.unwrap().unwrap();
    assert_eq!(loaded.speaker, without);
    assert_eq!(loaded.bio, None);

    assert_eq!(bios::get_bio_for_speaker(&pool, with.id).await.unwrap(), Some(bio));
    assert_eq!(bios::get_bio_for_speaker(&pool, without.id).await.unwrap(), None);
}

#[tokio::test]
async fn session_with_speakers_resolves_bios_per_speaker() {
    let pool = open_in_memory().await.unwrap();
    let event = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let session = sessions::create_session(&pool, event.id, "Panel", None).await.unwrap();
    let lonely = sessions::create_session(&pool, event.id, "Solo", None).await.unwrap();
    let a = speakers::create_speaker(&pool, "Ada").await.unwrap();
    let b = speakers::create_speaker(&pool, "Grace").await.unwrap();
    let a_bio = bios::create_bio(&pool, a.id, "Hello").await.unwrap();
    sessions::add_speaker_to_session(&pool, session.id, a.id).await.unwrap();
    sessions::add_speaker_to_session(&pool, session.id, b.id).await.unwrap();

    let loaded = sessions::get_session_with_speakers(&pool, session.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.session, session);
    assert_eq!(loaded.speakers.len(), 2);

    let bio_of = |id: i64| {
        let found: &SpeakerWithBio = loaded.speakers.iter().find(|s| s.speaker.id == id).unwrap();
        found.bio.clone()
    };
    assert_eq!(bio_of(a.id), Some(a_bio));
    assert_eq!(bio_of(b.id), None);

    let loaded = sessions::get_session_with_speakers(&pool, lonely.id)
        .await
        .unwrap()
        .unwrap();
    assert!(loaded.speakers.is_empty());
}

// ============================================================
// Constraints
// ============================================================

#[tokio::test]
async fn second_bio_for_a_speaker_is_rejected() {
    let pool = open_in_memory().await.unwrap();
    let speaker = speakers::create_speaker(&pool, "Ada").await.unwrap();
    bios::create_bio(&pool, speaker.id, "first").await.unwrap();

    let err = bios::create_bio(&pool, speaker.id, "second").await.unwrap_err();
    assert_unique_violation(err);
}

#[tokio::test]
async fn duplicate_membership_is_rejected() {
    let pool = open_in_memory().await.unwrap();
    let event = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let session = sessions::create_session(&pool, event.id, "Panel", None).await.unwrap();
    let speaker = speakers::create_speaker(&pool, "Ada").await.unwrap();
    sessions::add_speaker_to_session(&pool, session.id, speaker.id).await.unwrap();

    let err = sessions::add_speaker_to_session(&pool, session.id, speaker.id)
        .await
        .unwrap_err();
    assert_unique_violation(err);
}

#[tokio::test]
async fn session_requires_an_existing_event() {
    let pool = open_in_memory().await.unwrap();

    let err = sessions::create_session(&pool, 42, "Orphan", None).await.unwrap_err();
    match err {
        DbError::Sqlx(sqlx::Error::Database(e)) => assert!(e.is_foreign_key_violation(), "{e}"),
        other => panic!("expected a foreign key violation, got {other:?}"),
    }
}

// ============================================================
// Cascades
// ============================================================

#[tokio::test]
async fn deleting_an_event_deletes_its_sessions() {
    let pool = open_in_memory().await.unwrap();
    let doomed = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let kept = events::create_event(&pool, "RustConf", "Montreal").await.unwrap();
    let s1 = sessions::create_session(&pool, doomed.id, "Keynote", None).await.unwrap();
    let s2 = sessions::create_session(&pool, kept.id, "Borrowck", None).await.unwrap();
    let speaker = speakers::create_speaker(&pool, "Ada").await.unwrap();
    sessions::add_speaker_to_session(&pool, s1.id, speaker.id).await.unwrap();

    events::delete_event(&pool, doomed.id).await.unwrap();

    assert!(sessions::get_session(&pool, s1.id).await.unwrap().is_none());
    assert!(sessions::get_session(&pool, s2.id).await.unwrap().is_some());
    assert!(sessions::list_session_speakers(&pool).await.unwrap().is_empty());
    // Speakers are not owned by sessions.
    assert!(speakers::get_speaker(&pool, speaker.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_speaker_deletes_its_bio_and_memberships() {
    let pool = open_in_memory().await.unwrap();
    let event = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let session = sessions::create_session(&pool, event.id, "Panel", None).await.unwrap();
    let speaker = speakers::create_speaker(&pool, "Ada").await.unwrap();
    let bio = bios::create_bio(&pool, speaker.id, "Hello").await.unwrap();
    sessions::add_speaker_to_session(&pool, session.id, speaker.id).await.unwrap();

    speakers::delete_speaker(&pool, speaker.id).await.unwrap();

    assert!(bios::get_bio(&pool, bio.id).await.unwrap().is_none());
    assert!(sessions::list_session_speakers(&pool).await.unwrap().is_empty());
    assert!(sessions::get_session(&pool, session.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_session_keeps_its_speakers() {
    let pool = open_in_memory().await.unwrap();
    let event = events::create_event(&pool, "PyConf", "NYC").await.unwrap();
    let session = sessions::create_session(&pool, event.id, "Panel", None).await.unwrap();
    let speaker = speakers::create_speaker(&pool, "Ada").await.unwrap();
    sessions::add_speaker_to_session(&pool, session.id, speaker.id).await.unwrap();

    sessions::delete_session(&pool, session.id).await.unwrap();

    assert!(sessions::list_session_speakers(&pool).await.unwrap().is_empty());
    assert!(speakers::get_speaker(&pool, speaker.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_missing_rows_names_the_table() {
    let pool = open_in_memory().await.unwrap();
    assert!(matches!(
        events::delete_event(&pool, 7).await,
        Err(DbError::Missing { table: "events" })
    ));
    assert!(matches!(
        speakers::delete_speaker(&pool, 7).await,
        Err(DbError::Missing { table: "speakers" })
    ));
    assert!(matches!(
        sessions::delete_session(&pool, 7).await,
        Err(DbError::Missing { table: "sessions" })
    ));

    let err = events::delete_event(&pool, 7).await.unwrap_err();
    assert_eq!(err.to_string(), "no row to delete in `events`");
}

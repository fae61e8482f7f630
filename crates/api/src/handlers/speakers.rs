use axum::extract::{Path, State};
use tracing::debug;

use super::AppState;
use crate::dto::{SpeakerDto, SpeakerSummaryDto};
use crate::error::{ApiError, ApiResult};
use crate::json::PrettyJson;
use db::repository::speakers as speaker_repo;

/// `GET /speakers`
pub async fn list(
    State(state): State<AppState>,
) -> ApiResult<PrettyJson<Vec<SpeakerSummaryDto>>> {
    let speakers = speaker_repo::list_speakers(&state.pool).await?;
    debug!(count = speakers.len(), "listing speakers");
    Ok(PrettyJson(speakers.into_iter().map(SpeakerSummaryDto::from).collect()))
}

/// `GET /speakers/{id}`
pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<PrettyJson<SpeakerDto>> {
    let speaker = speaker_repo::get_speaker_with_bio(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("Speaker"))?;

    debug!(speaker_id = id, has_bio = speaker.bio.is_some(), "fetched speaker");
    Ok(PrettyJson(SpeakerDto::from(speaker)))
}

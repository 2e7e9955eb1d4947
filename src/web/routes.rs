use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use log::info;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::segmentation::{segment_transcript, SegmenterConfig};
use crate::transcript::{extract_video_id, TranscriptSource};
use crate::web::pages;

pub struct AppState {
    pub config: AppConfig,
    pub transcripts: Arc<dyn TranscriptSource>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

#[derive(Deserialize)]
struct IndexQuery {
    url: Option<String>,
}

/// Single route, mirroring the tool's one-page flow: no `url` shows the
/// form, a `url` runs extract → fetch → segment → render.
async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> AppResult<Html<String>> {
    let Some(url) = query.url else {
        return Ok(Html(pages::landing_page(state.config.pause_threshold_ms)));
    };

    let video_id = extract_video_id(&url).ok_or(AppError::InvalidUrl)?;

    let cues = state
        .transcripts
        .fetch_transcript(&video_id, &state.config.preferred_lang)
        .await?;

    let segmenter = SegmenterConfig {
        pause_threshold_ms: state.config.pause_threshold_ms,
    };
    let segments = segment_transcript(&cues, &segmenter);

    // A single segment means the pauses never split anything; there is
    // nothing to practice section by section.
    if segments.len() < 2 {
        return Err(AppError::InsufficientSegments(segments.len()));
    }

    info!(
        "video {}: {} cues -> {} segments",
        video_id,
        cues.len(),
        segments.len()
    );

    Ok(Html(pages::player_page(
        &video_id,
        &segments,
        state.config.clip_duration_secs,
        state.config.pause_threshold_ms,
    )))
}

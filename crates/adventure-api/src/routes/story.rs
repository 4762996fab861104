//! Routes for story navigation.
//!
//! Every navigation request names the page the reader is on; the server
//! keeps no per-reader state.

use adventure_story::application::query_handlers::{self, PageView};
use adventure_story::{PageId, Slot};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::sound::SoundEffect;
use crate::state::AppState;

/// Response body for GET /.
#[derive(Debug, Serialize)]
pub struct StoryInfoResponse {
    /// The entry page.
    pub root: PageId,
    /// Number of pages in the story.
    pub page_count: usize,
    /// Hash of the story source.
    pub version_hash: String,
}

/// Request body for POST /follow.
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    /// The page the reader is on.
    pub page_id: PageId,
    /// The choice the reader picked.
    pub slot: Slot,
}

/// Sound cue attached to a transition.
#[derive(Debug, Serialize)]
pub struct SoundEffectBody {
    /// Asset name.
    pub name: &'static str,
    /// Asset file name.
    pub file: &'static str,
}

impl From<SoundEffect> for SoundEffectBody {
    fn from(effect: SoundEffect) -> Self {
        Self {
            name: effect.asset_name(),
            file: effect.file_name(),
        }
    }
}

/// Response body for POST /follow.
#[derive(Debug, Serialize)]
pub struct FollowResponse {
    /// The destination page.
    pub page: PageView,
    /// The cue for arriving at the destination.
    pub sound_effect: SoundEffectBody,
}

/// Response body for POST /restart.
#[derive(Debug, Serialize)]
pub struct RestartResponse {
    /// The entry page.
    pub page: PageView,
}

/// GET /
#[instrument(skip(state))]
async fn story_info(State(state): State<AppState>) -> Json<StoryInfoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling story info request");

    let story = &state.story;
    Json(StoryInfoResponse {
        root: story.graph.root().id.clone(),
        page_count: story.graph.len(),
        version_hash: story.version_hash.clone(),
    })
}

/// GET /root
#[instrument(skip(state))]
async fn root_page(State(state): State<AppState>) -> Json<PageView> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling root page request");

    Json(query_handlers::view_root(&state.story.graph))
}

/// GET /pages/{page_id}
#[instrument(skip(state, page_id), fields(page_id = %page_id))]
async fn get_page(
    State(state): State<AppState>,
    Path(page_id): Path<PageId>,
) -> Result<Json<PageView>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling page request");

    let graph = &state.story.graph;
    let page = graph
        .page(&page_id)
        .ok_or_else(|| ApiError::PageNotFound(page_id.clone()))?;

    Ok(Json(query_handlers::view_page(graph, page)))
}

/// POST /follow
#[instrument(skip(state, request), fields(page_id = %request.page_id, slot = %request.slot))]
async fn follow(
    State(state): State<AppState>,
    Json(request): Json<FollowRequest>,
) -> Result<Json<FollowResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling follow request");

    let story = &state.story;
    let page = story
        .graph
        .page(&request.page_id)
        .ok_or_else(|| ApiError::PageNotFound(request.page_id.clone()))?;

    let view = query_handlers::view_follow(&story.graph, page, request.slot)?;
    let effect = story.cues.cue_for(&view.page_id);

    info!(%correlation_id, to = %view.page_id, sound = effect.asset_name(), "choice followed");

    Ok(Json(FollowResponse {
        page: view,
        sound_effect: effect.into(),
    }))
}

/// POST /restart
#[instrument(skip(state))]
async fn restart(State(state): State<AppState>) -> Json<RestartResponse> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "restarting story");
    Json(RestartResponse {
        page: query_handlers::view_restart(&state.story.graph),
    })
}

/// Returns the router for story navigation.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(story_info))
        .route("/root", get(root_page))
        .route("/pages/{page_id}", get(get_page))
        .route("/follow", post(follow))
        .route("/restart", post(restart))
}

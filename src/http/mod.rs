//! HTTP surface of the win ledger.
//!
//! Thin handlers over [`LedgerService`]: request shape checks live here,
//! everything else (normalization, authorization, persistence) in the
//! service.

pub mod error;

pub use error::ApiError;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::LedgerService;

/// Shared handle to the ledger service, cloned into each handler.
pub type SharedService = Arc<LedgerService>;

/// Build the API router.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(index))
        .route(
            "/squad-wins",
            get(list_wins).post(append_win).delete(delete_win),
        )
        .route("/squad-wins/leaderboard", get(leaderboard))
        .with_state(service)
}

async fn index() -> &'static str {
    "squadlog API\n\n\
     GET /squad-wins - list recorded wins\n\
     POST /squad-wins - record a win, body {\"players\": [..]}\n\
     DELETE /squad-wins?id=<id>&token=<token> - delete a win\n\
     GET /squad-wins/leaderboard - per-player win counts\n"
}

async fn list_wins(State(service): State<SharedService>) -> impl IntoResponse {
    Json(service.list().await)
}

async fn append_win(
    State(service): State<SharedService>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let players = extract_players(&body)
        .ok_or_else(|| ApiError::Validation("Players array is required".to_string()))?;
    let win = service.append(players).await?;
    Ok((StatusCode::CREATED, Json(win)))
}

#[derive(Debug, Deserialize)]
struct DeleteParams {
    id: Option<String>,
    token: Option<String>,
}

async fn delete_win(
    State(service): State<SharedService>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete(params.id.as_deref().unwrap_or(""), params.token.as_deref())
        .await?;
    Ok(Json(json!({ "success": true })))
}

async fn leaderboard(State(service): State<SharedService>) -> impl IntoResponse {
    Json(service.leaderboard().await)
}

/// Pull the player list out of a request body. Returns `None` unless
/// `players` is a non-empty array of strings.
fn extract_players(body: &Value) -> Option<Vec<String>> {
    let players = body.get("players")?.as_array()?;
    if players.is_empty() {
        return None;
    }
    players
        .iter()
        .map(|p| p.as_str().map(str::to_string))
        .collect()
}

//! Axum route handlers for widget state.

use axum::{
    extract::{Path, Query},
    response::sse::{Event, Sse},
    Json,
};
use chrono::{DateTime, Utc};
use futures::{channel::mpsc, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::widgets::action_bar::{ActionBarTracker, DEFAULT_THRESHOLD};
use crate::widgets::countdown::{spawn_countdown, Countdown, CountdownStatus, TimeRemaining};
use crate::widgets::skeleton::{layout, SkeletonShape, SkeletonVariant, DEFAULT_LINES};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CountdownQuery {
    /// RFC 3339 timestamp, e.g. `2030-01-01T00:00:00Z`.
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct CountdownResponse {
    pub expired: bool,
    pub remaining: Option<TimeRemaining>,
}

impl From<CountdownStatus> for CountdownResponse {
    fn from(status: CountdownStatus) -> Self {
        match status {
            CountdownStatus::Running(remaining) => Self {
                expired: false,
                remaining: Some(remaining),
            },
            CountdownStatus::Expired => Self {
                expired: true,
                remaining: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SkeletonQuery {
    pub lines: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkeletonResponse {
    pub variant: SkeletonVariant,
    pub shapes: Vec<SkeletonShape>,
}

#[derive(Debug, Deserialize)]
pub struct ActionBarRequest {
    pub threshold: Option<f64>,
    pub positions: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ActionBarResponse {
    pub visible: Vec<bool>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/widgets/countdown?target=...
///
/// One-off snapshot of the countdown.
pub async fn handle_countdown(
    Query(query): Query<CountdownQuery>,
) -> Result<Json<CountdownResponse>, AppError> {
    let target = parse_target(&query.target)?;
    let status = Countdown::new(target, || {}).tick(Utc::now());
    Ok(Json(status.into()))
}

/// GET /api/v1/widgets/countdown/stream?target=...
///
/// Server-sent events, one per second, ending with the expired event. The
/// ticker stops as soon as the client disconnects.
pub async fn handle_countdown_stream(
    Query(query): Query<CountdownQuery>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, AppError> {
    let target = parse_target(&query.target)?;
    let (tx, rx) = mpsc::unbounded();

    let handle = spawn_countdown(
        target,
        move |status| {
            // receiver gone means the client disconnected; the handle drop stops the task
            let _ = tx.unbounded_send(status);
        },
        move || info!("Countdown to {target} reached"),
    );

    // the handle lives as long as the response stream
    let events = rx.map(move |status: CountdownStatus| {
        let _ticker = &handle;
        Event::default().json_data(CountdownResponse::from(status))
    });
    Ok(Sse::new(events))
}

fn parse_target(raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|target| target.with_timezone(&Utc))
        .map_err(|e| AppError::Validation(format!("target must be an RFC 3339 timestamp: {e}")))
}

/// GET /api/v1/widgets/skeleton/:variant?lines=N
pub async fn handle_skeleton(
    Path(variant): Path<String>,
    Query(query): Query<SkeletonQuery>,
) -> Result<Json<SkeletonResponse>, AppError> {
    let variant: SkeletonVariant = variant.parse().map_err(AppError::NotFound)?;
    Ok(Json(SkeletonResponse {
        variant,
        shapes: layout(variant, query.lines.unwrap_or(DEFAULT_LINES)),
    }))
}

/// POST /api/v1/widgets/action-bar
///
/// Replays a sequence of scroll positions and reports visibility after each.
pub async fn handle_action_bar(Json(request): Json<ActionBarRequest>) -> Json<ActionBarResponse> {
    let mut tracker = ActionBarTracker::new(request.threshold.unwrap_or(DEFAULT_THRESHOLD));
    let visible = request
        .positions
        .iter()
        .map(|&y| tracker.on_scroll(y))
        .collect();
    Json(ActionBarResponse { visible })
}

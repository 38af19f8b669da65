//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::Local;
use tracing::info;

use crate::generation::generator::{generate_resume, GenerateRequest};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// POST /api/v1/resumes/generate
///
/// Waits the configured generation delay, then returns a template-built record.
/// Never fails on content; an empty form yields a generic record.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<ResumeRecord> {
    tokio::time::sleep(state.config.generation_delay).await;

    let record = generate_resume(&request, Local::now().date_naive());
    info!(
        "Generated resume for '{}' ({:?}, {} roles, {} skills)",
        record.personal_info.title,
        request.career_level,
        record.experience.len(),
        record.skills.len()
    );

    Json(record)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::config::Config;
    use crate::extraction::FileTextExtractor;

    fn state_with_delay(delay: Duration) -> AppState {
        AppState {
            config: Config {
                generation_delay: delay,
                ..Config::default()
            },
            extractor: Arc::new(FileTextExtractor),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_waits_for_configured_delay() {
        let start = tokio::time::Instant::now();
        let request = GenerateRequest {
            profession: "Product Manager".into(),
            ..Default::default()
        };

        let Json(record) =
            handle_generate(State(state_with_delay(Duration::from_millis(1500))), Json(request))
                .await;

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(record.personal_info.title, "Product Manager");
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_is_pending_before_delay_elapses() {
        let state = state_with_delay(Duration::from_secs(2));
        let task = tokio::spawn(handle_generate(State(state), Json(GenerateRequest::default())));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!task.is_finished());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let Json(record) = task.await.unwrap();
        assert!(!record.skills.is_empty());
    }
}

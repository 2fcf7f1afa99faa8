//! Router and request handlers

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use sakina_agent::{ScreeningEngine, ScreeningReply};
use sakina_config::ServerSettings;
use sakina_core::ConversationState;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::logbook::Logbook;
use crate::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScreeningEngine>,
    pub logbook: Option<Arc<Logbook>>,
}

#[derive(Deserialize)]
pub struct ScreenRequest {
    /// Anonymous id; one is minted when absent so a session can continue
    pub user_id: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ScreenResponse {
    pub user_id: String,
    #[serde(flatten)]
    pub reply: ScreeningReply,
}

pub fn create_router(state: AppState, settings: &ServerSettings) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/screen", post(screen))
        .route("/api/state/:user_id", get(get_state).delete(reset_state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.timeout_seconds,
        )))
        .with_state(state);

    if settings.cors_enabled {
        router = router.layer(build_cors(settings));
    }
    router
}

fn build_cors(settings: &ServerSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    if settings.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = settings
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (classifier_ok, generator_ok) = state.engine.collaborator_health().await;
    let logbook_ok = state.logbook.as_ref().map(|l| l.is_writable());

    let status = if classifier_ok && generator_ok {
        "ok"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "classifier_reachable": classifier_ok,
        "generator_reachable": generator_ok,
        "logbook_writable": logbook_ok,
        "active_sessions": state.engine.store().len(),
    }))
}

async fn screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, ServerError> {
    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let reply = state.engine.handle_turn(&user_id, &request.message).await?;

    if let Some(logbook) = &state.logbook {
        if let Err(err) = logbook.append(&reply.record) {
            tracing::error!(error = %err, "failed to append screening record");
        }
    }

    Ok(Json(ScreenResponse { user_id, reply }))
}

async fn get_state(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ConversationState>, ServerError> {
    state
        .engine
        .store()
        .get(&user_id)
        .map(Json)
        .ok_or(ServerError::UnknownUser(user_id))
}

async fn reset_state(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, ServerError> {
    if state.engine.store().reset(&user_id) {
        Ok(Json(json!({ "reset": true })))
    } else {
        Err(ServerError::UnknownUser(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sakina_core::{
        Classifier, ClassifierVerdict, Generator, Label, Probabilities, Result,
    };

    struct StubClassifier {
        reachable: bool,
    }

    #[async_trait]
    impl Classifier for StubClassifier {
        async fn predict(&self, _text: &str) -> Result<ClassifierVerdict> {
            Ok(ClassifierVerdict::new(
                Label::NotDepressed,
                Probabilities::new(0.8, 0.2),
            ))
        }

        async fn is_available(&self) -> bool {
            self.reachable
        }
    }

    struct StubGenerator;

    #[async_trait]
    impl Generator for StubGenerator {
        async fn generate(&self, _system: &str, _user: &str, _max_tokens: u32) -> Result<String> {
            Ok("حسنا؟".to_string())
        }

        fn model_name(&self) -> &str {
            "stub"
        }
    }

    fn app_state(classifier_reachable: bool) -> AppState {
        let engine = ScreeningEngine::new(
            Arc::new(StubClassifier {
                reachable: classifier_reachable,
            }),
            Arc::new(StubGenerator),
            150,
        );
        AppState {
            engine: Arc::new(engine),
            logbook: None,
        }
    }

    #[tokio::test]
    async fn test_ready_reports_collaborator_flags() {
        let Json(body) = ready(State(app_state(true))).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["classifier_reachable"], true);
        assert_eq!(body["generator_reachable"], true);
        assert_eq!(body["logbook_writable"], serde_json::Value::Null);
        assert_eq!(body["active_sessions"], 0);
    }

    #[tokio::test]
    async fn test_ready_degrades_when_classifier_unreachable() {
        let Json(body) = ready(State(app_state(false))).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["classifier_reachable"], false);
    }

    #[test]
    fn test_screen_request_accepts_missing_user_id() {
        let parsed: ScreenRequest =
            serde_json::from_str(r#"{"message": "مرحبا"}"#).unwrap();
        assert!(parsed.user_id.is_none());
        assert_eq!(parsed.message, "مرحبا");
    }

    #[test]
    fn test_cors_with_explicit_origins() {
        let mut settings = ServerSettings::default();
        settings.cors_origins = vec!["https://app.example.com".to_string()];
        // Builds without panicking on a valid origin list
        let _layer = build_cors(&settings);
    }
}

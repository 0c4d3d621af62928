use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, routing::get};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::error;

use crate::client::OAuthClient;
use crate::registry::StateStore;
use crate::skills::SkillSource;
use crate::store::TokenStore;
use crate::{AuthError, handlers};

/// Shared state for the HTTP surface. Stores are trait objects so tests can
/// substitute their own implementations.
#[derive(Clone)]
pub struct AppState {
    pub client: OAuthClient,
    pub states: Arc<dyn StateStore>,
    pub tokens: Arc<dyn TokenStore>,
    pub skills: Option<Arc<dyn SkillSource>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/linkedin", get(handlers::login))
        .route("/auth/linkedin/callback", get(handlers::callback))
        .route("/profile", get(handlers::profile))
        .route("/skills", get(handlers::skills))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AuthError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AuthError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
            AuthError::ProviderRejected { description, .. } => {
                (StatusCode::BAD_REQUEST, description.clone())
            }
            AuthError::MissingParam(_)
            | AuthError::InvalidState
            | AuthError::Exchange { .. }
            | AuthError::ProfileFetch { .. }
            | AuthError::InvalidResponse { .. }
            | AuthError::SkillSource(_) => (StatusCode::BAD_REQUEST, None),
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, None),
            AuthError::Io(_) | AuthError::OsRng { .. } | AuthError::Url(_) | AuthError::Http(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}

use axum::extract::{Query, State};
use axum::http::header::{AUTHORIZATION, LOCATION};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::AuthError;
use crate::server::AppState;
use crate::skills::MAX_SKILLS;
use crate::types::{Profile, Skill, TokenRecord};

#[derive(Debug, Deserialize)]
pub(crate) struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CallbackResponse {
    access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillsQuery {
    profile_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SkillsResponse {
    skills: Vec<Skill>,
}

/// Begins the login flow with a 302 to the provider's authorization page.
pub(crate) async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AuthError> {
    let csrf = state.states.issue()?;
    let auth = state.client.authorization_url(&csrf)?;
    debug!(provider = state.client.provider().id(), "redirecting to provider");
    Ok((StatusCode::FOUND, [(LOCATION, auth.authorization_url)]))
}

/// Completes the login flow.
///
/// The state must be consumed before the token endpoint is contacted; a
/// forged or replayed callback never triggers an exchange.
pub(crate) async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Json<CallbackResponse>, AuthError> {
    if let Some(error) = query.error {
        return Err(AuthError::ProviderRejected {
            error,
            description: query.error_description,
        });
    }

    let code = query.code.ok_or(AuthError::MissingParam("code"))?;
    let csrf = query.state.ok_or(AuthError::MissingParam("state"))?;

    if !state.states.consume(&csrf) {
        return Err(AuthError::InvalidState);
    }

    let token = state.client.exchange_code(&code).await?;

    // Fail-open: a profile fetch failure degrades to a null profile rather
    // than discarding a token that was already granted.
    let profile = match state.client.fetch_profile(&token.access_token).await {
        Ok(profile) => Some(profile),
        Err(err) => {
            warn!(error = %err, "profile fetch failed during callback");
            None
        }
    };

    state
        .tokens
        .put(TokenRecord::from_response(&token, profile.clone()));
    info!(provider = state.client.provider().id(), "login completed");

    Ok(Json(CallbackResponse {
        access_token: token.access_token,
        expires_in: token.expires_in,
        refresh_token: token.refresh_token,
        refresh_token_expires_in: token.refresh_token_expires_in,
        scope: token.scope,
        profile,
    }))
}

/// Serves the normalized profile for the bearer token.
///
/// The profile cached at callback time is preferred; on a miss the provider
/// is queried live and the record updated.
pub(crate) async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Profile>, AuthError> {
    let token = bearer_token(&headers)?;
    let mut record = state.tokens.get(token).ok_or(AuthError::Unauthorized)?;

    if let Some(profile) = record.profile.clone() {
        return Ok(Json(profile));
    }

    let profile = state.client.fetch_profile(&record.access_token).await?;
    record.profile = Some(profile.clone());
    state.tokens.put(record);
    Ok(Json(profile))
}

/// Proxies the skill-scraping collaborator, capped at the top entries.
pub(crate) async fn skills(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SkillsQuery>,
) -> Result<Json<SkillsResponse>, AuthError> {
    let token = bearer_token(&headers)?;
    if state.tokens.get(token).is_none() {
        return Err(AuthError::Unauthorized);
    }

    let profile_url = query
        .profile_url
        .ok_or(AuthError::MissingParam("profile_url"))?;
    let source = state
        .skills
        .as_ref()
        .ok_or_else(|| AuthError::Config("SKILL_SCRAPER_URL is not set".to_string()))?;

    let mut skills = source.fetch_skills(&profile_url).await?;
    skills.truncate(MAX_SKILLS);
    Ok(Json(SkillsResponse { skills }))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::Unauthorized)
}

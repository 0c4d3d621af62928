use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::types::{AuthorizationRequest, Profile, TokenResponse};
use crate::{AuthError, OAuthProvider};

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: Option<String>,
    pub timeout: Option<Duration>,
}

impl OAuthConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scope: None,
            timeout: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Server-side OAuth client: builds authorization redirects, exchanges
/// authorization codes, and fetches user-info.
#[derive(Clone)]
pub struct OAuthClient {
    provider: Arc<dyn OAuthProvider>,
    config: OAuthConfig,
    http: Client,
}

impl OAuthClient {
    pub fn new(provider: Arc<dyn OAuthProvider>, config: OAuthConfig) -> Result<Self, AuthError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            provider,
            config,
            http,
        })
    }

    pub fn with_http_client(
        provider: Arc<dyn OAuthProvider>,
        config: OAuthConfig,
        http: Client,
    ) -> Self {
        Self {
            provider,
            config,
            http,
        }
    }

    pub fn provider(&self) -> &dyn OAuthProvider {
        self.provider.as_ref()
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Builds the fully-encoded authorization URL carrying `state`.
    ///
    /// The state must come from the state registry; this method performs no
    /// registration of its own.
    pub fn authorization_url(&self, state: &str) -> Result<AuthorizationRequest, AuthError> {
        if self.config.client_id.is_empty() {
            return Err(AuthError::Config("client_id is not configured".to_string()));
        }

        let scope = self
            .config
            .scope
            .as_deref()
            .unwrap_or(self.provider.default_scope());

        let mut url = Url::parse(self.provider.authorize_url())?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.provider.authorize_params() {
                pairs.append_pair(&key, &value);
            }
            pairs.append_pair("response_type", "code");
            pairs.append_pair("client_id", &self.config.client_id);
            pairs.append_pair("redirect_uri", &self.config.redirect_uri);
            pairs.append_pair("scope", scope);
            pairs.append_pair("state", state);
        }

        Ok(AuthorizationRequest {
            authorization_url: url.to_string(),
            state: state.to_string(),
            scope: scope.to_string(),
        })
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Sends the same redirect_uri that went into the authorization URL;
    /// providers reject the exchange on any mismatch. Never retried: codes
    /// are single-use.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AuthError> {
        let mut payload = HashMap::new();
        payload.insert("grant_type", "authorization_code");
        payload.insert("code", code);
        payload.insert("redirect_uri", self.config.redirect_uri.as_str());
        payload.insert("client_id", self.config.client_id.as_str());
        payload.insert("client_secret", self.config.client_secret.as_str());

        let response = self
            .http
            .post(self.provider.token_url())
            .form(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::Exchange {
                status: status.as_u16(),
                body,
            });
        }

        let token = serde_json::from_str(&body).map_err(|err| AuthError::InvalidResponse {
            message: err.to_string(),
            body,
        })?;

        Ok(token)
    }

    /// Fetches the user-info document with a bearer token and normalizes it.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<Profile, AuthError> {
        let response = self
            .http
            .get(self.provider.userinfo_url())
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::ProfileFetch {
                status: status.as_u16(),
                body,
            });
        }

        let raw = serde_json::from_str(&body).map_err(|err| AuthError::InvalidResponse {
            message: err.to_string(),
            body,
        })?;

        Ok(self.provider.normalize_profile(&raw))
    }
}

use std::env;
use std::time::Duration;

use crate::AuthError;
use crate::client::OAuthConfig;

const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/auth/linkedin/callback";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Process configuration, read from the environment (a `.env` file is loaded
/// by the binary before this runs).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: Option<String>,
    pub skill_scraper_url: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the environment.
    ///
    /// `LINKEDIN_CLIENT_ID` and `LINKEDIN_CLIENT_SECRET` are required; the
    /// redirect URI defaults to the locally-served callback path and must
    /// exactly match what is registered with the provider.
    pub fn from_env() -> Result<Self, AuthError> {
        Ok(Self {
            client_id: required("LINKEDIN_CLIENT_ID")?,
            client_secret: required("LINKEDIN_CLIENT_SECRET")?,
            redirect_uri: env::var("OAUTH_REDIRECT_URI")
                .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string()),
            scope: env::var("OAUTH_SCOPE").ok(),
            skill_scraper_url: env::var("SKILL_SCRAPER_URL").ok(),
        })
    }

    pub fn oauth_config(&self) -> OAuthConfig {
        let mut config = OAuthConfig::new(
            self.client_id.clone(),
            self.client_secret.clone(),
            self.redirect_uri.clone(),
        )
        .with_timeout(DEFAULT_HTTP_TIMEOUT);
        if let Some(scope) = &self.scope {
            config = config.with_scope(scope.clone());
        }
        config
    }
}

fn required(name: &str) -> Result<String, AuthError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AuthError::Config(format!("{name} is not set"))),
    }
}

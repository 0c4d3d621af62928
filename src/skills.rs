use async_trait::async_trait;
use reqwest::Client;

use crate::AuthError;
use crate::types::Skill;

/// Results are capped at the top N entries regardless of source.
pub const MAX_SKILLS: usize = 10;

/// Collaborator that extracts skill listings from a public profile page.
///
/// Scraping needs a headless browser and lives outside this process; the
/// backend only consumes the capability through this trait.
#[async_trait]
pub trait SkillSource: Send + Sync {
    async fn fetch_skills(&self, profile_url: &str) -> Result<Vec<Skill>, AuthError>;
}

/// Talks to an external scraper service over HTTP.
///
/// The service takes the profile URL as a query parameter and responds with
/// a JSON array of `{"skill": ..., "experience": ...}` objects.
pub struct HttpSkillSource {
    endpoint: String,
    http: Client,
}

impl HttpSkillSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn with_http_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }
}

#[async_trait]
impl SkillSource for HttpSkillSource {
    async fn fetch_skills(&self, profile_url: &str) -> Result<Vec<Skill>, AuthError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("profile_url", profile_url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::SkillSource(format!(
                "scraper returned status {status}: {body}",
                status = status.as_u16()
            )));
        }

        let skills = response
            .json::<Vec<Skill>>()
            .await
            .map_err(|err| AuthError::SkillSource(err.to_string()))?;

        Ok(skills)
    }
}

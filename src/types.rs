use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Authorization URL plus the values minted while building it.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub authorization_url: String,
    pub state: String,
    pub scope: String,
}

/// Body returned by the provider's token endpoint.
///
/// `refresh_token_expires_in` is nonstandard but returned by LinkedIn for
/// programs with refresh tokens enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_in: Option<u64>,
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Normalized user profile. Every field is optional: providers omit claims
/// the granted scope does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

/// A successful grant, keyed by its access token in the token store.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub refresh_token_expires_in: Option<u64>,
    pub scope: Option<String>,
    pub profile: Option<Profile>,
}

impl TokenRecord {
    pub fn from_response(token: &TokenResponse, profile: Option<Profile>) -> Self {
        Self {
            access_token: token.access_token.clone(),
            expires_in: token.expires_in,
            refresh_token: token.refresh_token.clone(),
            refresh_token_expires_in: token.refresh_token_expires_in,
            scope: token.scope.clone(),
            profile,
        }
    }
}

/// One scraped skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub skill: String,
    pub experience: String,
}

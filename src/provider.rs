use serde_json::Value;

use crate::types::Profile;

/// An OAuth 2.0 identity provider the backend can log in against.
///
/// Endpoint methods return `&str` rather than `&'static str` so tests can
/// point a provider at a stub server.
pub trait OAuthProvider: Send + Sync {
    fn id(&self) -> &str;
    fn authorize_url(&self) -> &str;
    fn token_url(&self) -> &str;
    fn userinfo_url(&self) -> &str;
    fn default_scope(&self) -> &str;

    /// Extra query parameters for the authorization redirect.
    fn authorize_params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Maps the raw user-info body to the normalized profile shape.
    ///
    /// The default covers OpenID Connect claims, which LinkedIn's
    /// `/v2/userinfo` endpoint follows.
    fn normalize_profile(&self, raw: &Value) -> Profile {
        Profile {
            first_name: string_claim(raw, "given_name"),
            last_name: string_claim(raw, "family_name"),
            email: string_claim(raw, "email"),
            picture: string_claim(raw, "picture"),
        }
    }
}

fn string_claim(raw: &Value, name: &str) -> Option<String> {
    raw.get(name).and_then(Value::as_str).map(str::to_string)
}

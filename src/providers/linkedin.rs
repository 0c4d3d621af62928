use crate::OAuthProvider;

const AUTHORIZE_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const USERINFO_URL: &str = "https://api.linkedin.com/v2/userinfo";

const DEFAULT_SCOPE: &str = "openid profile email";

#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedInProvider;

impl OAuthProvider for LinkedInProvider {
    fn id(&self) -> &str {
        "linkedin"
    }

    fn authorize_url(&self) -> &str {
        AUTHORIZE_URL
    }

    fn token_url(&self) -> &str {
        TOKEN_URL
    }

    fn userinfo_url(&self) -> &str {
        USERINFO_URL
    }

    fn default_scope(&self) -> &str {
        DEFAULT_SCOPE
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("os rng error: {message}")]
    OsRng { message: String },

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("missing configuration: {0}")]
    Config(String),

    #[error("provider rejected authorization: {error}")]
    ProviderRejected {
        error: String,
        description: Option<String>,
    },

    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),

    // Covers unknown, already-consumed, and expired states alike. The
    // message must not reveal which case occurred.
    #[error("invalid or expired state")]
    InvalidState,

    #[error("token exchange failed with status {status}: {body}")]
    Exchange { status: u16, body: String },

    #[error("profile fetch failed with status {status}: {body}")]
    ProfileFetch { status: u16, body: String },

    #[error("invalid response from token endpoint: {message}")]
    InvalidResponse { message: String, body: String },

    #[error("skill source error: {0}")]
    SkillSource(String),

    #[error("missing or invalid bearer token")]
    Unauthorized,
}

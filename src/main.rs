use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skill_connect::{
    AppConfig, AppState, AuthError, HttpSkillSource, LinkedInProvider, MemoryStateStore,
    MemoryTokenStore, OAuthClient, SkillSource, serve,
};

#[derive(Debug, Parser)]
#[command(
    name = "skill-connect",
    about = "OAuth login backend with profile and skill endpoints."
)]
struct Cli {
    #[arg(long, default_value = "127.0.0.1", env = "HOST")]
    host: String,

    #[arg(long, default_value_t = 8000, env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), AuthError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("skill_connect=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let client = OAuthClient::new(Arc::new(LinkedInProvider), config.oauth_config())?;
    let skills = config
        .skill_scraper_url
        .as_deref()
        .map(|endpoint| Arc::new(HttpSkillSource::new(endpoint)) as Arc<dyn SkillSource>);

    let state = AppState {
        client,
        states: Arc::new(MemoryStateStore::new()),
        tokens: Arc::new(MemoryTokenStore::new()),
        skills,
    };

    let listener = TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "listening");
    serve(listener, state).await
}

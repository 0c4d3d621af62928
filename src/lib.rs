//! OAuth 2.0 authorization-code login backend.
//!
//! Performs the code flow against LinkedIn (or any [`OAuthProvider`]) with
//! single-use CSRF states, keeps issued tokens in a process-lifetime store,
//! and exposes normalized profile and skill-scraping endpoints over axum.

mod client;
mod config;
mod error;
mod handlers;
mod provider;
mod providers;
mod registry;
mod server;
mod skills;
mod store;
mod types;

pub use client::{OAuthClient, OAuthConfig};
pub use config::AppConfig;
pub use error::AuthError;
pub use provider::OAuthProvider;
pub use providers::LinkedInProvider;
pub use registry::{DEFAULT_STATE_TTL, MemoryStateStore, StateStore};
pub use server::{AppState, router, serve};
pub use skills::{HttpSkillSource, MAX_SKILLS, SkillSource};
pub use store::{MemoryTokenStore, TokenStore};
pub use types::{AuthorizationRequest, Profile, Skill, TokenRecord, TokenResponse};

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{TryRngCore, rngs::OsRng};

use crate::AuthError;

const STATE_BYTES: usize = 16;

/// Unconsumed states older than this are rejected and evicted.
pub const DEFAULT_STATE_TTL: Duration = Duration::from_secs(600);

/// Tracks CSRF state tokens issued for authorization redirects.
///
/// A state is valid for exactly one `consume` call. Implementations must make
/// `issue` and `consume` atomic with respect to each other so that two
/// concurrent callbacks can never both consume the same state.
pub trait StateStore: Send + Sync {
    /// Generates a fresh opaque state token and records it as active.
    fn issue(&self) -> Result<String, AuthError>;

    /// Deactivates `state` and returns `true` iff it was active and within
    /// its TTL. Unknown, consumed, and expired states all return `false`.
    fn consume(&self, state: &str) -> bool;
}

/// In-process state registry guarded by a mutex.
#[derive(Debug)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<String, Instant>>,
    ttl: Duration,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_STATE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }
}

impl Default for MemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStateStore {
    fn issue(&self) -> Result<String, AuthError> {
        let state = mint_state()?;
        let now = Instant::now();
        let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        entries.retain(|_, issued| now.duration_since(*issued) < self.ttl);
        entries.insert(state.clone(), now);
        Ok(state)
    }

    fn consume(&self, state: &str) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        match entries.remove(state) {
            Some(issued) => issued.elapsed() < self.ttl,
            None => false,
        }
    }
}

/// Generates an unguessable 128-bit state token rendered as url-safe base64.
fn mint_state() -> Result<String, AuthError> {
    let mut bytes = [0u8; STATE_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| AuthError::OsRng {
            message: err.to_string(),
        })?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

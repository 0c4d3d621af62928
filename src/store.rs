use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::TokenRecord;

/// Holds issued access tokens for the lifetime of the process.
///
/// Records are keyed by the access token value. Nothing here expires or
/// refreshes tokens; a record stays until the process exits or it is
/// overwritten by a newer grant with the same token value.
pub trait TokenStore: Send + Sync {
    fn put(&self, record: TokenRecord);
    fn get(&self, access_token: &str) -> Option<TokenRecord>;
}

/// In-process token store guarded by a mutex.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    records: Mutex<HashMap<String, TokenRecord>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn put(&self, record: TokenRecord) {
        let mut records = self.records.lock().unwrap_or_else(|err| err.into_inner());
        records.insert(record.access_token.clone(), record);
    }

    fn get(&self, access_token: &str) -> Option<TokenRecord> {
        let records = self.records.lock().unwrap_or_else(|err| err.into_inner());
        records.get(access_token).cloned()
    }
}

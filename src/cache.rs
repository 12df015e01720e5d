//! Per-wallet snapshot cache
//!
//! Keeps the last fetched snapshot keyed by account. Asking for the same
//! account again returns it without touching the source; a different account
//! replaces it.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::client::{fetch_snapshot, RewardsSource};
use crate::error::Error;
use crate::types::WalletSnapshot;

struct CachedSnapshot {
    account: String,
    snapshot: Arc<WalletSnapshot>,
}

/// Snapshot cache in front of a [`RewardsSource`]
pub struct WalletCache<S> {
    source: S,
    entry: Mutex<Option<CachedSnapshot>>,
}

impl<S: RewardsSource> WalletCache<S> {
    /// Create an empty cache over `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            entry: Mutex::new(None),
        }
    }

    /// Get the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot for `account`, fetched only when the account changed.
    ///
    /// Accounts that do not resolve are not cached and return `Ok(None)`.
    pub async fn get(&self, account: &str) -> Result<Option<Arc<WalletSnapshot>>, Error> {
        let key = normalize_account(account);
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.account == key {
                debug!(account = %key, "Snapshot cache hit");
                return Ok(Some(Arc::clone(&cached.snapshot)));
            }
        }

        debug!(account = %key, "Snapshot cache miss");
        let snapshot = match fetch_snapshot(&self.source, &key).await? {
            Some(snapshot) => Arc::new(snapshot),
            None => return Ok(None),
        };

        *entry = Some(CachedSnapshot {
            account: key,
            snapshot: Arc::clone(&snapshot),
        });
        Ok(Some(snapshot))
    }

    /// Drop the cached snapshot so the next `get` refetches
    pub async fn invalidate(&self) {
        *self.entry.lock().await = None;
    }

    /// Account of the cached snapshot, if any
    pub async fn cached_account(&self) -> Option<String> {
        self.entry
            .lock()
            .await
            .as_ref()
            .map(|cached| cached.account.clone())
    }
}

/// Addresses and domains are case-insensitive
fn normalize_account(account: &str) -> String {
    account.trim().to_lowercase()
}

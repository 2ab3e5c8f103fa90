// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ledger persistence.
//!
//! The whole ledger is written as one value under a fixed key on every
//! save. Loading never fails: a missing or unreadable value is the same as
//! an empty ledger.

use crate::db::store::KeyValueStore;
use crate::error::Result;
use crate::services::Ledger;

/// Persistence adapter for a [`Ledger`] over any key-value store.
#[derive(Debug, Clone)]
pub struct LedgerStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Serialize the full ledger and overwrite the stored value.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let payload = ledger.to_json()?;
        self.store.set(&self.key, &payload)?;
        tracing::debug!(
            key = %self.key,
            count = ledger.len(),
            bytes = payload.len(),
            "Ledger saved"
        );
        Ok(())
    }

    /// Read the stored ledger, falling back to an empty one.
    pub fn load(&self) -> Ledger {
        let payload = match self.store.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored ledger, starting empty");
                return Ledger::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read stored ledger");
                return Ledger::new();
            }
        };

        match Ledger::from_json(&payload) {
            Ok(ledger) => {
                tracing::debug!(key = %self.key, count = ledger.len(), "Ledger loaded");
                ledger
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Stored ledger is corrupt, ignoring");
                Ledger::new()
            }
        }
    }

    /// The stored payload exactly as persisted.
    pub fn raw(&self) -> Result<Option<String>> {
        self.store.get(&self.key)
    }

    /// Delete the stored ledger.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)?;
        tracing::info!(key = %self.key, "Stored ledger cleared");
        Ok(())
    }
}

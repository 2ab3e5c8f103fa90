// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::services::validation::ValidationError;

/// Ledger error type shared by the services and storage layers.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Duplicate workout id: {0}")]
    DuplicateId(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LedgerError {
    /// Message to show the user, if this error is meant to be shown at all.
    ///
    /// Only validation failures are reported; everything else is logged.
    pub fn user_message(&self) -> Option<String> {
        match self {
            LedgerError::Validation(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

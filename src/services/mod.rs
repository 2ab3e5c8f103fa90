// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod controller;
pub mod edit_session;
pub mod ledger;
pub mod validation;

pub use controller::{LedgerController, SubmitOutcome};
pub use edit_session::{EditSession, EditTarget};
pub use ledger::Ledger;
pub use validation::{are_finite, are_positive, validate, ValidationError};

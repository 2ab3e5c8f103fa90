// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Ledger: record running and cycling sessions on a map
//!
//! This crate provides the domain model and state machine behind a
//! workout log: validated workout records with derived pace/speed, an
//! ordered ledger with edit/delete/sort, persistence of the whole ledger
//! under a single key, and a controller that drives a map view and an
//! input form through narrow traits.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod views;

pub use error::{LedgerError, Result};

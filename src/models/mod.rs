// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod form;
pub mod workout;

pub use form::{parse_numeric, RawWorkoutInput};
pub use workout::{Coords, Measurements, UnknownWorkoutType, Workout, WorkoutKind, WorkoutType};

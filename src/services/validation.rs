// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form input validation.
//!
//! Running needs distance, duration and cadence to be finite and positive.
//! Cycling needs distance, duration and elevation to be finite, but only
//! distance and duration have to be positive: a flat or downhill ride with
//! zero or negative elevation gain is accepted.

use crate::models::{parse_numeric, Measurements, RawWorkoutInput, WorkoutType};

/// Message shown to the user when numeric input is rejected.
pub const INVALID_NUMBERS_MESSAGE: &str = "Inputs have to be positive numbers";

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Inputs have to be positive numbers")]
    InvalidNumbers { workout_type: WorkoutType },

    #[error("Unknown workout type: {0:?}")]
    UnknownType(String),
}

/// True iff every value is a finite number.
pub fn are_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero.
pub fn are_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Parse and check raw form fields, producing measurements for a new workout.
pub fn validate(input: &RawWorkoutInput) -> Result<Measurements, ValidationError> {
    let workout_type = input
        .parsed_type()
        .ok_or_else(|| ValidationError::UnknownType(input.workout_type.clone()))?;

    let distance = parse_numeric(&input.distance);
    let duration = parse_numeric(&input.duration);

    match workout_type {
        WorkoutType::Running => {
            let cadence = parse_numeric(&input.cadence);
            let values = [distance, duration, cadence];
            if !are_finite(&values) || !are_positive(&values) {
                return Err(ValidationError::InvalidNumbers { workout_type });
            }
            Ok(Measurements::Running {
                distance,
                duration,
                cadence,
            })
        }
        WorkoutType::Cycling => {
            let elevation_gain = parse_numeric(&input.elevation);
            if !are_finite(&[distance, duration, elevation_gain])
                || !are_positive(&[distance, duration])
            {
                return Err(ValidationError::InvalidNumbers { workout_type });
            }
            Ok(Measurements::Cycling {
                distance,
                duration,
                elevation_gain,
            })
        }
    }
}

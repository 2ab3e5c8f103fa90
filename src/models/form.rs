// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw form input as supplied by the input surface.

use serde::{Deserialize, Serialize};

use crate::models::{Workout, WorkoutType};

/// Unparsed field values from the workout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWorkoutInput {
    /// "running" or "cycling"
    pub workout_type: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl RawWorkoutInput {
    /// Field values that reproduce an existing workout, used when editing.
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            workout_type: workout.workout_type().as_str().to_string(),
            distance: workout.distance().to_string(),
            duration: workout.duration().to_string(),
            cadence: workout.cadence().map(|c| c.to_string()).unwrap_or_default(),
            elevation: workout
                .elevation_gain()
                .map(|e| e.to_string())
                .unwrap_or_default(),
        }
    }

    /// Set the field named `field` ("type", "distance", "duration", "cadence", "elevation").
    ///
    /// Returns `false` for an unknown field name.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "type" => &mut self.workout_type,
            "distance" => &mut self.distance,
            "duration" => &mut self.duration,
            "cadence" => &mut self.cadence,
            "elevation" => &mut self.elevation,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    pub fn parsed_type(&self) -> Option<WorkoutType> {
        self.workout_type.parse().ok()
    }
}

/// Numeric coercion for form fields.
///
/// Surrounding whitespace is ignored, an empty field reads as zero and
/// anything unparsable reads as NaN, so it fails the finiteness check later.
pub fn parse_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text render instruction for one workout in the list.

use serde::Serialize;
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Workout, WorkoutKind, WorkoutType};

/// One value/unit pair shown on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CardDetail {
    pub value: String,
    pub unit: String,
}

impl CardDetail {
    fn new(value: impl fmt::Display, unit: &str) -> Self {
        Self {
            value: value.to_string(),
            unit: unit.to_string(),
        }
    }
}

/// A list entry describing one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutCard {
    pub id: String,
    pub workout_type: WorkoutType,
    pub title: String,
    pub details: Vec<CardDetail>,
}

impl WorkoutCard {
    pub fn from_workout(workout: &Workout) -> Self {
        let mut details = vec![
            CardDetail::new(workout.distance(), "km"),
            CardDetail::new(workout.duration(), "min"),
        ];

        match *workout.kind() {
            WorkoutKind::Running { cadence, pace } => {
                details.push(CardDetail::new(format!("{pace:.1}"), "min/km"));
                details.push(CardDetail::new(cadence, "spm"));
            }
            WorkoutKind::Cycling {
                elevation_gain,
                speed,
            } => {
                details.push(CardDetail::new(format!("{speed:.1}"), "km/h"));
                details.push(CardDetail::new(elevation_gain, "m"));
            }
        }

        Self {
            id: workout.id().to_string(),
            workout_type: workout.workout_type(),
            title: workout.description().to_string(),
            details,
        }
    }
}

impl fmt::Display for WorkoutCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.title)?;
        for detail in &self.details {
            write!(f, " | {} {}", detail.value, detail.unit)?;
        }
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map view collaborator.

use serde::Serialize;

use crate::models::{Coords, Workout, WorkoutType};

/// Popup content for a workout marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLabel {
    /// Lets the map style running and cycling popups differently
    pub workout_type: WorkoutType,
    pub text: String,
}

impl MarkerLabel {
    pub fn for_workout(workout: &Workout) -> Self {
        Self {
            workout_type: workout.workout_type(),
            text: workout.description().to_string(),
        }
    }
}

/// Places pins and moves the viewport.
pub trait MapView {
    /// Handle returned for a placed marker, used later to remove it.
    type Marker;

    fn place_marker(&mut self, coords: Coords, label: &MarkerLabel) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn center_on(&mut self, coords: Coords, zoom: u8);
}

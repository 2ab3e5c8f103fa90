// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Edit session state machine.
//!
//! `Idle` is both the initial and the terminal state. Beginning an edit
//! while another is active drops the active one first: the form is shared,
//! so the most recent request wins.

use crate::models::{Coords, Workout, WorkoutType};

/// What the edit session remembers about the workout being replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub id: String,
    pub workout_type: WorkoutType,
    /// Coordinates reused by the replacement; they are not editable.
    pub coords: Coords,
}

impl EditTarget {
    fn from_workout(workout: &Workout) -> Self {
        Self {
            id: workout.id().to_string(),
            workout_type: workout.workout_type(),
            coords: workout.coords(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(EditTarget),
}

impl EditSession {
    pub fn is_active(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            EditSession::Editing(target) => Some(target),
            EditSession::Idle => None,
        }
    }

    /// Start editing `workout`, returning the target that was dropped, if any.
    pub fn begin(&mut self, workout: &Workout) -> Option<EditTarget> {
        let dropped = self.take();
        if let Some(prev) = &dropped {
            tracing::debug!(
                previous = %prev.id,
                next = workout.id(),
                "Edit superseded by a new edit"
            );
        }
        *self = EditSession::Editing(EditTarget::from_workout(workout));
        dropped
    }

    /// Return to `Idle` after a successful submit.
    pub fn finish(&mut self) -> Option<EditTarget> {
        self.take()
    }

    /// Return to `Idle` without replacing anything.
    pub fn cancel(&mut self) -> Option<EditTarget> {
        let dropped = self.take();
        if let Some(target) = &dropped {
            tracing::debug!(workout_id = %target.id, "Edit cancelled");
        }
        dropped
    }

    fn take(&mut self) -> Option<EditTarget> {
        match std::mem::take(self) {
            EditSession::Editing(target) => Some(target),
            EditSession::Idle => None,
        }
    }
}

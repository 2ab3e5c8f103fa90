// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form/input surface collaborator.

use crate::models::{RawWorkoutInput, WorkoutType};
use crate::views::WorkoutCard;

/// The workout form and the list of workout cards next to it.
pub trait FormSurface {
    /// Current raw field values.
    fn read_input(&self) -> RawWorkoutInput;

    /// Reveal the form for a new entry or an edit.
    fn show(&mut self);

    /// Fill the fields, used when an edit begins.
    fn populate(&mut self, input: &RawWorkoutInput);

    /// Empty all fields and hide the form.
    fn hide_and_clear(&mut self);

    /// Show the field belonging to `workout_type` (cadence or elevation) and hide the other.
    fn show_type_fields(&mut self, workout_type: WorkoutType);

    /// Blocking message to the user.
    fn alert(&mut self, message: &str);

    fn render_card(&mut self, card: &WorkoutCard);
    fn remove_card(&mut self, id: &str);
    fn clear_cards(&mut self);
}

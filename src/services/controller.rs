// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ledger controller.
//!
//! Handles the event flow between the form, the map and the ledger:
//! 1. Read raw form fields and validate them
//! 2. Create a workout, or replace the one being edited
//! 3. Persist the whole ledger
//! 4. Place/remove map markers and render workout cards
//!
//! The controller keeps a marker list parallel to the ledger. It is kept
//! aligned by position on create, edit and delete. Sorting reloads the
//! ledger from storage and leaves the markers where they were, so after a
//! sort the two lists no longer line up.

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::db::{KeyValueStore, LedgerStore};
use crate::error::Result;
use crate::models::{Coords, RawWorkoutInput, Workout, WorkoutType};
use crate::services::validation;
use crate::services::{EditSession, Ledger};
use crate::time_utils::timestamp_id;
use crate::views::{FormSurface, MapView, MarkerLabel, WorkoutCard};

/// Result of a submit that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new workout was appended.
    Created { id: String },
    /// The edited workout was removed and its replacement appended.
    Replaced { old_id: String, new_id: String },
    /// The workout being edited no longer exists; nothing was created.
    TargetMissing { id: String },
}

/// Owns the ledger, the edit session and the marker list.
pub struct LedgerController<M: MapView, F: FormSurface, S: KeyValueStore> {
    config: Config,
    map: M,
    form: F,
    store: LedgerStore<S>,
    ledger: Ledger,
    session: EditSession,
    markers: Vec<M::Marker>,
    /// Last clicked map location, used for the next new workout
    pending_coords: Option<Coords>,
    map_ready: bool,
}

impl<M: MapView, F: FormSurface, S: KeyValueStore> LedgerController<M, F, S> {
    pub fn new(config: Config, map: M, form: F, store: LedgerStore<S>) -> Self {
        Self {
            config,
            map,
            form,
            store,
            ledger: Ledger::new(),
            session: EditSession::default(),
            markers: Vec::new(),
            pending_coords: None,
            map_ready: false,
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────

    /// Hydrate the ledger from storage and render the workout list.
    pub fn init(&mut self) {
        self.ledger = self.store.load();
        self.render_all_cards();
        tracing::info!(count = self.ledger.len(), "Ledger initialized");
    }

    /// Called once the position is known (or acquisition failed).
    ///
    /// Centers the map and places a marker for every workout loaded so far.
    pub fn on_position(&mut self, position: Option<Coords>) {
        let coords = position.unwrap_or_else(|| {
            tracing::warn!("Position unavailable, using configured default");
            self.config.default_coords()
        });
        self.map.center_on(coords, self.config.map_zoom_level);

        if self.map_ready {
            return;
        }
        self.map_ready = true;

        for workout in self.ledger.iter() {
            let marker = self
                .map
                .place_marker(workout.coords(), &MarkerLabel::for_workout(workout));
            self.markers.push(marker);
        }
        tracing::debug!(markers = self.markers.len(), "Map ready");
    }

    /// Clear stored data and start over with an empty ledger.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;

        for marker in self.markers.drain(..) {
            self.map.remove_marker(marker);
        }
        self.form.hide_and_clear();
        self.ledger.clear();
        self.session = EditSession::Idle;
        self.pending_coords = None;

        self.init();
        tracing::info!("Ledger reset");
        Ok(())
    }

    // ─── Form Events ─────────────────────────────────────────────

    /// A click on the map picks the location for a new workout.
    ///
    /// Any edit in progress is dropped; the form now belongs to the new entry.
    pub fn on_map_click(&mut self, coords: Coords) {
        self.session.cancel();
        self.pending_coords = Some(coords);
        self.form.show();
    }

    pub fn on_type_changed(&mut self, workout_type: WorkoutType) {
        self.form.show_type_fields(workout_type);
    }

    /// Validate the form and create or replace a workout.
    ///
    /// Invalid input is reported through the form and returned as an error;
    /// nothing else changes in that case.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let input = self.form.read_input();
        let measurements = match validation::validate(&input) {
            Ok(m) => m,
            Err(e) => {
                tracing::info!(error = %e, workout_type = %input.workout_type, "Rejected workout input");
                self.form.alert(&e.to_string());
                return Err(e.into());
            }
        };

        let coords = match self.session.target() {
            Some(target) => target.coords,
            None => self
                .pending_coords
                .unwrap_or_else(|| self.config.default_coords()),
        };

        let now = Utc::now();
        let workout = Workout::new(self.next_id(now), now, coords, measurements);
        let new_id = workout.id().to_string();
        let card = WorkoutCard::from_workout(&workout);
        let label = MarkerLabel::for_workout(&workout);

        let outcome = match self.session.finish() {
            Some(target) => match self.ledger.replace(&target.id, workout)? {
                Some((index, _previous)) => {
                    self.remove_marker_at(index);
                    self.form.remove_card(&target.id);
                    tracing::info!(old_id = %target.id, new_id = %new_id, "Workout replaced");
                    SubmitOutcome::Replaced {
                        old_id: target.id,
                        new_id,
                    }
                }
                None => {
                    tracing::debug!(workout_id = %target.id, "Edited workout is gone, ignoring submit");
                    self.form.hide_and_clear();
                    return Ok(SubmitOutcome::TargetMissing { id: target.id });
                }
            },
            None => {
                self.ledger.add(workout)?;
                tracing::info!(workout_id = %new_id, "Workout created");
                SubmitOutcome::Created { id: new_id }
            }
        };

        if self.map_ready {
            let marker = self.map.place_marker(coords, &label);
            self.markers.push(marker);
        }
        self.form.render_card(&card);
        self.form.hide_and_clear();
        self.persist();

        Ok(outcome)
    }

    // ─── List Events ─────────────────────────────────────────────

    /// Load a workout into the form for editing. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(workout) = self.ledger.find_by_id(id) else {
            tracing::debug!(workout_id = id, "Edit requested for unknown workout");
            return false;
        };

        let workout_type = workout.workout_type();
        let fields = RawWorkoutInput::from_workout(workout);
        self.session.begin(workout);

        self.form.show();
        self.form.show_type_fields(workout_type);
        self.form.populate(&fields);
        tracing::debug!(workout_id = id, "Edit started");
        true
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
        self.form.hide_and_clear();
    }

    /// Delete a workout and its marker. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some((index, _removed)) = self.ledger.remove_by_id(id) else {
            tracing::debug!(workout_id = id, "Delete requested for unknown workout");
            return false;
        };

        self.remove_marker_at(index);
        self.form.remove_card(id);
        self.persist();
        tracing::info!(workout_id = id, "Workout deleted");
        true
    }

    /// Center the map on a workout and count the interaction.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(workout) = self.ledger.find_by_id_mut(id) else {
            return false;
        };
        workout.record_interaction();
        let coords = workout.coords();
        self.map.center_on(coords, self.config.map_zoom_level);
        true
    }

    /// Sort by distance, persist, then rebuild the list from storage.
    ///
    /// If the save fails the sorted in-memory ledger is kept and the list is
    /// rebuilt from it instead. Markers are not touched.
    pub fn sort(&mut self) {
        self.ledger.sort_by_distance_ascending();
        if self.persist() {
            self.ledger = self.store.load();
        }
        self.render_all_cards();
        tracing::info!(count = self.ledger.len(), "Ledger sorted by distance");
    }

    // ─── Accessors ───────────────────────────────────────────────

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn markers(&self) -> &[M::Marker] {
        &self.markers
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn store(&self) -> &LedgerStore<S> {
        &self.store
    }

    // ─── Helpers ─────────────────────────────────────────────────

    /// Timestamp-derived id, advanced a millisecond at a time until unused.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut at = now;
        loop {
            let id = timestamp_id(at);
            if !self.ledger.contains(&id) {
                return id;
            }
            at += Duration::milliseconds(1);
        }
    }

    fn remove_marker_at(&mut self, index: usize) {
        if index < self.markers.len() {
            let marker = self.markers.remove(index);
            self.map.remove_marker(marker);
        }
    }

    fn render_all_cards(&mut self) {
        self.form.clear_cards();
        for workout in self.ledger.iter() {
            self.form.render_card(&WorkoutCard::from_workout(workout));
        }
    }

    /// Save the ledger. A failed write is logged; the in-memory ledger stays authoritative.
    fn persist(&self) -> bool {
        match self.store.save(&self.ledger) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, count = self.ledger.len(), "Failed to persist ledger");
                false
            }
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ordered collection of recorded workouts.
//!
//! Entries keep insertion order until [`Ledger::sort_by_distance_ascending`]
//! is called. Ids are unique within a ledger; every operation that inserts
//! checks this, including deserialization.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{LedgerError, Result};
use crate::models::Workout;

/// The ordered sequence of workouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Workout>", into = "Vec<Workout>")]
pub struct Ledger {
    workouts: Vec<Workout>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from an ordered list, rejecting duplicate ids.
    pub fn from_workouts(workouts: Vec<Workout>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(workouts.len());
        for workout in &workouts {
            if !seen.insert(workout.id()) {
                return Err(LedgerError::DuplicateId(workout.id().to_string()));
            }
        }
        Ok(Self { workouts })
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of the first workout with this id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.workouts.iter().position(|w| w.id() == id)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id() == id)
    }

    /// Append a workout at the end.
    pub fn add(&mut self, workout: Workout) -> Result<()> {
        if self.contains(workout.id()) {
            return Err(LedgerError::DuplicateId(workout.id().to_string()));
        }
        self.workouts.push(workout);
        Ok(())
    }

    /// Remove the workout with this id, returning its former index.
    ///
    /// A missing id is not an error: nothing changes and `None` is returned.
    pub fn remove_by_id(&mut self, id: &str) -> Option<(usize, Workout)> {
        let index = self.position(id)?;
        Some((index, self.workouts.remove(index)))
    }

    /// Remove `old_id` from its position and append `workout` at the end.
    ///
    /// The replacement does not take over the old position. If `old_id` is
    /// not present, nothing changes and `Ok(None)` is returned.
    pub fn replace(&mut self, old_id: &str, workout: Workout) -> Result<Option<(usize, Workout)>> {
        let Some(index) = self.position(old_id) else {
            return Ok(None);
        };
        if workout.id() != old_id && self.contains(workout.id()) {
            return Err(LedgerError::DuplicateId(workout.id().to_string()));
        }

        let previous = self.workouts.remove(index);
        self.workouts.push(workout);
        Ok(Some((index, previous)))
    }

    /// Stable sort by distance, shortest first.
    pub fn sort_by_distance_ascending(&mut self) {
        self.workouts
            .sort_by(|a, b| a.distance().total_cmp(&b.distance()));
    }

    /// Remove every workout.
    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    /// Serialize to the persisted JSON layout.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the persisted JSON layout.
    pub fn from_json(payload: &str) -> Result<Self> {
        let workouts: Vec<Workout> = serde_json::from_str(payload)?;
        Self::from_workouts(workouts)
    }
}

impl TryFrom<Vec<Workout>> for Ledger {
    type Error = LedgerError;

    fn try_from(workouts: Vec<Workout>) -> Result<Self> {
        Self::from_workouts(workouts)
    }
}

impl From<Ledger> for Vec<Workout> {
    fn from(ledger: Ledger) -> Self {
        ledger.workouts
    }
}

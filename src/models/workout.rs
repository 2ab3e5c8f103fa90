// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout records: the two activity kinds and their derived metrics.
//!
//! A [`Workout`] is built once from validated [`Measurements`] and never
//! changes afterwards, apart from its interaction counter. The derived
//! metric (pace or speed) and the description are computed at construction
//! and stored alongside the raw values, so a persisted record can be read
//! back as plain data without running the constructors again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::format_month_day;

/// Activity kind, stored as the `type` tag of a persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Tag used in storage and form values ("running" / "cycling").
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = UnknownWorkoutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            other => Err(UnknownWorkoutType(other.to_string())),
        }
    }
}

/// Returned when a form supplies a type tag other than running/cycling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown workout type: {0:?}")]
pub struct UnknownWorkoutType(pub String);

/// Latitude/longitude pair, persisted as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        [coords.lat, coords.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Validated form values for one workout, before an id and timestamp are assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurements {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}

impl Measurements {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Measurements::Running { .. } => WorkoutType::Running,
            Measurements::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// Variant-specific fields, flattened into the record next to the `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutKind {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per kilometer
        pace: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cycling {
        /// Meters climbed
        elevation_gain: f64,
        /// Kilometers per hour
        speed: f64,
    },
}

/// A recorded workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    coords: Coords,
    /// Kilometers
    distance: f64,
    /// Minutes
    duration: f64,
    description: String,
    #[serde(rename = "clicks", default)]
    interaction_count: u32,
    #[serde(flatten)]
    kind: WorkoutKind,
}

impl Workout {
    /// Build a workout from validated measurements.
    ///
    /// The caller assigns the id and creation time; the derived metric and
    /// description are computed here and never recomputed.
    pub fn new(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        coords: Coords,
        measurements: Measurements,
    ) -> Self {
        let (distance, duration, kind) = match measurements {
            Measurements::Running {
                distance,
                duration,
                cadence,
            } => (
                distance,
                duration,
                WorkoutKind::Running {
                    cadence,
                    pace: duration / distance,
                },
            ),
            Measurements::Cycling {
                distance,
                duration,
                elevation_gain,
            } => (
                distance,
                duration,
                WorkoutKind::Cycling {
                    elevation_gain,
                    speed: distance / (duration / 60.0),
                },
            ),
        };

        let description = format!(
            "{} on {}",
            measurements.workout_type().label(),
            format_month_day(created_at)
        );

        Self {
            id: id.into(),
            created_at,
            coords,
            distance,
            duration,
            description,
            interaction_count: 0,
            kind,
        }
    }

    pub fn running(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Self {
        Self::new(
            id,
            created_at,
            coords,
            Measurements::Running {
                distance,
                duration,
                cadence,
            },
        )
    }

    pub fn cycling(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Self {
        Self::new(
            id,
            created_at,
            coords,
            Measurements::Cycling {
                distance,
                duration,
                elevation_gain,
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        match self.kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    /// Minutes per kilometer (running only).
    pub fn pace(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { pace, .. } => Some(pace),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    /// Kilometers per hour (cycling only).
    pub fn speed(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed, .. } => Some(speed),
            WorkoutKind::Running { .. } => None,
        }
    }

    pub fn cadence(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { cadence, .. } => Some(cadence),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { elevation_gain, .. } => Some(elevation_gain),
            WorkoutKind::Running { .. } => None,
        }
    }

    /// Count a focus interaction. Nothing else reads or resets the counter.
    pub fn record_interaction(&mut self) {
        self.interaction_count += 1;
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interfaces to the presentation layer.
//!
//! The controller only talks to the map and the form through these traits;
//! rendering, geolocation and styling live on the other side.

pub mod card;
pub mod form;
pub mod map;

pub use card::{CardDetail, WorkoutCard};
pub use form::FormSurface;
pub use map::{MapView, MarkerLabel};

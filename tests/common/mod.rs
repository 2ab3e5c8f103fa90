// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_ledger::config::Config;
use workout_ledger::db::{KeyValueStore, LedgerStore, MemoryStore};
use workout_ledger::models::{Coords, RawWorkoutInput, WorkoutType};
use workout_ledger::services::{LedgerController, SubmitOutcome};
use workout_ledger::views::{FormSurface, MapView, MarkerLabel, WorkoutCard};

pub type TestController = LedgerController<RecordingMap, RecordingForm, MemoryStore>;

/// Map double that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    next_marker: u32,
    /// Markers currently on the map, in placement order
    pub live: Vec<(u32, Coords, MarkerLabel)>,
    pub removed: Vec<u32>,
    pub centered: Vec<(Coords, u8)>,
}

impl RecordingMap {
    #[allow(dead_code)]
    pub fn coords_of(&self, marker: u32) -> Option<Coords> {
        self.live
            .iter()
            .find(|(m, _, _)| *m == marker)
            .map(|(_, coords, _)| *coords)
    }
}

impl MapView for RecordingMap {
    type Marker = u32;

    fn place_marker(&mut self, coords: Coords, label: &MarkerLabel) -> u32 {
        self.next_marker += 1;
        self.live.push((self.next_marker, coords, label.clone()));
        self.next_marker
    }

    fn remove_marker(&mut self, marker: u32) {
        self.live.retain(|(m, _, _)| *m != marker);
        self.removed.push(marker);
    }

    fn center_on(&mut self, coords: Coords, zoom: u8) {
        self.centered.push((coords, zoom));
    }
}

/// Form double with settable fields and a recorded card list.
#[derive(Debug, Default)]
pub struct RecordingForm {
    pub input: RawWorkoutInput,
    pub visible: bool,
    pub shown_type: Option<WorkoutType>,
    pub alerts: Vec<String>,
    pub cards: Vec<WorkoutCard>,
}

impl FormSurface for RecordingForm {
    fn read_input(&self) -> RawWorkoutInput {
        self.input.clone()
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn populate(&mut self, input: &RawWorkoutInput) {
        self.input = input.clone();
    }

    fn hide_and_clear(&mut self) {
        self.visible = false;
        self.input = RawWorkoutInput {
            workout_type: self.input.workout_type.clone(),
            ..Default::default()
        };
    }

    fn show_type_fields(&mut self, workout_type: WorkoutType) {
        self.shown_type = Some(workout_type);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn render_card(&mut self, card: &WorkoutCard) {
        self.cards.push(card.clone());
    }

    fn remove_card(&mut self, id: &str) {
        self.cards.retain(|c| c.id != id);
    }

    fn clear_cards(&mut self) {
        self.cards.clear();
    }
}

/// Controller over `backend`, initialized and with the map ready.
#[allow(dead_code)]
pub fn ready_controller(backend: MemoryStore) -> TestController {
    let config = Config::default();
    let store = LedgerStore::new(backend, config.storage_key.clone());
    let mut controller =
        LedgerController::new(config, RecordingMap::default(), RecordingForm::default(), store);
    controller.init();
    controller.on_position(Some(Coords::new(37.4, -122.1)));
    controller
}

/// Set the form fields; `extra` is cadence for running, elevation for cycling.
#[allow(dead_code)]
pub fn fill_form<S: KeyValueStore>(
    controller: &mut LedgerController<RecordingMap, RecordingForm, S>,
    workout_type: &str,
    fields: [&str; 3],
) {
    let [distance, duration, extra] = fields;
    let form = controller.form_mut();
    form.input = RawWorkoutInput {
        workout_type: workout_type.to_string(),
        distance: distance.to_string(),
        duration: duration.to_string(),
        ..Default::default()
    };
    if workout_type == "running" {
        form.input.cadence = extra.to_string();
    } else {
        form.input.elevation = extra.to_string();
    }
}

/// Click the map at `coords`, fill the form and submit. Returns the new id.
#[allow(dead_code)]
pub fn add_workout(
    controller: &mut TestController,
    coords: Coords,
    workout_type: &str,
    fields: [&str; 3],
) -> String {
    controller.on_map_click(coords);
    fill_form(controller, workout_type, fields);
    match controller.submit().expect("submit should succeed") {
        SubmitOutcome::Created { id } => id,
        other => panic!("expected a new workout, got {:?}", other),
    }
}

/// Ids in ledger order.
#[allow(dead_code)]
pub fn ledger_ids(controller: &TestController) -> Vec<String> {
    controller
        .ledger()
        .iter()
        .map(|w| w.id().to_string())
        .collect()
}

/// Coordinates of each marker, in the controller's marker-list order.
#[allow(dead_code)]
pub fn marker_coords(controller: &TestController) -> Vec<Option<Coords>> {
    controller
        .markers()
        .iter()
        .map(|m| controller.map().coords_of(*m))
        .collect()
}

/// Coordinates of each workout, in ledger order.
#[allow(dead_code)]
pub fn ledger_coords(controller: &TestController) -> Vec<Option<Coords>> {
    controller.ledger().iter().map(|w| Some(w.coords())).collect()
}

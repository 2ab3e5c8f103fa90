// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Ledger terminal front end
//!
//! Drives the ledger controller from line commands on stdin. The map and
//! the form are plain text: markers and cards are printed as they change.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_ledger::{
    config::Config,
    db::{FileStore, LedgerStore},
    models::{Coords, RawWorkoutInput, WorkoutType},
    services::{LedgerController, SubmitOutcome},
    time_utils::format_utc_rfc3339,
    views::{FormSurface, MapView, MarkerLabel, WorkoutCard},
};

const HELP: &str = "\
commands:
  click <lat> <lng>        pick a location and open the form
  type <running|cycling>   switch the workout type
  set <field> <value>      field: distance, duration, cadence, elevation
  submit                   save the form
  edit <id>                edit a workout
  cancel                   cancel the current edit
  delete <id>              delete a workout
  focus <id>               center the map on a workout
  sort                     sort workouts by distance
  list                     show all workouts
  reset                    delete all workouts
  quit";

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        dir = %config.storage_dir.display(),
        key = %config.storage_key,
        "Starting workout ledger"
    );

    let store = LedgerStore::new(
        FileStore::new(&config.storage_dir),
        config.storage_key.clone(),
    );
    let start = config.default_coords();
    let mut controller =
        LedgerController::new(config, TerminalMap::default(), TerminalForm::default(), store);

    controller.init();
    // No geolocation on a terminal: start at the configured location.
    controller.on_position(Some(start));

    println!("{HELP}");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if !run_command(&mut controller, &words)? {
            break;
        }
    }
    Ok(())
}

type Controller = LedgerController<TerminalMap, TerminalForm, FileStore>;

/// Execute one command line. Returns `false` when the user quits.
fn run_command(controller: &mut Controller, words: &[&str]) -> anyhow::Result<bool> {
    match words {
        [] => {}
        ["quit"] | ["exit"] => return Ok(false),
        ["help"] => println!("{HELP}"),
        ["click", lat, lng] => match (lat.parse::<f64>(), lng.parse::<f64>()) {
            (Ok(lat), Ok(lng)) => controller.on_map_click(Coords::new(lat, lng)),
            _ => println!("coordinates must be numbers"),
        },
        ["type", kind] => match kind.parse::<WorkoutType>() {
            Ok(workout_type) => {
                controller.form_mut().input.workout_type = workout_type.as_str().to_string();
                controller.on_type_changed(workout_type);
            }
            Err(e) => println!("{e}"),
        },
        ["set", field, value] => {
            if !controller.form_mut().input.set_field(field, value) {
                println!("unknown field: {field}");
            }
        }
        ["submit"] => match controller.submit() {
            Ok(SubmitOutcome::Created { id }) => println!("created {id}"),
            Ok(SubmitOutcome::Replaced { old_id, new_id }) => {
                println!("replaced {old_id} with {new_id}")
            }
            Ok(SubmitOutcome::TargetMissing { id }) => println!("{id} no longer exists"),
            // Validation failures were already shown through the form.
            Err(e) if e.user_message().is_some() => {}
            Err(e) => return Err(e).context("Submit failed"),
        },
        ["edit", id] => {
            if !controller.begin_edit(id) {
                println!("no workout {id}");
            }
        }
        ["cancel"] => controller.cancel_edit(),
        ["delete", id] => {
            if !controller.delete(id) {
                println!("no workout {id}");
            }
        }
        ["focus", id] => {
            if !controller.focus(id) {
                println!("no workout {id}");
            }
        }
        ["sort"] => controller.sort(),
        ["list"] => {
            for workout in controller.ledger().iter() {
                println!(
                    "{}  (created {}, at {})",
                    WorkoutCard::from_workout(workout),
                    format_utc_rfc3339(workout.created_at()),
                    workout.coords()
                );
            }
        }
        ["reset"] => controller.reset().context("Reset failed")?,
        _ => println!("unrecognized command, try `help`"),
    }
    Ok(true)
}

/// Map that prints marker changes.
#[derive(Default)]
struct TerminalMap {
    next_marker: u32,
}

impl MapView for TerminalMap {
    type Marker = u32;

    fn place_marker(&mut self, coords: Coords, label: &MarkerLabel) -> u32 {
        self.next_marker += 1;
        println!(
            "map: marker #{} at {} ({}: {})",
            self.next_marker, coords, label.workout_type, label.text
        );
        self.next_marker
    }

    fn remove_marker(&mut self, marker: u32) {
        println!("map: removed marker #{marker}");
    }

    fn center_on(&mut self, coords: Coords, zoom: u8) {
        println!("map: centered on {coords} (zoom {zoom})");
    }
}

/// Form whose fields are set by `type`/`set` commands.
#[derive(Default)]
struct TerminalForm {
    input: RawWorkoutInput,
}

impl FormSurface for TerminalForm {
    fn read_input(&self) -> RawWorkoutInput {
        self.input.clone()
    }

    fn show(&mut self) {
        if self.input.workout_type.is_empty() {
            self.input.workout_type = WorkoutType::Running.as_str().to_string();
        }
        println!("form: open ({})", self.input.workout_type);
    }

    fn populate(&mut self, input: &RawWorkoutInput) {
        self.input = input.clone();
        println!(
            "form: distance={} duration={} cadence={} elevation={}",
            input.distance, input.duration, input.cadence, input.elevation
        );
    }

    fn hide_and_clear(&mut self) {
        // The type selector keeps its value, like a <select>.
        let workout_type = std::mem::take(&mut self.input.workout_type);
        self.input = RawWorkoutInput {
            workout_type,
            ..Default::default()
        };
    }

    fn show_type_fields(&mut self, workout_type: WorkoutType) {
        let field = match workout_type {
            WorkoutType::Running => "cadence",
            WorkoutType::Cycling => "elevation",
        };
        println!("form: {workout_type} uses {field}");
    }

    fn alert(&mut self, message: &str) {
        println!("!! {message}");
    }

    fn render_card(&mut self, card: &WorkoutCard) {
        println!("list: {card}");
    }

    fn remove_card(&mut self, id: &str) {
        println!("list: removed {id}");
    }

    fn clear_cards(&mut self) {
        println!("list: cleared");
    }
}

/// Initialize logging to stderr: JSON when `LOG_FORMAT=json`, text otherwise.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workout_ledger=debug,warn"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stderr),
            )
            .init();
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress-Tracker CLI
//!
//! Thin shell over the state layer: it reads store values, calls the
//! flows on [`App`], and drives router navigation the way the screens of
//! a graphical host would.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use progress_tracker::{
    assets::resolve_image_url,
    config::Config,
    db::{self, SqliteStorage},
    models::exercise::{normalize_positive_int, normalize_positive_number},
    models::{Exercise, ExerciseDraft, ExerciseMeta, RoutineDraft},
    presets::{find_preset, EXERCISE_PRESETS},
    router::{to_path, MemoryLocation, Route},
    run::RunSession,
    time_utils::format_duration,
    App,
};

#[derive(Parser)]
#[command(
    name = "progress-tracker",
    about = "Define exercise routines, run them, and keep completion history, all stored locally."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List routines and recent completions, newest first
    List,
    /// Show one routine and its recorded history
    Show { routine_id: String },
    /// Create a routine from exercise specs (NAME or NAME=IMAGE_URL)
    Create {
        name: String,
        #[arg(required = true)]
        exercises: Vec<String>,
    },
    /// Replace a routine's name and exercises (id and history are kept)
    Edit {
        routine_id: String,
        name: String,
        #[arg(required = true)]
        exercises: Vec<String>,
    },
    /// Run a routine interactively and record a completion
    Run { routine_id: String },
    /// Delete a routine (its history is kept)
    Delete { routine_id: String },
    /// List recorded completions, newest first
    History {
        /// Only completions of this routine
        #[arg(long)]
        routine: Option<String>,
    },
    /// Show one completion record
    Completed { completion_id: String },
    /// Delete one completion record
    Forget { completion_id: String },
    /// List built-in exercise presets
    Presets,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let storage = db::shared(SqliteStorage::open(&config.database_path)?);
    let location = MemoryLocation::new(to_path(&Route::Home, &config.base_path));
    let mut app = App::new(config, storage, location);

    match cli.command {
        Command::List => list(&app),
        Command::Show { routine_id } => show(&app, &routine_id),
        Command::Create { name, exercises } => {
            let draft = build_draft(&name, &exercises);
            let routine = app.save_routine(&draft, None)?;
            println!("Saved routine {} ({}).", routine.name, routine.id);
        }
        Command::Edit {
            routine_id,
            name,
            exercises,
        } => {
            app.router.navigate(Route::Edit {
                routine_id: routine_id.clone(),
            });
            if app.routine_for_edit().is_none() {
                println!("Routine not found. It may have been deleted.");
                app.router.navigate(Route::Home);
                return Ok(());
            }
            let draft = build_draft(&name, &exercises);
            let routine = app.save_routine(&draft, Some(&routine_id))?;
            println!("Updated routine {} ({}).", routine.name, routine.id);
        }
        Command::Run { routine_id } => run_routine(&mut app, &routine_id)?,
        Command::Delete { routine_id } => {
            app.delete_routine(&routine_id)?;
            println!("Deleted routine {routine_id}. Its history is kept.");
        }
        Command::History { routine } => history(&app, routine.as_deref()),
        Command::Completed { completion_id } => completed(&mut app, &completion_id),
        Command::Forget { completion_id } => {
            app.delete_completion(&completion_id)?;
            println!("Deleted completion {completion_id}.");
        }
        Command::Presets => presets(),
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("progress_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Parse one exercise spec (`NAME` or `NAME=IMAGE_URL`).
///
/// A bare name matching a built-in preset picks up the preset's image.
fn parse_exercise_spec(spec: &str) -> ExerciseDraft {
    match spec.split_once('=') {
        Some((name, image_url)) => ExerciseDraft::named(name, Some(image_url)),
        None => match find_preset(spec) {
            Some(preset) => preset.to_draft(),
            None => ExerciseDraft::named(spec, None),
        },
    }
}

fn build_draft(name: &str, exercises: &[String]) -> RoutineDraft {
    RoutineDraft {
        name: name.to_string(),
        exercises: exercises.iter().map(|spec| parse_exercise_spec(spec)).collect(),
    }
}

fn list(app: &App<MemoryLocation>) {
    if app.routines.routines().is_empty() {
        println!("No routines yet. Create one with `progress-tracker create`.");
    } else {
        println!("Routines:");
        for routine in app.routines.routines() {
            println!(
                "  {}  {} ({} exercises, created {})",
                routine.id,
                routine.name,
                routine.exercises.len(),
                routine.created_at
            );
        }
    }

    let completions = app.completions.completions();
    if !completions.is_empty() {
        println!("Recent completions:");
        for completion in completions.iter().take(5) {
            println!(
                "  {}  {} at {}",
                completion.id, completion.routine_name, completion.completed_at
            );
        }
    }
}

fn show(app: &App<MemoryLocation>, routine_id: &str) {
    let Some(routine) = app.routines.find(routine_id) else {
        println!("Routine not found. It may have been deleted.");
        return;
    };

    println!("{} ({})", routine.name, routine.id);
    println!("Created {}", routine.created_at);
    for (index, exercise) in routine.exercises.iter().enumerate() {
        println!("  {}. {}{}", index + 1, exercise.name, meta_suffix(exercise));
        print_images(&app.config.base_path, exercise);
    }

    let history = app.completion_history(routine_id);
    if history.is_empty() {
        println!("No completed runs yet for this routine.");
    } else {
        println!("Completed {} times. Last: {}", history.len(), history[0].completed_at);
    }
}

fn print_images(base_path: &str, exercise: &Exercise) {
    if let Some(urls) = &exercise.image_urls {
        for url in urls {
            println!("       image: {}", resolve_image_url(base_path, url));
        }
    }
}

fn meta_suffix(exercise: &Exercise) -> String {
    let mut parts = Vec::new();
    if let Some(sets) = exercise.sets {
        parts.push(format!("{sets} sets"));
    }
    if let Some(reps) = exercise.reps {
        parts.push(format!("{reps} reps"));
    }
    if let Some(weight) = exercise.weight {
        parts.push(format!("{weight} kg"));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("  [{}]", parts.join(", "))
    }
}

fn history(app: &App<MemoryLocation>, routine_id: Option<&str>) {
    let completions: Vec<_> = match routine_id {
        Some(routine_id) => app.completion_history(routine_id),
        None => app.completions.completions().iter().collect(),
    };

    if completions.is_empty() {
        println!("No completions recorded.");
        return;
    }
    for completion in completions {
        println!(
            "  {}  {} ({} exercises) at {}",
            completion.id,
            completion.routine_name,
            completion.exercise_count,
            completion.completed_at
        );
    }
}

fn completed(app: &mut App<MemoryLocation>, completion_id: &str) {
    app.router.navigate(Route::Completed {
        completion_id: completion_id.to_string(),
    });

    let Some(completion) = app.completion_for_view() else {
        println!("Completion not found. It may have been cleared from local history.");
        app.router.navigate(Route::Home);
        return;
    };

    println!("{} completed at {}", completion.routine_name, completion.completed_at);
    println!("Routine id: {} (may no longer exist)", completion.routine_id);
    match &completion.exercises {
        Some(exercises) => {
            for (index, exercise) in exercises.iter().enumerate() {
                println!("  {}. {}{}", index + 1, exercise.name, meta_suffix(exercise));
                print_images(&app.config.base_path, exercise);
            }
        }
        None => println!(
            "{} exercises (recorded before snapshots existed)",
            completion.exercise_count
        ),
    }
}

fn presets() {
    println!("Built-in exercise presets:");
    for preset in EXERCISE_PRESETS {
        match preset.image_url {
            Some(url) => println!("  {}  ({url})", preset.name),
            None => println!("  {}", preset.name),
        }
    }
}

/// Parse one meta value: `-` clears, anything else must be numeric.
fn parse_meta_int(raw: &str) -> Option<u32> {
    raw.trim().parse::<f64>().ok().and_then(normalize_positive_int)
}

fn parse_meta_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().and_then(normalize_positive_number)
}

fn run_routine(
    app: &mut App<MemoryLocation>,
    routine_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    app.router.navigate(Route::Run {
        routine_id: routine_id.to_string(),
    });

    if app.routine_for_run().is_none() {
        println!("Routine not found. It may have been deleted.");
        app.router.navigate(Route::Home);
        return Ok(());
    }

    let mut session = RunSession::new();
    let started = Instant::now();

    println!("Commands: NUMBER toggle | meta NUMBER SETS REPS WEIGHT ('-' clears) | reset | done | quit");

    loop {
        // Re-read every turn: meta edits rewrite the stored routine.
        let Some(routine) = app.routines.find(routine_id).cloned() else {
            println!("Routine disappeared mid-run.");
            break;
        };

        println!();
        println!(
            "{}: {} / {} completed ({} elapsed)",
            routine.name,
            session.done_count(&routine),
            routine.exercises.len(),
            format_duration(Some(started.elapsed().as_secs_f64()))
        );
        match session.next_undone(&routine) {
            Some(next) => println!("Next up: {}", next.name),
            None => println!("All done."),
        }
        for (index, exercise) in routine.exercises.iter().enumerate() {
            let mark = if session.is_done(&exercise.id) { "x" } else { " " };
            println!("  [{mark}] {}. {}{}", index + 1, exercise.name, meta_suffix(exercise));
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if let Ok(number) = line.parse::<usize>() {
            match routine.exercises.get(number.saturating_sub(1)) {
                Some(exercise) if number >= 1 => {
                    session.toggle(&exercise.id);
                }
                _ => println!("No exercise {number}."),
            }
            continue;
        }

        let mut words = line.split_whitespace();
        match words.next() {
            Some("meta") => {
                let args: Vec<&str> = words.collect();
                let [number, sets, reps, weight] = args.as_slice() else {
                    println!("Usage: meta NUMBER SETS REPS WEIGHT");
                    continue;
                };
                let Some(exercise) = number
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .and_then(|n| routine.exercises.get(n - 1))
                else {
                    println!("No exercise {number}.");
                    continue;
                };
                let meta = ExerciseMeta {
                    sets: parse_meta_int(sets),
                    reps: parse_meta_int(reps),
                    weight: parse_meta_number(weight),
                };
                app.set_exercise_meta(routine_id, &exercise.id, meta)?;
            }
            Some("reset") => session.reset(),
            Some("done") => {
                let routine = app.routines.find(routine_id).cloned();
                let Some(routine) = routine else { break };
                if session.all_done(&routine) {
                    let completion = app.complete_run(routine_id)?;
                    println!(
                        "Completed {} in {}. Recorded as {}.",
                        completion.routine_name,
                        format_duration(Some(started.elapsed().as_secs_f64())),
                        completion.id
                    );
                    break;
                }
                println!("Not all exercises are done yet.");
            }
            Some("quit") => {
                app.router.navigate(Route::Home);
                break;
            }
            Some(other) => println!("Unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

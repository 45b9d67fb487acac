//! moodtank headless runner.
//!
//! Runs the aquarium without a window: loads the visible entries, mounts them
//! into an arena of the requested size, and advances a fixed number of
//! frames. Useful for checking tunables and for feeding transforms to another
//! renderer.
//!
//! # Output
//!
//! - `--dump` prints one JSON line per fish per frame:
//!   `{"frame":1,"id":"demo-1","transform":{"x":..,"y":..,"rotation":..,"scale":1.0,"tail_angle":..}}`
//! - Focus notifications are always printed as JSON lines:
//!   `{"kind":"focused","entry":{...}}` / `{"kind":"unfocused"}`
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 300 --seed 7 --hover demo-2@60 --leave demo-2@120
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use serde::Serialize;

use moodtank::aquarium::Aquarium;
use moodtank::components::visualbinding::{FishTransform, TransformSlot};
use moodtank::entries::{demo_entries, load_entries};
use moodtank::resources::aquariumconfig::AquariumConfig;
use moodtank::resources::random::SimRng;

/// A scripted pointer event: `<entry id>@<frame>`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PointerCue {
    id: String,
    frame: u64,
}

fn parse_pointer_cue(s: &str) -> Result<PointerCue, String> {
    let (id, frame) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("expected <id>@<frame>, got '{}'", s))?;
    if id.is_empty() {
        return Err("entry id must not be empty".to_string());
    }
    let frame = frame
        .parse::<u64>()
        .map_err(|e| format!("bad frame number '{}': {}", frame, e))?;
    Ok(PointerCue {
        id: id.to_string(),
        frame,
    })
}

/// Mood journal aquarium, headless.
#[derive(Parser)]
#[command(version, about = "Runs the mood-journal aquarium simulation without a window.")]
struct Cli {
    /// JSON array of diary entries to mount. Uses a demo month when omitted.
    #[arg(long, value_name = "PATH")]
    entries: Option<PathBuf>,

    /// INI configuration file (default: ./aquarium.ini if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Arena width in pixels (default: configured window width).
    #[arg(long)]
    width: Option<f32>,

    /// Arena height in pixels (default: configured window height).
    #[arg(long)]
    height: Option<f32>,

    /// Print every fish's transform on every frame as JSON lines.
    #[arg(long)]
    dump: bool,

    /// Pointer enters a fish before the given frame, e.g. `demo-2@60`.
    #[arg(long, value_name = "ID@FRAME", value_parser = parse_pointer_cue)]
    hover: Vec<PointerCue>,

    /// Pointer leaves a fish before the given frame, e.g. `demo-2@120`.
    #[arg(long, value_name = "ID@FRAME", value_parser = parse_pointer_cue)]
    leave: Vec<PointerCue>,
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    id: &'a str,
    transform: FishTransform,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AquariumConfig::with_path(path),
        None => AquariumConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if cli.config.is_some() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        info!("No usable config file, using defaults ({})", e);
    }

    let entries = match &cli.entries {
        Some(path) => match load_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => demo_entries(),
    };

    let width = cli.width.unwrap_or(config.window_width as f32);
    let height = cli.height.unwrap_or(config.window_height as f32);
    let dt = 1.0 / config.target_fps.max(1) as f32;
    let rng = match cli.seed {
        Some(seed) => SimRng::seeded(seed),
        None => SimRng::from_entropy(),
    };

    let mut aquarium = Aquarium::new(config, rng);
    if let Err(e) = aquarium.mount(width, height, &entries) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // One slot per fish, keyed by id so the dump comes out in a stable order.
    let mut slots: BTreeMap<String, Arc<TransformSlot>> = BTreeMap::new();
    for id in aquarium.agent_ids() {
        let slot = TransformSlot::shared();
        if let Err(e) = aquarium.attach_visual(&id, slot.clone()) {
            error!("{e}");
            continue;
        }
        slots.insert(id, slot);
    }
    let focus = aquarium.focus_receiver();

    for frame in 1..=cli.frames {
        for cue in cli.leave.iter().filter(|c| c.frame == frame) {
            if let Err(e) = aquarium.pointer_leave(&cue.id) {
                error!("frame {}: {}", frame, e);
            }
        }
        for cue in cli.hover.iter().filter(|c| c.frame == frame) {
            if let Err(e) = aquarium.pointer_enter(&cue.id) {
                error!("frame {}: {}", frame, e);
            }
        }

        aquarium.tick(dt);

        for change in focus.try_iter() {
            match serde_json::to_string(&change) {
                Ok(line) => println!("{line}"),
                Err(e) => error!("could not encode focus change: {}", e),
            }
        }
        if cli.dump {
            for (id, slot) in &slots {
                let Some(transform) = slot.latest() else {
                    continue;
                };
                let record = FrameRecord {
                    frame,
                    id,
                    transform,
                };
                match serde_json::to_string(&record) {
                    Ok(line) => println!("{line}"),
                    Err(e) => error!("could not encode frame record: {}", e),
                }
            }
        }
    }

    let clock = aquarium.clock();
    info!(
        "Simulated {} frames ({:.1}s) for {} fish in a {}x{} arena",
        clock.frame_count,
        clock.elapsed,
        aquarium.agent_count(),
        width,
        height
    );
    aquarium.unmount();
}

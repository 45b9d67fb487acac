//! moodtank viewer.
//!
//! A resizable raylib window showing the aquarium. The window is the
//! container: its size is republished whenever it changes and the mouse drives
//! hover through hit testing. Hovering a fish opens the entry's detail panel.
//!
//! ```sh
//! cargo run --release --features viewer --bin moodtank-viewer -- --entries month.json
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use glam::Vec2;
use log::{error, info};
use raylib::prelude::*;

use moodtank::aquarium::{AgentSnapshot, Aquarium};
use moodtank::components::diaryentry::{DiaryEntry, parse_hex_color};
use moodtank::components::visualbinding::{FishTransform, TransformSlot};
use moodtank::entries::{demo_entries, load_entries};
use moodtank::resources::aquariumconfig::AquariumConfig;
use moodtank::resources::random::SimRng;

const WATER: Color = Color::new(0x1B, 0x3A, 0x4B, 255);
const PANEL: Color = Color::new(0xF5, 0xF1, 0xE8, 235);
const INK: Color = Color::new(0x22, 0x22, 0x22, 255);
const PANEL_WIDTH: i32 = 300;

#[derive(Parser)]
#[command(version, about = "Shows the mood-journal aquarium in a window.")]
struct Cli {
    /// JSON array of diary entries to mount. Uses a demo month when omitted.
    #[arg(long, value_name = "PATH")]
    entries: Option<PathBuf>,

    /// INI configuration file (default: ./aquarium.ini if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn to_glam(v: Vector2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn to_rl(v: Vec2) -> Vector2 {
    Vector2::new(v.x, v.y)
}

/// raylib only fills triangles wound counter-clockwise on screen.
fn wound(a: Vec2, b: Vec2, c: Vec2) -> (Vec2, Vec2, Vec2) {
    if (b - a).perp_dot(c - a) > 0.0 {
        (a, c, b)
    } else {
        (a, b, c)
    }
}

fn fish_color(entry: &DiaryEntry) -> Color {
    let [r, g, b] = parse_hex_color(entry.color_tag()).unwrap_or([0xD6, 0xD2, 0xD2]);
    Color::new(r, g, b, 255)
}

fn draw_fish(d: &mut RaylibDrawHandle, fish: &AgentSnapshot, transform: &FishTransform) {
    let color = fish_color(&fish.entry);
    let size = fish.traits.visual_size * transform.scale;
    let center = Vec2::new(transform.x, transform.y);
    let heading = Vec2::from_angle(transform.rotation.to_radians());
    // The body is exactly the box the pointer hit test uses.
    let body = fish.traits.footprint(transform.scale);
    let (body_len, body_height) = (body.x, body.y);

    // Tail pivots on the back of the body.
    let base = center + heading.rotate(Vec2::new(-body_len * 0.5, 0.0));
    let tail = Vec2::from_angle((transform.rotation + transform.tail_angle).to_radians());
    let tip_up = base + tail.rotate(Vec2::new(-size * 0.5, -size * 0.4));
    let tip_down = base + tail.rotate(Vec2::new(-size * 0.5, size * 0.4));
    let (a, b, c) = wound(base, tip_up, tip_down);
    d.draw_triangle(to_rl(a), to_rl(b), to_rl(c), Color { a: 215, ..color });

    d.draw_rectangle_pro(
        Rectangle::new(center.x, center.y, body_len, body_height),
        Vector2::new(body_len * 0.5, body_height * 0.5),
        transform.rotation,
        color,
    );

    let label = fish.entry.display_label();
    if !label.is_empty() {
        let font_size = (size * 0.4).max(10.0) as i32;
        let width = label.chars().count() as i32 * font_size / 2;
        d.draw_text(
            label,
            center.x as i32 - width / 2,
            center.y as i32 - font_size / 2,
            font_size,
            INK,
        );
    }
}

fn draw_panel(d: &mut RaylibDrawHandle, entry: &DiaryEntry, screen_width: i32) {
    let x = screen_width - PANEL_WIDTH - 16;
    let mut y = 16;
    let mut lines = vec![entry.title.clone(), format!("{} {}", entry.date, entry.time)];
    if let Some(mood) = entry.mood {
        lines.push(mood.description().to_string());
    }
    lines.extend(wrap(&entry.text, 36));

    d.draw_rectangle(x, y, PANEL_WIDTH, 24 + 22 * lines.len() as i32, PANEL);
    d.draw_rectangle(x, y, 6, 24 + 22 * lines.len() as i32, fish_color(entry));
    y += 12;
    for (i, line) in lines.iter().enumerate() {
        let size = if i == 0 { 20 } else { 16 };
        d.draw_text(line, x + 16, y, size, INK);
        y += 22;
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AquariumConfig::with_path(path),
        None => AquariumConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
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

    let (window_width, window_height) = config.window_size();
    let target_fps = config.target_fps;
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("moodtank")
        .build();
    rl.set_target_fps(target_fps);

    let rng = match cli.seed {
        Some(seed) => SimRng::seeded(seed),
        None => SimRng::from_entropy(),
    };
    let mut aquarium = Aquarium::new(config, rng);
    if let Err(e) = aquarium.mount(
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
        &entries,
    ) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut slots: HashMap<String, Arc<TransformSlot>> = HashMap::new();
    for id in aquarium.agent_ids() {
        let slot = TransformSlot::shared();
        match aquarium.attach_visual(&id, slot.clone()) {
            Ok(()) => {
                slots.insert(id, slot);
            }
            Err(e) => error!("{e}"),
        }
    }
    let focus = aquarium.focus_receiver();

    while !rl.window_should_close() {
        let size = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        if aquarium.arena().size() != Vec2::new(size.0, size.1) {
            aquarium.resize(size.0, size.1);
        }
        let cursor = rl
            .is_cursor_on_screen()
            .then(|| to_glam(rl.get_mouse_position()));
        aquarium.pointer_moved(cursor);
        aquarium.tick(rl.get_frame_time());

        for change in focus.try_iter() {
            log::debug!("focus: {:?}", change);
        }

        let fish = aquarium.snapshots();
        let focused = aquarium.focused();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(WATER);
        for snapshot in &fish {
            let Some(transform) = slots.get(&snapshot.entry.id).and_then(|s| s.latest()) else {
                continue;
            };
            draw_fish(&mut d, snapshot, &transform);
        }
        if let Some(entry) = &focused {
            let width = d.get_screen_width();
            draw_panel(&mut d, entry, width);
        }
    }

    aquarium.unmount();
}

//! Aquarium configuration resource.
//!
//! Holds every tunable of the motion engine, loaded from an INI file. The
//! defaults reproduce the journal's familiar feel, so a missing file is not
//! an error for the hosts.
//!
//! # Configuration File Format
//!
//! ```ini
//! [steering]
//! margin = 100
//! wander_strength = 0.05
//! min_speed_ratio = 0.5
//!
//! [traits]
//! max_speed_min = 0.8
//! max_speed_max = 1.6
//! turn_speed_min = 0.02
//! turn_speed_max = 0.04
//! size_min = 35
//! size_max = 55
//! tail_period_min = 0.2
//! tail_period_max = 0.6
//!
//! [interaction]
//! hover_scale = 1.3
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_MARGIN: f32 = 100.0;
const DEFAULT_WANDER_STRENGTH: f32 = 0.05;
const DEFAULT_MIN_SPEED_RATIO: f32 = 0.5;
const DEFAULT_MAX_SPEED: (f32, f32) = (0.8, 1.6);
const DEFAULT_TURN_SPEED: (f32, f32) = (0.02, 0.04);
const DEFAULT_SIZE: (f32, f32) = (35.0, 55.0);
const DEFAULT_TAIL_PERIOD: (f32, f32) = (0.2, 0.6);
const DEFAULT_HOVER_SCALE: f32 = 1.3;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./aquarium.ini";

/// Aquarium configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AquariumConfig {
    /// Distance from each wall at which fish start turning back, in pixels.
    pub margin: f32,
    /// Total width of the wander draw; each component moves by up to half of it.
    pub wander_strength: f32,
    /// Lower speed bound as a fraction of each fish's `max_speed`.
    pub min_speed_ratio: f32,
    /// Range of the per-fish top speed, pixels per frame.
    pub max_speed_range: (f32, f32),
    /// Range of the per-fish wall-avoidance push.
    pub turn_speed_range: (f32, f32),
    /// Range of the per-fish body length used by renderers and hit tests.
    pub size_range: (f32, f32),
    /// Range of the per-fish tail beat period in seconds.
    pub tail_period_range: (f32, f32),
    /// Display scale of a hovered fish.
    pub hover_scale: f32,
    /// Window width in pixels for windowed hosts.
    pub window_width: u32,
    /// Window height in pixels for windowed hosts.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AquariumConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AquariumConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            wander_strength: DEFAULT_WANDER_STRENGTH,
            min_speed_ratio: DEFAULT_MIN_SPEED_RATIO,
            max_speed_range: DEFAULT_MAX_SPEED,
            turn_speed_range: DEFAULT_TURN_SPEED,
            size_range: DEFAULT_SIZE,
            tail_period_range: DEFAULT_TAIL_PERIOD,
            hover_scale: DEFAULT_HOVER_SCALE,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting values fail [`validate`](Self::validate); on error `self`
    /// is left untouched.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.commit_ini(&config)?;

        info!(
            "Loaded config from {:?}: margin={}, wander={}, speed={:?}, hover_scale={}, window {}x{}@{}",
            self.config_path,
            self.margin,
            self.wander_strength,
            self.max_speed_range,
            self.hover_scale,
            self.window_width,
            self.window_height,
            self.target_fps
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.commit_ini(&config)
    }

    /// Apply `config` to a copy and keep it only if it validates.
    fn commit_ini(&mut self, config: &Ini) -> Result<(), String> {
        let mut next = self.clone();
        next.apply_ini(config)?;
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        let float = |section: &str, key: &str| -> Result<Option<f32>, String> {
            config
                .getfloat(section, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(|e| format!("[{}] {}: {}", section, key, e))
        };
        let uint = |section: &str, key: &str| -> Result<Option<u32>, String> {
            config
                .getuint(section, key)
                .map(|v| v.map(|v| v as u32))
                .map_err(|e| format!("[{}] {}: {}", section, key, e))
        };

        // [steering] section
        if let Some(v) = float("steering", "margin")? {
            self.margin = v;
        }
        if let Some(v) = float("steering", "wander_strength")? {
            self.wander_strength = v;
        }
        if let Some(v) = float("steering", "min_speed_ratio")? {
            self.min_speed_ratio = v;
        }

        // [traits] section
        let ranges = [
            ("max_speed", &mut self.max_speed_range),
            ("turn_speed", &mut self.turn_speed_range),
            ("size", &mut self.size_range),
            ("tail_period", &mut self.tail_period_range),
        ];
        for (name, range) in ranges {
            if let Some(v) = float("traits", &format!("{}_min", name))? {
                range.0 = v;
            }
            if let Some(v) = float("traits", &format!("{}_max", name))? {
                range.1 = v;
            }
        }

        // [interaction] section
        if let Some(v) = float("interaction", "hover_scale")? {
            self.hover_scale = v;
        }

        // [window] section
        if let Some(v) = uint("window", "width")? {
            self.window_width = v;
        }
        if let Some(v) = uint("window", "height")? {
            self.window_height = v;
        }
        if let Some(v) = uint("window", "target_fps")? {
            self.target_fps = v;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [steering] section
        config.set("steering", "margin", Some(self.margin.to_string()));
        config.set(
            "steering",
            "wander_strength",
            Some(self.wander_strength.to_string()),
        );
        config.set(
            "steering",
            "min_speed_ratio",
            Some(self.min_speed_ratio.to_string()),
        );

        // [traits] section
        let ranges = [
            ("max_speed", self.max_speed_range),
            ("turn_speed", self.turn_speed_range),
            ("size", self.size_range),
            ("tail_period", self.tail_period_range),
        ];
        for (name, (min, max)) in ranges {
            config.set("traits", &format!("{}_min", name), Some(min.to_string()));
            config.set("traits", &format!("{}_max", name), Some(max.to_string()));
        }

        // [interaction] section
        config.set(
            "interaction",
            "hover_scale",
            Some(self.hover_scale.to_string()),
        );

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Check that every value is usable by the steering model.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.margin >= 0.0) {
            return Err(format!("margin must be >= 0, got {}", self.margin));
        }
        if !(self.wander_strength >= 0.0) {
            return Err(format!(
                "wander_strength must be >= 0, got {}",
                self.wander_strength
            ));
        }
        if !(0.0..=1.0).contains(&self.min_speed_ratio) {
            return Err(format!(
                "min_speed_ratio must be within [0, 1], got {}",
                self.min_speed_ratio
            ));
        }
        if !(self.hover_scale > 0.0) {
            return Err(format!("hover_scale must be > 0, got {}", self.hover_scale));
        }
        let ranges = [
            ("max_speed", self.max_speed_range),
            ("turn_speed", self.turn_speed_range),
            ("size", self.size_range),
            ("tail_period", self.tail_period_range),
        ];
        for (name, (min, max)) in ranges {
            if !(min > 0.0 && min <= max) {
                return Err(format!(
                    "{} range must satisfy 0 < min <= max, got [{}, {}]",
                    name, min, max
                ));
            }
        }
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

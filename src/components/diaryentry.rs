//! Diary entry record carried by every fish.
//!
//! The storage side of the journal hands the engine one [`DiaryEntry`] per
//! visible entry. The engine never mutates it: the `id` becomes the fish's
//! identity, `color_code` and the display label are passed to the renderer,
//! and the whole record travels back out in focus notifications.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// The five moods an entry can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Blue,
    Red,
    Yellow,
    Green,
    Silver,
}

impl Mood {
    /// Every mood, in palette order.
    pub const ALL: [Mood; 5] = [
        Mood::Green,
        Mood::Blue,
        Mood::Red,
        Mood::Yellow,
        Mood::Silver,
    ];

    /// Default palette colour as `#RRGGBB`.
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Green => "#B4CEB3",
            Mood::Blue => "#88A0A8",
            Mood::Red => "#E86252",
            Mood::Yellow => "#F3DE8A",
            Mood::Silver => "#D6D2D2",
        }
    }

    /// Human description of the mood.
    pub fn description(&self) -> &'static str {
        match self {
            Mood::Green => "Calm",
            Mood::Blue => "Sad",
            Mood::Red => "Mad",
            Mood::Yellow => "Joy",
            Mood::Silver => "Special",
        }
    }
}

/// One diary entry, as supplied by the journal's storage collaborator.
///
/// Only `id` is required when deserializing; everything else defaults to
/// empty so a bare `{ "id": ..., "color_code": ... }` record is accepted.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Stable unique id; the identity of the fish while it is mounted.
    pub id: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// `HH:MM:SS`.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Colour tag as `#RRGGBB`. Falls back to the mood colour when empty.
    #[serde(default)]
    pub color_code: String,
    /// Explicit label painted on the fish; the day of month when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DiaryEntry {
    /// Create an entry with an id and a mood; the colour follows the mood.
    pub fn new(id: impl Into<String>, date: impl Into<String>, mood: Mood) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: String::new(),
            title: String::new(),
            text: String::new(),
            mood: Some(mood),
            color_code: mood.color().to_string(),
            label: None,
        }
    }

    /// Builder: set title and body text.
    pub fn with_text(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.title = title.into();
        self.text = text.into();
        self
    }

    /// Builder: set the time of day.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// The colour tag used to paint this fish.
    pub fn color_tag(&self) -> &str {
        if !self.color_code.is_empty() {
            return &self.color_code;
        }
        self.mood.map(|m| m.color()).unwrap_or("#D6D2D2")
    }

    /// The text painted on the fish body.
    ///
    /// Uses the explicit `label` when set, otherwise the day part of
    /// `date` (`"2024-05-07"` → `"07"`), or an empty string.
    pub fn display_label(&self) -> &str {
        if let Some(label) = &self.label {
            return label;
        }
        self.date.split('-').nth(2).unwrap_or("")
    }
}

/// Parse a `#RRGGBB` (or `RRGGBB`) colour into its channels.
pub fn parse_hex_color(code: &str) -> Option<[u8; 3]> {
    let hex = code.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

//! Loading the visible entry list handed to the aquarium.
//!
//! The journal's storage and month filtering live elsewhere; hosts either
//! pass a JSON array of [`DiaryEntry`] records or fall back to
//! [`demo_entries`].

use std::path::Path;

use crate::components::diaryentry::{DiaryEntry, Mood};
use crate::error::AquariumError;

/// Parse a JSON array of entries.
pub fn parse_entries(json: &str) -> Result<Vec<DiaryEntry>, AquariumError> {
    serde_json::from_str(json).map_err(|e| AquariumError::Entries(e.to_string()))
}

/// Read and parse a JSON array of entries from disk.
pub fn load_entries(path: &Path) -> Result<Vec<DiaryEntry>, AquariumError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AquariumError::Entries(format!("{}: {}", path.display(), e)))?;
    parse_entries(&text)
}

/// A small month of entries, one per mood and then some.
pub fn demo_entries() -> Vec<DiaryEntry> {
    let notes = [
        ("Slow morning", "Tea on the balcony before anyone else was up."),
        ("Missed the bus", "Rain, wet socks, the whole thing."),
        ("Argument", "Said more than I meant to."),
        ("Good news", "The application went through!"),
        ("Birthday", "Cake, candles, far too many balloons."),
        ("Long walk", "Followed the river until the path ran out."),
        ("Quiet", "Nothing happened and that was fine."),
    ];
    notes
        .iter()
        .enumerate()
        .map(|(i, (title, text))| {
            let mood = Mood::ALL[i % Mood::ALL.len()];
            DiaryEntry::new(format!("demo-{}", i + 1), format!("2025-03-{:02}", 3 * i + 2), mood)
                .with_text(*title, *text)
                .with_time(format!("{:02}:30:00", 8 + i))
        })
        .collect()
}

//! TUI rendering for gymplan types.
//!
//! Extension traits that add colored terminal output to gymplan-core types
//! using owo_colors.

use std::collections::BTreeMap;

use gymplan_core::event::{DAY_LABELS, WorkoutEvent};
use gymplan_core::ics::ExportWarning;
use gymplan_core::plan::LegendEntry;
use gymplan_core::recurrence::Occurrence;
use owo_colors::OwoColorize;

/// Number of id characters shown next to each workout
const SHORT_ID_LEN: usize = 8;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for WorkoutEvent {
    fn render(&self) -> String {
        let time = match (gymplan_core::time::format_time(&self.start_time), self.end_time()) {
            (Ok(start), Ok(end)) => format!("{}–{}", start, end),
            _ => format!("{} (invalid time)", self.start_time).red().to_string(),
        };

        let mut meta = vec![self.group_label().to_string()];
        if !self.intensity.is_blank() {
            meta.push(self.intensity.to_string());
        }

        let mut line = format!(
            "  {} {} {} {}",
            swatch(self.color_or_default()),
            time,
            self.name.bold(),
            format!("{} [{}]", meta.join(" · "), short_id(&self.id)).dimmed()
        );

        let notes = self.notes.trim();
        if !notes.is_empty() {
            for note_line in notes.lines() {
                line.push_str(&format!("\n      {}", note_line.italic()));
            }
        }

        line
    }
}

impl Render for LegendEntry {
    fn render(&self) -> String {
        format!("{} {}", swatch(&self.color), self.label)
    }
}

impl Render for ExportWarning {
    fn render(&self) -> String {
        format!("{} {}", "!".yellow(), self.to_string().yellow())
    }
}

impl Render for Occurrence {
    fn render(&self) -> String {
        format!(
            "  {}–{} {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.name
        )
    }
}

/// Render a day-grouped week, one block per day.
pub fn render_week(days: &BTreeMap<u8, Vec<&WorkoutEvent>>) -> String {
    let mut lines = Vec::new();

    for (day, events) in days {
        let label = DAY_LABELS[usize::from(*day)];
        let count = format!("{} {}", events.len(), pluralize("workout", events.len()));
        lines.push(format!("{} {}", label.bold(), count.dimmed()));

        for event in events {
            lines.push(event.render());
        }
    }

    lines.join("\n")
}

/// Render the legend on a single line.
pub fn render_legend(entries: &[LegendEntry]) -> String {
    if entries.is_empty() {
        return "No workouts yet".dimmed().to_string();
    }

    entries
        .iter()
        .map(|entry| entry.render())
        .collect::<Vec<_>>()
        .join("   ")
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// A colored dot for `#rrggbb` colors, a plain one otherwise.
fn swatch(color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

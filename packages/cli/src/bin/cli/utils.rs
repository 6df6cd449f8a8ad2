use carryover_core::Color;
use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%-m/%-d/%Y %H:%M").to_string()
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn color_label(color: Color) -> ColoredString {
    match color {
        Color::Mist => color.as_str().white(),
        Color::Sage => color.as_str().green(),
        Color::Blush => color.as_str().magenta(),
        Color::Sand => color.as_str().yellow(),
        Color::Sky => color.as_str().cyan(),
    }
}

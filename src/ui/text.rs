// VCScout - ui/text.rs
//
// User-facing strings built from state. Kept apart from the panels so the
// wording can be tested without an egui context.

use chrono::{DateTime, Local, Utc};

/// Heading above the result cards.
pub fn results_heading(query: &str) -> String {
    format!("{query} VCs & Investors")
}

/// Line under the heading giving the result count.
pub fn results_count(count: usize, query: &str) -> String {
    let noun = if count == 1 { "investor" } else { "investors" };
    format!("Found {count} {noun} specializing in {query}")
}

/// Message shown when a search completed with zero matches.
pub fn no_results(query: &str) -> String {
    format!("No VCs found for {query}. Try selecting a different industry.")
}

/// Message shown when a search could not be completed.
pub fn search_failed(query: &str) -> String {
    format!("Couldn't load investors for {query}. Check your connection and try again.")
}

/// Shorten `text` to at most `max_chars` characters (plus an ellipsis).
///
/// Returns the display text and whether anything was cut.
pub fn truncate_description(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (format!("{}...", text[..byte_idx].trim_end()), true),
        None => (text.to_string(), false),
    }
}

/// Wall-clock time of a chat turn as HH:MM in the local zone.
pub fn turn_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Up to two initials for the logo placeholder badge.
pub fn initials(firm_name: &str) -> String {
    firm_name
        .split_whitespace()
        .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// Where searches are answered from, for the About dialog.
pub fn search_source(remote: bool, corpus_size: usize) -> String {
    if remote {
        "backend index".to_string()
    } else {
        let noun = if corpus_size == 1 { "firm" } else { "firms" };
        format!("built-in directory ({corpus_size} {noun})")
    }
}

/// Licence and copyright line for the About dialog.
pub fn licence_line(licence: &str, year: u16, holder: &str) -> String {
    format!("{licence} License \u{00b7} \u{00a9} {year} {holder}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_result_headings() {
        assert_eq!(results_heading("Fintech"), "Fintech VCs & Investors");
        assert_eq!(
            results_count(1, "Fintech"),
            "Found 1 investor specializing in Fintech"
        );
        assert_eq!(
            results_count(3, "SaaS"),
            "Found 3 investors specializing in SaaS"
        );
        assert_eq!(
            no_results("Space"),
            "No VCs found for Space. Try selecting a different industry."
        );
    }

    #[test]
    fn test_truncate_description_short_text_unchanged() {
        assert_eq!(truncate_description("short", 120), ("short".to_string(), false));
    }

    #[test]
    fn test_truncate_description_respects_char_boundaries() {
        let text = "é".repeat(10);
        let (shown, cut) = truncate_description(&text, 4);
        assert!(cut);
        assert_eq!(shown, "éééé...");
    }

    #[test]
    fn test_turn_time_is_hh_mm() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 13, 7, 0).unwrap();
        let shown = turn_time(&ts);
        assert_eq!(shown.len(), 5);
        assert_eq!(&shown[2..3], ":");
        let hours: u32 = shown[..2].parse().unwrap();
        let minutes: u32 = shown[3..].parse().unwrap();
        assert!(hours < 24 && minutes < 60);
    }

    #[test]
    fn test_search_source() {
        assert_eq!(search_source(true, 40), "backend index");
        assert_eq!(
            search_source(false, 40),
            "built-in directory (40 firms)"
        );
        assert_eq!(
            search_source(false, 1),
            "built-in directory (1 firm)"
        );
    }

    #[test]
    fn test_licence_line_uses_manifest_licence() {
        use crate::util::constants;
        let line = licence_line(
            constants::APP_LICENSE,
            constants::COPYRIGHT_YEAR,
            constants::COPYRIGHT_HOLDER,
        );
        assert_eq!(line, "MIT License \u{00b7} \u{00a9} 2026 VCScout contributors");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sequoia Capital"), "SC");
        assert_eq!(initials("a16z"), "A");
        assert_eq!(initials("Retail Revolution Fund"), "RR");
        assert_eq!(initials(""), "");
    }
}

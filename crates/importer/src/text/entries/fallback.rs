use lazy_static::lazy_static;
use regex::Regex;

use super::expand_birth_year;
use crate::models::ParsedEntry;
use crate::text::TIME;
use crate::traits::EntryMatcher;

const LOOKBACK_BYTES: usize = 200;

lazy_static! {
    static ref POSITION_TOKEN: Regex =
        Regex::new(r"(?:^|\s)(\d{1,3})\s+[A-ZÁÉÍÓÚÜÑ]").unwrap();
    static ref SIMPLE_ENTRY: Regex = Regex::new(
        r"(?i)^(\d{1,3})\s+([A-ZÁÉÍÓÚÜÑ][^,]+,\s*[A-Za-záéíóúüñ]+)\s+(\d{2})\s+(.+)$"
    )
    .unwrap();
}

/// Last resort for individual events: anchors on every time token and reads
/// the entry backwards from it.
pub struct FallbackMatcher;

impl EntryMatcher for FallbackMatcher {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn extract(&self, text: &str) -> Vec<ParsedEntry> {
        TIME.find_iter(text)
            .filter_map(|time| {
                let window = lookback_window(text, time.start());
                entry_before(window, time.as_str())
            })
            .collect()
    }
}

fn lookback_window(text: &str, end: usize) -> &str {
    let mut start = end.saturating_sub(LOOKBACK_BYTES);
    while !text.is_char_boundary(start) {
        start += 1;
    }
    text[start..end].trim()
}

fn entry_before(window: &str, time: &str) -> Option<ParsedEntry> {
    let starts: Vec<usize> = POSITION_TOKEN.find_iter(window).map(|m| m.start()).collect();

    starts.iter().rev().find_map(|&start| {
        let caps = SIMPLE_ENTRY.captures(window[start..].trim())?;
        let birth_year = caps[3].parse().ok().map(expand_birth_year);

        Some(ParsedEntry::individual(
            caps[1].parse().ok()?,
            caps[2].trim(),
            birth_year,
            caps[4].trim(),
            time,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_entry_before_time() {
        let entries = FallbackMatcher.extract("1 GARCIA, Ana 11 Natacion Sur 1:05.20");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[0].name.as_deref(), Some("GARCIA, Ana"));
        assert_eq!(entries[0].birth_year, Some(2011));
        assert_eq!(entries[0].club_name, "Natacion Sur");
        assert_eq!(entries[0].time, "1:05.20");
    }

    #[test]
    fn test_time_without_entry_is_ignored() {
        assert!(FallbackMatcher.extract("Tiempo de referencia 1:05.20").is_empty());
    }

    #[test]
    fn test_lookback_respects_char_boundaries() {
        let padding = "Ñ".repeat(150);
        let text = format!("{padding} 4 MUÑOZ, Ines 09 Natacion Sur 2:10.00");
        let entries = FallbackMatcher.extract(&text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].birth_year, Some(2009));
    }
}

pub mod entries;
pub mod header;
pub mod qualifying;
pub mod sectionizer;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::models::ParsedEvent;
use entries::EntryExtractor;
use header::{classification_text, parse_header};
use qualifying::{extract_qualifying_times, extract_records};

/// `m:ss.cc` or `ss.cc`; callers wrap it in a group.
pub(crate) const TIME_PATTERN: &str = r"\d{1,2}:\d{2}\.\d{2}|\d{2}\.\d{2}";

lazy_static! {
    pub(crate) static ref TIME: Regex = Regex::new(TIME_PATTERN).unwrap();
}

/// Reads every recoverable event out of the extracted results text.
///
/// Parsing is best-effort per section: a section whose header, classification
/// block or entry list cannot be read is skipped and the rest of the document
/// is still parsed. An empty vector means nothing was recoverable.
pub fn parse_meet_text(text: &str) -> Vec<ParsedEvent> {
    let normalized = sectionizer::normalize(text);
    let sections = sectionizer::split_sections(&normalized);

    let events: Vec<ParsedEvent> = sections.iter().filter_map(|s| parse_section(s)).collect();

    info!(
        "Parsed {} of {} event sections ({} entries)",
        events.len(),
        sections.len(),
        events.iter().map(|e| e.entries.len()).sum::<usize>()
    );

    events
}

fn parse_section(section: &str) -> Option<ParsedEvent> {
    let Some(header) = parse_header(section) else {
        debug!("Skipping section with unreadable header: {:.60}", section);
        return None;
    };

    let Some(classification) = classification_text(section) else {
        debug!("Skipping event {}: no classification block", header.number);
        return None;
    };

    let entries = EntryExtractor::for_event(header.is_relay).extract(classification);
    if entries.is_empty() {
        debug!("Skipping event {}: no entries recognised", header.number);
        return None;
    }

    let (qualifying_times, records) = if header.is_relay {
        (None, None)
    } else {
        (
            extract_qualifying_times(classification),
            extract_records(classification),
        )
    };

    Some(ParsedEvent {
        event_number: header.number,
        event_name: header.display_name(),
        distance: header.distance,
        stroke: header.stroke,
        gender: header.gender,
        category: header.category,
        is_relay: header.is_relay,
        relay_size: header.relay_size,
        qualifying_times,
        records,
        entries,
    })
}

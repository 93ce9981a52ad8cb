use scoring::models::{parse_time_to_seconds, Event, EventResult, Meet};
use scoring::services::time_normalizer::apply_virtual_times;
use scoring::IdentityRegistry;
use tracing::{info, warn};

use crate::models::ParsedEvent;
use crate::text::parse_meet_text;
use crate::validator::MeetValidator;
use crate::{ImporterError, Result};

/// Builds scoring events from parsed sections, registering every club and
/// swimmer once in a shared registry.
pub struct MeetConverter {
    registry: IdentityRegistry,
}

impl MeetConverter {
    pub fn new() -> Self {
        Self {
            registry: IdentityRegistry::new(),
        }
    }

    pub fn convert_event(&mut self, parsed: &ParsedEvent) -> Event {
        let mut results: Vec<EventResult> = parsed
            .entries
            .iter()
            .filter_map(|entry| {
                let seconds = match parse_time_to_seconds(&entry.time) {
                    Ok(seconds) => seconds,
                    Err(e) => {
                        warn!(
                            "Event {}: dropping position {} ({}): {}",
                            parsed.event_number, entry.position, entry.club_name, e
                        );
                        return None;
                    }
                };

                let club = self.registry.club(&entry.club_name);
                let swimmer = match (&entry.name, parsed.is_relay) {
                    (Some(name), false) => Some(self.registry.swimmer(
                        name,
                        entry.birth_year,
                        parsed.gender,
                        &club,
                    )),
                    _ => None,
                };

                let mut result =
                    EventResult::new(entry.position, club, swimmer, entry.time.clone(), seconds);
                result.relay_team_number = entry.team_number;
                result.course_type = entry.course_type;
                Some(result)
            })
            .collect();

        apply_virtual_times(&mut results);

        Event {
            id: format!("event-{}", parsed.event_number),
            number: parsed.event_number,
            distance: parsed.distance,
            stroke: parsed.stroke,
            gender: parsed.gender,
            category: parsed.category.clone(),
            is_relay: parsed.is_relay,
            relay_size: parsed
                .is_relay
                .then(|| parsed.relay_size.unwrap_or(Event::DEFAULT_RELAY_SIZE)),
            qualifying_times: parsed.qualifying_times.clone(),
            records: parsed.records.clone(),
            results,
        }
    }

    pub fn into_meet(self, name: impl Into<String>, events: Vec<Event>) -> Meet {
        Meet::new(name, events, self.registry)
    }
}

impl Default for MeetConverter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn convert_events(name: impl Into<String>, parsed: &[ParsedEvent]) -> Meet {
    let mut converter = MeetConverter::new();
    let events = parsed.iter().map(|p| converter.convert_event(p)).collect();
    converter.into_meet(name, events)
}

/// Text to `Meet`: parse, prune unusable entries, then convert.
pub fn import_meet(name: &str, text: &str) -> Result<Meet> {
    let (parsed, report) = MeetValidator::prune(parse_meet_text(text));
    report.log_warnings();
    if parsed.is_empty() {
        return Err(ImporterError::NoEventsFound);
    }

    let meet = convert_events(name, &parsed);
    info!(
        "Imported '{}': {} events, {} results, {} clubs, {} swimmers",
        meet.name,
        meet.events.len(),
        meet.result_count(),
        meet.registry.club_count(),
        meet.registry.swimmer_count()
    );

    Ok(meet)
}

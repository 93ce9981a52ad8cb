use std::collections::HashSet;

use scoring::models::parse_time_to_seconds;
use tracing::warn;

use crate::models::{ParsedEntry, ParsedEvent};
use crate::{ImporterError, Result};

pub struct MeetValidator;

impl MeetValidator {
    /// Strict check: any entry-level error fails the whole document.
    pub fn validate(events: &[ParsedEvent]) -> Result<ValidationReport> {
        let mut report = Self::event_warnings(events);

        for event in events {
            for entry in &event.entries {
                report.errors.extend(entry_errors(event, entry));
                report.warnings.extend(entry_warnings(event, entry));
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }

    /// Best-effort pass: entries with errors are dropped, and so are events
    /// left without entries. Every drop is reported as a warning.
    pub fn prune(events: Vec<ParsedEvent>) -> (Vec<ParsedEvent>, ValidationReport) {
        let mut report = Self::event_warnings(&events);
        let mut kept = Vec::with_capacity(events.len());

        for mut event in events {
            let mut entries = Vec::with_capacity(event.entries.len());
            for entry in std::mem::take(&mut event.entries) {
                let errors = entry_errors(&event, &entry);
                if errors.is_empty() {
                    report.warnings.extend(entry_warnings(&event, &entry));
                    entries.push(entry);
                } else {
                    report
                        .warnings
                        .extend(errors.into_iter().map(|e| format!("{} (entry dropped)", e)));
                }
            }

            if entries.is_empty() {
                report.warnings.push(format!(
                    "Event '{}' has no usable entries (event dropped)",
                    event.event_name
                ));
                continue;
            }

            event.entries = entries;
            kept.push(event);
        }

        (kept, report)
    }

    fn event_warnings(events: &[ParsedEvent]) -> ValidationReport {
        let mut report = ValidationReport::default();

        let mut numbers = HashSet::new();
        for event in events {
            let label = &event.event_name;

            if !numbers.insert(event.event_number) {
                report
                    .warnings
                    .push(format!("Duplicate event number: {}", event.event_number));
            }
            if event.distance == 0 {
                report
                    .warnings
                    .push(format!("Event '{}' has no distance", label));
            }
            if !event.is_relay && event.qualifying_times.is_none() {
                report
                    .warnings
                    .push(format!("Event '{}' has no qualifying times", label));
            }
        }

        report
    }
}

fn entry_errors(event: &ParsedEvent, entry: &ParsedEntry) -> Vec<String> {
    let label = &event.event_name;
    let mut errors = Vec::new();

    if entry.position == 0 {
        errors.push(format!("Event '{}' has an entry at position 0", label));
    }
    if entry.club_name.trim().is_empty() {
        errors.push(format!(
            "Event '{}', position {}: empty club name",
            label, entry.position
        ));
    }
    if parse_time_to_seconds(&entry.time).is_err() {
        errors.push(format!(
            "Event '{}', position {}: unreadable time '{}'",
            label, entry.position, entry.time
        ));
    }

    errors
}

fn entry_warnings(event: &ParsedEvent, entry: &ParsedEntry) -> Option<String> {
    let label = &event.event_name;

    if event.is_relay {
        entry.team_number.is_none().then(|| {
            format!(
                "Event '{}', position {}: relay team number missing",
                label, entry.position
            )
        })
    } else {
        entry.birth_year.is_none().then(|| {
            format!(
                "Event '{}', position {}: birth year missing",
                label, entry.position
            )
        })
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

mod fallback;
mod individual;
mod relay;

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

pub use fallback::FallbackMatcher;
pub use individual::IndividualMatcher;
pub use relay::RelayMatcher;

use crate::models::ParsedEntry;
use crate::traits::EntryMatcher;

lazy_static! {
    // Page numbers go first so the open-ended banner patterns stop short of them.
    static ref COMMON_NOISE: Vec<Regex> = [
        r"(?i)Página\s*\d+",
        r"(?i)Introducir conversión[^0-9]*",
        r"(?i)ESP:Conversion Spanish Rules",
        r"(?i)Comprometidos con la natación[^0-9]*",
        r"(?i)Splash Meet Manager[^0-9]*[\d.]*",
        r"(?i)Registered to[^0-9]*",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
    static ref RELAY_NOISE: Vec<Regex> =
        vec![Regex::new(r"\d{2}/\d{2}/\d{4}\s*-\s*\d{2}:\d{2}").unwrap()];
    static ref INDIVIDUAL_NOISE: Vec<Regex> = [
        r"\d+\s+AÑOS\s+\d+:\s*[\d:\.]+\s*/?\s*",
        r"(?i)Absoluto Open:\s*[\d:\.]+",
        r"(?i)\b(?:r|rcto|rn|mmn|mmi\s*\d*|mmj\s*\d*)\s+[\d:\.]+\s+[A-ZÁÉÍÓÚÜÑ\s]+,\s*[A-Za-záéíóúüñ]+[^0-9]+\d{2}/\d{2}/\d{4}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Two-digit birth years from 50 up belong to the 1900s.
pub(crate) fn expand_birth_year(two_digits: i32) -> i32 {
    if two_digits >= 50 {
        1900 + two_digits
    } else {
        2000 + two_digits
    }
}

/// Ordered chain of matchers for one kind of event.
pub struct EntryExtractor {
    matchers: Vec<Box<dyn EntryMatcher>>,
    noise: Vec<&'static Regex>,
}

impl EntryExtractor {
    pub fn relay() -> Self {
        Self {
            matchers: vec![Box::new(RelayMatcher)],
            noise: COMMON_NOISE.iter().chain(RELAY_NOISE.iter()).collect(),
        }
    }

    pub fn individual() -> Self {
        Self {
            matchers: vec![Box::new(IndividualMatcher), Box::new(FallbackMatcher)],
            noise: COMMON_NOISE.iter().chain(INDIVIDUAL_NOISE.iter()).collect(),
        }
    }

    pub fn for_event(is_relay: bool) -> Self {
        if is_relay {
            Self::relay()
        } else {
            Self::individual()
        }
    }

    /// Entries of a classification block, one per position, in position order.
    ///
    /// The first matcher with any output wins; later matchers never top up a
    /// partial result.
    pub fn extract(&self, classification: &str) -> Vec<ParsedEntry> {
        let text = self.strip_noise(classification);

        for matcher in &self.matchers {
            let entries = matcher.extract(&text);
            if !entries.is_empty() {
                debug!("{} matcher found {} entries", matcher.name(), entries.len());
                return dedupe_by_position(entries);
            }
        }

        Vec::new()
    }

    fn strip_noise(&self, text: &str) -> String {
        self.noise
            .iter()
            .fold(text.to_string(), |acc, pattern| {
                pattern.replace_all(&acc, "").into_owned()
            })
            .trim()
            .to_string()
    }
}

fn dedupe_by_position(entries: Vec<ParsedEntry>) -> Vec<ParsedEntry> {
    let mut seen = HashSet::new();
    let mut unique: Vec<ParsedEntry> = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.position))
        .collect();
    unique.sort_by_key(|entry| entry.position);
    unique
}

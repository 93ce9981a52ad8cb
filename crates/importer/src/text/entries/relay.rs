use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ParsedEntry;
use crate::text::{TIME, TIME_PATTERN};
use crate::traits::EntryMatcher;

const MAX_CLUB_NAME_CHARS: usize = 50;

lazy_static! {
    // pos, club, team number, club again, time
    static ref RELAY_LINE: Regex =
        Regex::new(&format!(r"(?:^|\s)(\d{{1,3}})\s+(.+?)\s+(\d)\s+(.+?)\s+({TIME_PATTERN})")).unwrap();
}

fn plausible_club(name: &str) -> bool {
    name.chars().count() <= MAX_CLUB_NAME_CHARS && !TIME.is_match(name)
}

/// `1 C.P.N. La Roda 1 C.P.N. La Roda 1:43.19`
pub struct RelayMatcher;

impl EntryMatcher for RelayMatcher {
    fn name(&self) -> &'static str {
        "relay"
    }

    fn extract(&self, text: &str) -> Vec<ParsedEntry> {
        RELAY_LINE
            .captures_iter(text)
            .filter_map(|caps| {
                let club = caps[4].trim();
                if [caps[2].trim(), club].iter().any(|name| !plausible_club(name)) {
                    return None;
                }

                Some(ParsedEntry::relay(
                    caps[1].parse().ok()?,
                    club,
                    caps[3].parse().ok()?,
                    &caps[5],
                ))
            })
            .collect()
    }
}

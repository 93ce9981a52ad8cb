use lazy_static::lazy_static;
use regex::Regex;
use scoring::models::CourseType;

use super::expand_birth_year;
use crate::models::ParsedEntry;
use crate::text::{TIME, TIME_PATTERN};
use crate::traits::EntryMatcher;

const MAX_CLUB_NAME_CHARS: usize = 40;
const CLUB_PREFIXES: &str = r"C\.N\.|C\.D\.|C\.P\.N\.|E\.C\.|Club|C\.N\.S\.";

lazy_static! {
    static ref ENTRY_LINE: Regex = Regex::new(&format!(
        concat!(
            r"(?i)(?:^|\s)(\d{{1,3}})\s+",
            r"([A-ZÁÉÍÓÚÜÑ][A-ZÁÉÍÓÚÜÑ\s\-\.]+,\s*[A-Za-záéíóúüñ\s\-\.]+)\s+",
            r"(\d{{2}})\s+",
            r"((?:{prefixes})[^0-9]+?)\s+",
            r"({time})\s*",
            r"([SL])?\s*",
            r"(\d{{2}}/\d{{2}}/\d{{4}})?",
        ),
        prefixes = CLUB_PREFIXES,
        time = TIME_PATTERN,
    ))
    .unwrap();
}

/// `1 GARCIA LOPEZ, Ana 11 C.N. Albacete 1:05.20 S 12/03/2025`
pub struct IndividualMatcher;

impl EntryMatcher for IndividualMatcher {
    fn name(&self) -> &'static str {
        "individual"
    }

    fn extract(&self, text: &str) -> Vec<ParsedEntry> {
        ENTRY_LINE
            .captures_iter(text)
            .filter_map(|caps| {
                let club = caps[4].trim();
                if club.chars().count() > MAX_CLUB_NAME_CHARS || TIME.is_match(club) {
                    return None;
                }

                let birth_year = caps[3].parse().ok().map(expand_birth_year);
                let mut entry = ParsedEntry::individual(
                    caps[1].parse().ok()?,
                    caps[2].trim(),
                    birth_year,
                    club,
                    &caps[5],
                );
                entry.course_type = caps
                    .get(6)
                    .map_or(CourseType::Short, |m| CourseType::from_letter(m.as_str()));
                entry.date = caps.get(7).map(|m| m.as_str().to_string());

                Some(entry)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_entry_line() {
        let text = "1 GARCIA LOPEZ, Ana 11 C.N. Albacete 1:05.20 L 12/03/2025";
        let entries = IndividualMatcher.extract(text);

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.position, 1);
        assert_eq!(entry.name.as_deref(), Some("GARCIA LOPEZ, Ana"));
        assert_eq!(entry.birth_year, Some(2011));
        assert_eq!(entry.club_name, "C.N. Albacete");
        assert_eq!(entry.time, "1:05.20");
        assert_eq!(entry.course_type, CourseType::Long);
        assert_eq!(entry.date.as_deref(), Some("12/03/2025"));
    }

    #[test]
    fn test_course_defaults_to_short() {
        let entries = IndividualMatcher.extract("3 RUIZ, Eva 98 Club Natacion Toledo 29.85");

        assert_eq!(entries[0].course_type, CourseType::Short);
        assert_eq!(entries[0].birth_year, Some(1998));
        assert_eq!(entries[0].club_name, "Club Natacion Toledo");
        assert_eq!(entries[0].time, "29.85");
    }

    #[test]
    fn test_several_entries_in_one_block() {
        let text = "1 GARCIA, Ana 11 C.N. Uno 1:05.20 S \
                    2 PEREZ, Eva 12 C.D. Dos 1:06.00 S \
                    3 SANZ, Lucia 10 E.C. Tres 1:07.45 L";
        let entries = IndividualMatcher.extract(text);

        let positions: Vec<u32> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(entries[1].club_name, "C.D. Dos");
    }

    #[test]
    fn test_club_without_known_prefix_is_skipped() {
        assert!(IndividualMatcher
            .extract("1 GARCIA, Ana 11 Natacion Sur 1:05.20")
            .is_empty());
    }
}

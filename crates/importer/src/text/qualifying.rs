use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use scoring::models::{parse_time_to_seconds, EventRecords, QualifyingTimes};
use rust_decimal::Decimal;

use super::TIME_PATTERN;

lazy_static! {
    static ref OPEN_TIME: Regex =
        Regex::new(&format!(r"(?i)Absoluto Open:\s*({TIME_PATTERN})")).unwrap();
    static ref AGE_TIME: Regex = Regex::new(&format!(
        r"(\d{{1,2}})\s+AÑOS\s+(?:\d{{1,2}}:\s+)?({TIME_PATTERN})"
    ))
    .unwrap();
    static ref RECORD: Regex = Regex::new(&format!(
        r"(?i)\b(rcto|rn|mmn|r|mmi|mmj)(?:\s*(\d{{1,2}}))?\s+({TIME_PATTERN})\s+[A-ZÁÉÍÓÚÜÑ\s]+,\s*[A-Za-záéíóúüñ]+[^0-9]+\d{{2}}/\d{{2}}/\d{{4}}"
    ))
    .unwrap();
}

fn seconds(time: &str) -> Option<Decimal> {
    parse_time_to_seconds(time).ok()
}

/// Open and per-age qualifying times announced in a classification block.
pub fn extract_qualifying_times(text: &str) -> Option<QualifyingTimes> {
    let open = OPEN_TIME.captures(text).and_then(|caps| seconds(&caps[1]));

    let by_age: BTreeMap<i32, Decimal> = AGE_TIME
        .captures_iter(text)
        .filter_map(|caps| {
            let age = caps[1].parse().ok()?;
            Some((age, seconds(&caps[2])?))
        })
        .collect();

    let times = QualifyingTimes { open, by_age };
    (!times.is_empty()).then_some(times)
}

/// Record marks listed above the results: `r` regional, `rcto` championship,
/// `rn`/`mmn` national, `mmi`/`mmj` followed by an age for age-group bests.
pub fn extract_records(text: &str) -> Option<EventRecords> {
    let mut records = EventRecords::default();

    for caps in RECORD.captures_iter(text) {
        let Some(mark) = seconds(&caps[3]) else {
            continue;
        };

        match caps[1].to_lowercase().as_str() {
            "r" => records.regional = Some(mark),
            "rcto" => records.championship = Some(mark),
            "rn" | "mmn" => records.national = Some(mark),
            _ => {
                if let Some(age) = caps.get(2).and_then(|m| m.as_str().parse().ok()) {
                    records.age_bests.insert(age, mark);
                }
            }
        }
    }

    (!records.is_empty()).then_some(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_age_times() {
        let text = "Absoluto Open: 1:05.00 14 AÑOS 1:10.50 15 AÑOS 1:09.00 1 RUIZ, Eva";
        let times = extract_qualifying_times(text).unwrap();

        assert_eq!(times.open, Some(Decimal::new(6500, 2)));
        assert_eq!(times.by_age.get(&14), Some(&Decimal::new(7050, 2)));
        assert_eq!(times.for_age(15), Some(Decimal::new(6900, 2)));
    }

    #[test]
    fn test_no_qualifying_times() {
        assert!(extract_qualifying_times("1 RUIZ, Eva 10 C.N. Uno 30.10").is_none());
    }

    #[test]
    fn test_records() {
        let text = "r 2:01.30 GARCIA PEREZ, Lucia C.N. Uno 12/03/2019 \
                    rcto 2:03.00 LOPEZ, Ana C.D. Dos 01/05/2022 \
                    mmi 14 2:08.40 SANZ, Eva C.N. Uno 02/02/2023";
        let records = extract_records(text).unwrap();

        assert_eq!(records.regional, Some(Decimal::new(12130, 2)));
        assert_eq!(records.championship, Some(Decimal::new(12300, 2)));
        assert_eq!(records.age_bests.get(&14), Some(&Decimal::new(12840, 2)));
        assert_eq!(records.national, None);
    }

    #[test]
    fn test_national_record_marks() {
        let records = extract_records("rn 1:58.90 MORA VIDAL, Irene C.N. Tres 20/07/2021").unwrap();
        assert_eq!(records.national, Some(Decimal::new(11890, 2)));
        assert_eq!(records.regional, None);

        let records = extract_records("mmn 2:00.10 MORA, Irene C.N. Tres 20/07/2021").unwrap();
        assert_eq!(records.national, Some(Decimal::new(12010, 2)));
    }

    #[test]
    fn test_no_records() {
        assert!(extract_records("1 RUIZ, Eva 10 C.N. Uno 30.10").is_none());
    }
}

use lazy_static::lazy_static;
use regex::Regex;
use scoring::models::{Gender, Stroke};

lazy_static! {
    static ref HEADER: Regex =
        Regex::new(r"(?i)^Prueba\s+(\d+)\s+(Masc\.|Fem\.|Mixto)?,?\s*(.+)$").unwrap();
    static ref DESCRIPTION_END: Regex = Regex::new(r"(?i)Listado|Clasificación").unwrap();
    static ref CLASSIFICATION: Regex = Regex::new(r"(?i)Clasificación\s*(?:AN\b)?\s*").unwrap();
    static ref RELAY_DISTANCE: Regex = Regex::new(r"(?i)(\d+)\s*x\s*(\d+)\s*m?").unwrap();
    static ref DISTANCE: Regex = Regex::new(r"(?i)(\d+)\s*m").unwrap();
    static ref MALE_CUE: Regex = Regex::new(r"(?i)\b(?:masculino|male)\b").unwrap();
    static ref FEMALE_CUE: Regex = Regex::new(r"(?i)\b(?:femenino|female)\b").unwrap();
}

/// Fields read from a `Prueba <n> ...` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHeader {
    pub number: u32,
    pub distance: u32,
    pub stroke: Stroke,
    pub gender: Gender,
    pub category: String,
    pub is_relay: bool,
    pub relay_size: Option<u32>,
}

impl EventHeader {
    pub fn display_name(&self) -> String {
        format!("Prueba {} - {}m {}", self.number, self.distance, self.stroke)
    }
}

/// Parses the header at the start of a section. The description runs up to
/// `Listado`, `Clasificación` or the end of the section.
pub fn parse_header(section: &str) -> Option<EventHeader> {
    let caps = HEADER.captures(section)?;
    let number: u32 = caps[1].parse().ok()?;
    let gender_token = caps.get(2).map_or("", |m| m.as_str());

    let rest = &caps[3];
    let description = match DESCRIPTION_END.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    }
    .trim();
    if description.is_empty() {
        return None;
    }

    let (distance, is_relay, relay_size) = parse_distance(description);

    Some(EventHeader {
        number,
        distance,
        stroke: parse_stroke(description),
        gender: parse_gender(gender_token, description),
        category: parse_category(description).to_string(),
        is_relay,
        relay_size,
    })
}

/// Text after the `Clasificación` marker, or `None` when the section has no
/// classification block.
pub fn classification_text(section: &str) -> Option<&str> {
    let marker = CLASSIFICATION.find(section)?;
    let text = section[marker.end()..].trim();
    (!text.is_empty()).then_some(text)
}

fn parse_distance(description: &str) -> (u32, bool, Option<u32>) {
    if let Some(caps) = RELAY_DISTANCE.captures(description) {
        let legs: u32 = caps[1].parse().unwrap_or(0);
        let per_leg: u32 = caps[2].parse().unwrap_or(0);
        return (legs.saturating_mul(per_leg), true, Some(legs));
    }

    let distance = DISTANCE
        .captures(description)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);
    (distance, false, None)
}

fn parse_stroke(description: &str) -> Stroke {
    let text = description.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

    if has(&["estilos", "medley"]) {
        Stroke::Medley
    } else if has(&["espalda", "backstroke"]) {
        Stroke::Backstroke
    } else if has(&["braza", "breaststroke"]) {
        Stroke::Breaststroke
    } else if has(&["mariposa", "butterfly"]) {
        Stroke::Butterfly
    } else {
        Stroke::Freestyle
    }
}

fn parse_gender(token: &str, description: &str) -> Gender {
    let token = token.to_lowercase();
    if token.contains("masc") {
        Gender::Male
    } else if token.contains("fem") {
        Gender::Female
    } else if MALE_CUE.is_match(description) {
        Gender::Male
    } else if FEMALE_CUE.is_match(description) {
        Gender::Female
    } else {
        Gender::Mixed
    }
}

fn parse_category(description: &str) -> &'static str {
    let text = description.to_lowercase();

    if text.contains("absoluto") || text.contains("senior") {
        "senior"
    } else if text.contains("junior") {
        "junior"
    } else if text.contains("infantil") || text.contains("14") {
        "infantil"
    } else {
        "open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_header() {
        let header =
            parse_header("Prueba 5 Fem., 200m Espalda Absoluto Clasificación 1 LOPEZ, Ana").unwrap();

        assert_eq!(header.number, 5);
        assert_eq!(header.distance, 200);
        assert_eq!(header.stroke, Stroke::Backstroke);
        assert_eq!(header.gender, Gender::Female);
        assert_eq!(header.category, "senior");
        assert!(!header.is_relay);
        assert_eq!(header.display_name(), "Prueba 5 - 200m backstroke");
    }

    #[test]
    fn test_relay_header() {
        let header = parse_header("Prueba 12 Masc., 4 x 200m Libre Listado de salida").unwrap();

        assert!(header.is_relay);
        assert_eq!(header.distance, 800);
        assert_eq!(header.relay_size, Some(4));
        assert_eq!(header.stroke, Stroke::Freestyle);
    }

    #[test]
    fn test_first_stroke_keyword_wins() {
        let header = parse_header("Prueba 1 Mixto, 4x50 Estilos Libre").unwrap();
        assert_eq!(header.stroke, Stroke::Medley);
        assert_eq!(header.distance, 200);
    }

    #[test]
    fn test_female_cue_is_not_read_as_male() {
        let header = parse_header("Prueba 2 100m Butterfly Female").unwrap();
        assert_eq!(header.gender, Gender::Female);

        let header = parse_header("Prueba 3 100m Butterfly Male Open").unwrap();
        assert_eq!(header.gender, Gender::Male);
    }

    #[test]
    fn test_defaults_without_keywords() {
        let header = parse_header("Prueba 9 Mixto, Final").unwrap();

        assert_eq!(header.distance, 0);
        assert_eq!(header.stroke, Stroke::Freestyle);
        assert_eq!(header.gender, Gender::Mixed);
        assert_eq!(header.category, "open");
    }

    #[test]
    fn test_category_label() {
        let header = parse_header("Prueba 4 Masc., 100m Braza Infantil").unwrap();
        assert_eq!(header.category, "infantil");
    }

    #[test]
    fn test_missing_description_is_rejected() {
        assert!(parse_header("Prueba 4 Masc., Clasificación 1 X").is_none());
        assert!(parse_header("Resultados 4").is_none());
    }

    #[test]
    fn test_classification_text() {
        let section = "Prueba 1 Fem., 50m Libre Clasificación AN 1 RUIZ, Eva 10 C.N. Uno 30.10";
        assert_eq!(
            classification_text(section),
            Some("1 RUIZ, Eva 10 C.N. Uno 30.10")
        );
        assert_eq!(classification_text("Prueba 1 Fem., 50m Libre"), None);
    }
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SECTION_START: Regex = Regex::new(r"(?i)Prueba\s+\d+").unwrap();
}

/// Collapses every whitespace run (line breaks included) into one space.
pub fn normalize(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Splits normalized text into event sections, each starting at its
/// `Prueba <n>` header. Anything before the first header is dropped.
pub fn split_sections(text: &str) -> Vec<&str> {
    let starts: Vec<usize> = SECTION_START.find_iter(text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            text[start..end].trim()
        })
        .filter(|section| !section.is_empty())
        .collect()
}

/// Registry key for a club: the lowercase name with whitespace runs replaced by
/// hyphens, so "C.N. Albacete" and "c.n.  albacete" resolve to the same club.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClubKey(String);

impl ClubKey {
    pub fn new(club_name: &str) -> Self {
        Self(hyphenate(club_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Registry key for a swimmer: hyphenated name plus birth year.
///
/// A missing birth year is keyed as `0`, so two entries for the same name
/// without a birth year collapse into one swimmer.
///
/// ```
/// use scoring::models::SwimmerKey;
///
/// let key = SwimmerKey::new("GARCIA, Ana", Some(2011));
/// assert_eq!(key.as_str(), "garcia,-ana-2011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwimmerKey(String);

impl SwimmerKey {
    pub fn new(name: &str, birth_year: Option<i32>) -> Self {
        Self(format!("{}-{}", hyphenate(name), birth_year.unwrap_or(0)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn hyphenate(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_key_lowercase_hyphenated() {
        let key = ClubKey::new("C.N. Albacete");
        assert_eq!(key.as_str(), "c.n.-albacete");
    }

    #[test]
    fn test_club_key_collapses_whitespace() {
        assert_eq!(ClubKey::new("C.N.  Albacete "), ClubKey::new("c.n. albacete"));
    }

    #[test]
    fn test_swimmer_key_includes_birth_year() {
        let a = SwimmerKey::new("PEREZ, Juan", Some(2010));
        let b = SwimmerKey::new("PEREZ, Juan", Some(2009));
        assert_ne!(a, b);
    }

    #[test]
    fn test_swimmer_key_missing_birth_year() {
        let key = SwimmerKey::new("PEREZ, Juan", None);
        assert_eq!(key.as_str(), "perez,-juan-0");
    }
}

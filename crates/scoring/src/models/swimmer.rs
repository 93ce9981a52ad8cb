use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Gender;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Swimmer {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_year: Option<i32>,
    pub gender: Gender,
    pub club_id: String,
}

impl Swimmer {
    /// Splits a "LAST, First" name into `(last, first)`.
    pub fn split_name(name: &str) -> (String, String) {
        let mut parts = name.splitn(2, ',');
        let last = parts.next().unwrap_or_default().trim().to_string();
        let first = parts.next().unwrap_or_default().trim().to_string();
        (last, first)
    }

    pub fn age_in(&self, reference_year: i32) -> Option<i32> {
        self.birth_year.map(|year| reference_year - year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_last_first() {
        let (last, first) = Swimmer::split_name("GARCIA LOPEZ, Maria");
        assert_eq!(last, "GARCIA LOPEZ");
        assert_eq!(first, "Maria");
    }

    #[test]
    fn test_split_name_without_comma() {
        let (last, first) = Swimmer::split_name("GARCIA");
        assert_eq!(last, "GARCIA");
        assert_eq!(first, "");
    }
}

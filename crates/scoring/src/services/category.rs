use crate::models::{CategoryConfig, OPEN_CATEGORY};

/// Resolves the age category id for a birth year.
///
/// Birth-year brackets are tried first, then age brackets in configuration
/// order, then the open category. Without a birth year there is nothing to
/// match and the swimmer only takes part in the open ranking.
pub fn category_for_birth_year(
    birth_year: Option<i32>,
    reference_year: i32,
    categories: &[CategoryConfig],
) -> Option<String> {
    let birth_year = birth_year?;
    let age = reference_year - birth_year;

    categories
        .iter()
        .find(|c| c.contains_birth_year(birth_year))
        .or_else(|| categories.iter().find(|c| c.contains_age(age)))
        .map(|c| c.id.clone())
        .or_else(|| Some(OPEN_CATEGORY.to_string()))
}

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;

/// Id of the category every swimmer falls back to.
pub const OPEN_CATEGORY: &str = "open";

/// A complete scoring rulebook. Always replaced whole, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub individual_points: Vec<Decimal>,
    pub relay_points: Vec<Decimal>,
    /// Keyed by `"{legs}x{per_leg_distance}"`, e.g. `4x200`.
    #[serde(default)]
    pub special_relay_points: HashMap<String, Vec<Decimal>>,

    pub max_swimmers_per_club_per_event: Option<u32>,
    #[serde(default = "default_redistribute")]
    pub redistribute_excess_points: bool,

    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
    #[serde(default)]
    pub category_scoring: Vec<CategoryScoringRule>,

    #[serde(default)]
    pub bonus_points: BonusPointConfig,
}

fn default_redistribute() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// Youngest (most recent) birth year of the bracket.
    pub birth_year_start: Option<i32>,
    /// Oldest birth year of the bracket.
    pub birth_year_end: Option<i32>,
}

impl CategoryConfig {
    pub fn contains_birth_year(&self, birth_year: i32) -> bool {
        match (self.birth_year_start, self.birth_year_end) {
            (Some(youngest), Some(oldest)) => birth_year <= youngest && birth_year >= oldest,
            _ => false,
        }
    }

    pub fn contains_age(&self, age: i32) -> bool {
        let min_ok = self.min_age.is_none_or(|min| age >= min);
        let max_ok = self.max_age.is_none_or(|max| age <= max);
        min_ok && max_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScoringRule {
    pub category_id: String,
    pub can_score_in: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BonusPointConfig {
    pub enabled: bool,
    pub regional_best: Decimal,
    pub championship_record: Decimal,
    pub absolute_regional: Decimal,
    pub national_best: Decimal,
}

impl ScoringConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn category(&self, id: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Whether a swimmer of `swimmer_category` may score in the `ranking` ranking.
    /// Categories without a rule are unrestricted.
    pub fn can_score_in(&self, swimmer_category: &str, ranking: &str) -> bool {
        self.category_scoring
            .iter()
            .find(|rule| rule.category_id == swimmer_category)
            .is_none_or(|rule| rule.can_score_in.iter().any(|id| id == ranking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(start: Option<i32>, end: Option<i32>, min: Option<i32>, max: Option<i32>) -> CategoryConfig {
        CategoryConfig {
            id: "c".to_string(),
            name: "c".to_string(),
            display_name: "C".to_string(),
            min_age: min,
            max_age: max,
            birth_year_start: start,
            birth_year_end: end,
        }
    }

    #[test]
    fn test_birth_year_range_is_inclusive() {
        let c = category(Some(2012), Some(2011), None, None);
        assert!(c.contains_birth_year(2012));
        assert!(c.contains_birth_year(2011));
        assert!(!c.contains_birth_year(2010));
        assert!(!c.contains_birth_year(2013));
    }

    #[test]
    fn test_open_bounds_match_any_age() {
        let c = category(None, None, None, None);
        assert!(c.contains_age(8));
        assert!(c.contains_age(80));
        assert!(!c.contains_birth_year(2000));
    }

    #[test]
    fn test_deserialize_camel_case_surface() {
        let json = r#"{
            "id": "custom",
            "name": "Custom",
            "individualPoints": [10, 8, 6],
            "relayPoints": [20, 16],
            "specialRelayPoints": { "4x200": [7, 6] },
            "maxSwimmersPerClubPerEvent": null,
            "categories": [
                { "id": "u14", "minAge": 13, "maxAge": 14, "birthYearStart": null, "birthYearEnd": null }
            ],
            "categoryScoring": [ { "categoryId": "u14", "canScoreIn": ["u14"] } ],
            "bonusPoints": {
                "enabled": false, "regionalBest": 0, "championshipRecord": 0,
                "absoluteRegional": 0, "nationalBest": 0
            }
        }"#;

        let config = ScoringConfig::from_json(json).unwrap();
        assert_eq!(config.individual_points.len(), 3);
        assert_eq!(config.special_relay_points["4x200"], vec![Decimal::from(7), Decimal::from(6)]);
        assert!(config.max_swimmers_per_club_per_event.is_none());
        assert!(config.redistribute_excess_points);
        assert!(!config.can_score_in("u14", OPEN_CATEGORY));
        assert!(config.can_score_in("junior", OPEN_CATEGORY));
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        assert!(ScoringConfig::from_json("{ \"id\": 1 }").is_err());
    }
}

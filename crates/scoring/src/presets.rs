use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::ScoringError;
use crate::models::{
    BonusPointConfig, CategoryConfig, CategoryScoringRule, OPEN_CATEGORY, ScoringConfig,
};

const STANDARD_POINTS: [i64; 16] = [19, 16, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
const STANDARD_RELAY_POINTS: [i64; 16] = [38, 32, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10, 8, 6, 4, 2];
const RELAY_4X200_POINTS: [i64; 7] = [7, 6, 5, 4, 3, 2, 1];

fn scale(values: &[i64]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}

fn category(
    id: &str,
    display_name: &str,
    ages: Option<(i32, i32)>,
    birth_years: Option<(i32, i32)>,
) -> CategoryConfig {
    CategoryConfig {
        id: id.to_string(),
        name: id.to_string(),
        display_name: display_name.to_string(),
        min_age: ages.map(|(min, _)| min),
        max_age: ages.map(|(_, max)| max),
        birth_year_start: birth_years.map(|(youngest, _)| youngest),
        birth_year_end: birth_years.map(|(_, oldest)| oldest),
    }
}

fn rule(category_id: &str, can_score_in: &[&str]) -> CategoryScoringRule {
    CategoryScoringRule {
        category_id: category_id.to_string(),
        can_score_in: can_score_in.iter().map(|s| s.to_string()).collect(),
    }
}

// U14: born 2012-2011, Junior: born 2010-2008, Open: everyone
fn regional_categories() -> Vec<CategoryConfig> {
    vec![
        category("u14", "U14 (Infantil)", Some((13, 14)), Some((2012, 2011))),
        category("junior", "Junior (15-17)", Some((15, 17)), Some((2010, 2008))),
        category(OPEN_CATEGORY, "Open (Absoluto)", None, None),
    ]
}

fn regional_rules() -> Vec<CategoryScoringRule> {
    vec![
        rule("u14", &["u14", OPEN_CATEGORY]),
        rule("junior", &["junior", OPEN_CATEGORY]),
        rule(OPEN_CATEGORY, &[OPEN_CATEGORY]),
    ]
}

fn regional_bonus() -> BonusPointConfig {
    BonusPointConfig {
        enabled: true,
        regional_best: Decimal::from(5),
        championship_record: Decimal::from(10),
        absolute_regional: Decimal::from(15),
        national_best: Decimal::from(25),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    ClmRegional2026,
    OpenScoring,
    NoClubLimits,
}

impl PresetId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClmRegional2026 => "clm-regional-2026",
            Self::OpenScoring => "open-scoring",
            Self::NoClubLimits => "no-club-limits",
        }
    }

    pub fn all() -> &'static [PresetId] {
        &[Self::ClmRegional2026, Self::OpenScoring, Self::NoClubLimits]
    }

    fn parse_str(s: &str) -> Result<Self, ScoringError> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "clm-regional-2026" | "clm" | "regional" => Ok(Self::ClmRegional2026),
            "open-scoring" | "open" => Ok(Self::OpenScoring),
            "no-club-limits" | "unlimited" => Ok(Self::NoClubLimits),
            _ => Err(ScoringError::UnknownPreset(format!(
                "{}. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    fn build(&self) -> ScoringConfig {
        match self {
            Self::ClmRegional2026 => ScoringConfig {
                id: self.as_str().to_string(),
                name: "CLM Regional 2026".to_string(),
                description: Some(
                    "Castilla-La Mancha regional championship 2025/26 rules. Three categories (U14, Junior, Open) with 19,16,14... scoring."
                        .to_string(),
                ),
                individual_points: scale(&STANDARD_POINTS),
                relay_points: scale(&STANDARD_RELAY_POINTS),
                special_relay_points: HashMap::from([(
                    "4x200".to_string(),
                    scale(&RELAY_4X200_POINTS),
                )]),
                max_swimmers_per_club_per_event: Some(2),
                redistribute_excess_points: true,
                categories: regional_categories(),
                category_scoring: regional_rules(),
                bonus_points: regional_bonus(),
            },
            Self::OpenScoring => ScoringConfig {
                id: self.as_str().to_string(),
                name: "Open Scoring".to_string(),
                description: Some("No categories, no age restrictions, just positions".to_string()),
                individual_points: scale(&STANDARD_POINTS),
                relay_points: scale(&STANDARD_RELAY_POINTS),
                special_relay_points: HashMap::new(),
                max_swimmers_per_club_per_event: Some(2),
                redistribute_excess_points: true,
                categories: vec![category(OPEN_CATEGORY, "Open", None, None)],
                category_scoring: vec![rule(OPEN_CATEGORY, &[OPEN_CATEGORY])],
                bonus_points: BonusPointConfig::default(),
            },
            Self::NoClubLimits => ScoringConfig {
                id: self.as_str().to_string(),
                name: "No Club Limits".to_string(),
                description: Some("All swimmers score regardless of club count".to_string()),
                individual_points: scale(&STANDARD_POINTS),
                relay_points: scale(&STANDARD_RELAY_POINTS),
                special_relay_points: HashMap::new(),
                max_swimmers_per_club_per_event: None,
                redistribute_excess_points: false,
                categories: regional_categories(),
                category_scoring: regional_rules(),
                bonus_points: regional_bonus(),
            },
        }
    }
}

impl TryFrom<&str> for PresetId {
    type Error = ScoringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for PresetId {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Predefined scoring rulebooks, handed out as whole owned configs.
pub struct PresetRegistry {
    presets: HashMap<PresetId, ScoringConfig>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            presets: HashMap::new(),
        };

        for id in PresetId::all() {
            registry.register(*id, id.build());
        }

        registry
    }

    fn register(&mut self, id: PresetId, config: ScoringConfig) {
        self.presets.insert(id, config);
    }

    pub fn get(&self, id: PresetId) -> Option<ScoringConfig> {
        self.presets.get(&id).cloned()
    }

    pub fn get_by_name(&self, name: &str) -> crate::Result<ScoringConfig> {
        let id: PresetId = name.parse()?;
        self.get(id)
            .ok_or_else(|| ScoringError::UnknownPreset(name.to_string()))
    }

    /// Ids in declaration order.
    pub fn list_presets(&self) -> Vec<PresetId> {
        PresetId::all()
            .iter()
            .copied()
            .filter(|id| self.presets.contains_key(id))
            .collect()
    }

    pub fn default_config(&self) -> ScoringConfig {
        PresetId::ClmRegional2026.build()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

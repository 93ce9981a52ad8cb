use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EventResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
    Medley,
}

impl Stroke {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Freestyle => "freestyle",
            Self::Backstroke => "backstroke",
            Self::Breaststroke => "breaststroke",
            Self::Butterfly => "butterfly",
            Self::Medley => "medley",
        }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maximum times (in seconds) required to score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QualifyingTimes {
    pub open: Option<Decimal>,
    #[serde(default)]
    pub by_age: BTreeMap<i32, Decimal>,
}

impl QualifyingTimes {
    pub fn for_age(&self, age: i32) -> Option<Decimal> {
        self.by_age.get(&age).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_none() && self.by_age.is_empty()
    }
}

/// Record marks attached to an event, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventRecords {
    pub regional: Option<Decimal>,
    pub championship: Option<Decimal>,
    pub national: Option<Decimal>,
    #[serde(default)]
    pub age_bests: BTreeMap<i32, Decimal>,
}

impl EventRecords {
    pub fn is_empty(&self) -> bool {
        self.regional.is_none()
            && self.championship.is_none()
            && self.national.is_none()
            && self.age_bests.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: String,
    pub number: u32,
    pub distance: u32,
    pub stroke: Stroke,
    pub gender: Gender,
    pub category: String,
    pub is_relay: bool,
    pub relay_size: Option<u32>,
    pub qualifying_times: Option<QualifyingTimes>,
    pub records: Option<EventRecords>,
    pub results: Vec<EventResult>,
}

impl Event {
    pub const DEFAULT_RELAY_SIZE: u32 = 4;

    pub fn display_name(&self) -> String {
        format!("{}m {}", self.distance, self.stroke)
    }

    /// Key into the special relay point tables, e.g. `4x200`.
    pub fn relay_key(&self) -> String {
        let legs = self.relay_size.unwrap_or(Self::DEFAULT_RELAY_SIZE).max(1);
        format!("{}x{}", legs, self.distance / legs)
    }
}

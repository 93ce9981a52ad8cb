use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Club, Swimmer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum CourseType {
    /// 25m pool
    #[default]
    #[serde(rename = "S")]
    Short,
    /// 50m pool
    #[serde(rename = "L")]
    Long,
}

impl CourseType {
    pub fn from_letter(letter: &str) -> Self {
        if letter.eq_ignore_ascii_case("L") {
            Self::Long
        } else {
            Self::Short
        }
    }
}

/// Why a result did or did not score in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusReason {
    Ok,
    TimeLimit,
    ClubLimit,
    CategoryRule,
    Dq,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventResult {
    /// Computed rank; equals `declared_position` until the event is scored.
    pub position: u32,
    pub declared_position: u32,
    pub swimmer: Option<Arc<Swimmer>>,
    pub relay_team_number: Option<u32>,
    pub club: Arc<Club>,
    pub time: String,
    /// Comparison value after virtual-time adjustment.
    pub time_in_seconds: Decimal,
    pub open_points: Decimal,
    pub category_points: Decimal,
    pub bonus_points: Decimal,
    pub swimmer_category: Option<String>,
    pub open_eligible: bool,
    pub category_eligible: bool,
    pub open_status: Option<StatusReason>,
    pub category_status: Option<StatusReason>,
    pub disqualified: bool,
    pub course_type: CourseType,
}

impl EventResult {
    pub fn new(
        declared_position: u32,
        club: Arc<Club>,
        swimmer: Option<Arc<Swimmer>>,
        time: impl Into<String>,
        time_in_seconds: Decimal,
    ) -> Self {
        Self {
            position: declared_position,
            declared_position,
            swimmer,
            relay_team_number: None,
            club,
            time: time.into(),
            time_in_seconds,
            open_points: Decimal::ZERO,
            category_points: Decimal::ZERO,
            bonus_points: Decimal::ZERO,
            swimmer_category: None,
            open_eligible: false,
            category_eligible: false,
            open_status: None,
            category_status: None,
            disqualified: false,
            course_type: CourseType::default(),
        }
    }

    pub fn total_points(&self) -> Decimal {
        self.open_points + self.category_points + self.bonus_points
    }

    /// Drops every value a scoring run derives, keeping the parsed fields.
    pub fn unscored(&self) -> Self {
        Self {
            position: self.declared_position,
            open_points: Decimal::ZERO,
            category_points: Decimal::ZERO,
            bonus_points: Decimal::ZERO,
            swimmer_category: None,
            open_eligible: false,
            category_eligible: false,
            open_status: None,
            category_status: None,
            ..self.clone()
        }
    }
}

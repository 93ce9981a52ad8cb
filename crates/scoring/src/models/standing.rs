use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Club, Swimmer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClubStanding {
    pub club: Arc<Club>,
    pub total_points: Decimal,
    pub individual_points: Decimal,
    pub relay_points: Decimal,
    pub bonus_points: Decimal,
    pub gold_medals: u32,
    pub silver_medals: u32,
    pub bronze_medals: u32,
    pub swimmer_count: u32,
    pub event_count: u32,
}

impl ClubStanding {
    pub fn new(club: Arc<Club>) -> Self {
        Self {
            club,
            total_points: Decimal::ZERO,
            individual_points: Decimal::ZERO,
            relay_points: Decimal::ZERO,
            bonus_points: Decimal::ZERO,
            gold_medals: 0,
            silver_medals: 0,
            bronze_medals: 0,
            swimmer_count: 0,
            event_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SwimmerEventSummary {
    pub event_id: String,
    pub event_name: String,
    pub position: u32,
    pub points: Decimal,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SwimmerStanding {
    pub swimmer: Arc<Swimmer>,
    pub club: Arc<Club>,
    pub category: Option<String>,
    pub total_points: Decimal,
    pub open_points: Decimal,
    pub category_points: Decimal,
    pub bonus_points: Decimal,
    pub gold_medals: u32,
    pub silver_medals: u32,
    pub bronze_medals: u32,
    pub event_count: u32,
    /// Mean of the positions declared in the source document.
    pub average_position: Decimal,
    pub events: Vec<SwimmerEventSummary>,
}

impl SwimmerStanding {
    pub fn new(swimmer: Arc<Swimmer>, club: Arc<Club>) -> Self {
        Self {
            swimmer,
            club,
            category: None,
            total_points: Decimal::ZERO,
            open_points: Decimal::ZERO,
            category_points: Decimal::ZERO,
            bonus_points: Decimal::ZERO,
            gold_medals: 0,
            silver_medals: 0,
            bronze_medals: 0,
            event_count: 0,
            average_position: Decimal::ZERO,
            events: Vec::new(),
        }
    }
}

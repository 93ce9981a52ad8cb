mod club;
mod event;
mod meet;
mod normalized_name;
mod race_time;
mod result;
mod scoring_config;
mod standing;
mod swimmer;

pub use club::Club;
pub use event::{Event, EventRecords, Gender, QualifyingTimes, Stroke};
pub use meet::{Meet, ScoredMeet};
pub use normalized_name::{ClubKey, SwimmerKey};
pub use race_time::{format_seconds, parse_time_to_seconds};
pub use result::{CourseType, EventResult, StatusReason};
pub use scoring_config::{
    BonusPointConfig, CategoryConfig, CategoryScoringRule, OPEN_CATEGORY, ScoringConfig,
};
pub use standing::{ClubStanding, SwimmerEventSummary, SwimmerStanding};
pub use swimmer::Swimmer;

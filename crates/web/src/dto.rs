use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Text already extracted from the results document.
    #[validate(length(min = 1, max = 5_000_000))]
    pub text: String,
    #[validate(range(min = 1900, max = 2100))]
    pub reference_year: Option<i32>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetSummaryResponse {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub scoring_config_id: String,
    pub reference_year: i32,
    pub event_count: usize,
    pub result_count: usize,
    pub club_count: usize,
    pub swimmer_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

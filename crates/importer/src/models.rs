use scoring::models::{CourseType, EventRecords, Gender, QualifyingTimes, Stroke};
use serde::{Deserialize, Serialize};

/// One entry line as read from the results text, before identities are
/// resolved or times are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEntry {
    pub position: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    pub club_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_number: Option<u32>,
    pub time: String,
    #[serde(default)]
    pub course_type: CourseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ParsedEntry {
    pub fn individual(
        position: u32,
        name: impl Into<String>,
        birth_year: Option<i32>,
        club_name: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: Some(name.into()),
            birth_year,
            club_name: club_name.into(),
            team_number: None,
            time: time.into(),
            course_type: CourseType::default(),
            date: None,
        }
    }

    pub fn relay(
        position: u32,
        club_name: impl Into<String>,
        team_number: u32,
        time: impl Into<String>,
    ) -> Self {
        Self {
            position,
            name: None,
            birth_year: None,
            club_name: club_name.into(),
            team_number: Some(team_number),
            time: time.into(),
            course_type: CourseType::default(),
            date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEvent {
    pub event_number: u32,
    pub event_name: String,
    pub distance: u32,
    pub stroke: Stroke,
    pub gender: Gender,
    pub category: String,
    pub is_relay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifying_times: Option<QualifyingTimes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<EventRecords>,
    pub entries: Vec<ParsedEntry>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub short_name: String,
}

impl Club {
    /// Short names keep the first four words of the club name.
    pub fn short_name_of(name: &str) -> String {
        name.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
    }
}

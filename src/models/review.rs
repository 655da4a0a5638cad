use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Review {
    pub id: String,
    pub place_id: String,
    pub relative_publish_time_description: String,
    pub rating: i32,
    pub text: String,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        place_id: impl Into<String>,
        relative_publish_time_description: impl Into<String>,
        rating: i32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            place_id: place_id.into(),
            relative_publish_time_description: relative_publish_time_description.into(),
            rating,
            text: text.into(),
        }
    }
}

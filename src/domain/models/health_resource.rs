use serde::{Deserialize, Serialize};

/// Topics offered as one-click searches.
pub const PRESET_TOPICS: [&str; 5] = [
    "Diabetes Management",
    "Heart Health",
    "Stress & Anxiety",
    "Seasonal Flu",
    "Nutrition Basics",
];

/// One search result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResource {
    pub topic: String,
    pub summary: String,
    pub key_advice: Vec<String>,
    pub related_tags: Vec<String>,
}

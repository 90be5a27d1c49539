use serde::{Deserialize, Serialize};

fn default_travel_pace() -> String {
    "Relaxed".to_string()
}

/// Trip preferences collected by the planner form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub destination: String,
    pub trip_length_days: u32,
    #[serde(default = "default_travel_pace")]
    pub travel_pace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_travelers: Option<u32>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_level: Option<String>,
}

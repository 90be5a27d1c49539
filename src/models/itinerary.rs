use serde::{Deserialize, Serialize};

/// A single scheduled activity within a day. The generation collaborator is
/// contractually required to fill `name`, `description` and
/// `accessibility_note`; an empty accessibility note is tolerated downstream
/// and rendered as an absent annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub accessibility_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub day: u32,
    pub title: String,
    pub morning_activity: Activity,
    pub afternoon_activity: Activity,
    pub evening_suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_recommendations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation_tips: Option<String>,
}

/// The structured trip plan returned by the generation collaborator.
/// Immutable once produced; a new plan request always yields a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub trip_title: String,
    pub summary: String,
    pub daily_plan: Vec<DailyPlan>,
}

impl Itinerary {
    pub fn total_days(&self) -> u32 {
        self.daily_plan.len() as u32
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::itinerary::Itinerary;

/// One planning session: a generated itinerary held in memory until the user
/// resets or the TTL sweep discards it. The only mutation a session ever
/// sees is the `unlocked` flag flipping to true after payment confirmation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningSession {
    pub id: Uuid,
    pub itinerary: Itinerary,
    pub unlocked: bool,
    pub created_at: DateTime<Utc>,
}

impl PlanningSession {
    pub fn new(itinerary: Itinerary) -> Self {
        Self {
            id: Uuid::new_v4(),
            itinerary,
            unlocked: false,
            created_at: Utc::now(),
        }
    }
}

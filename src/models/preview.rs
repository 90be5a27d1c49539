use serde::Serialize;
use uuid::Uuid;

use crate::models::itinerary::DailyPlan;
use crate::models::session::PlanningSession;
use crate::services::preview_service::PreviewPartition;

/// Placeholder for a day the user has not paid to see. Carries only the day
/// number so the UI can render a locked card in the right position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedDay {
    pub day: u32,
    pub locked: bool,
}

/// The preview-gated view of a planning session handed to the UI: visible
/// days in full, the remaining suffix as locked stubs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPreview {
    pub session_id: Uuid,
    pub trip_title: String,
    pub summary: String,
    pub total_days: u32,
    pub unlocked: bool,
    pub visible_days: Vec<DailyPlan>,
    pub locked_days: Vec<LockedDay>,
}

impl ItineraryPreview {
    pub fn from_session(session: &PlanningSession, partition: &PreviewPartition) -> Self {
        let visible_count = partition.visible.len();
        let visible_days: Vec<DailyPlan> = session
            .itinerary
            .daily_plan
            .iter()
            .take(visible_count)
            .cloned()
            .collect();
        let locked_days: Vec<LockedDay> = session
            .itinerary
            .daily_plan
            .iter()
            .skip(visible_count)
            .map(|plan| LockedDay {
                day: plan.day,
                locked: true,
            })
            .collect();

        Self {
            session_id: session.id,
            trip_title: session.itinerary.trip_title.clone(),
            summary: session.itinerary.summary.clone(),
            total_days: session.itinerary.total_days(),
            unlocked: session.unlocked,
            visible_days,
            locked_days,
        }
    }
}

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::models::itinerary::Itinerary;
use crate::models::plan::PlanRequest;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ContentPart>>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

/// Client for the generative-AI collaborator that produces itineraries.
/// The contract is narrow: send a structured prompt, receive a structured
/// Itinerary or a single failure. Retry policy lives with the caller's UI.
pub struct GenerationClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GenerationClient {
    pub fn new(api_key: String, model: String) -> Result<Self, Box<dyn std::error::Error>> {
        if api_key.is_empty() {
            return Err("GEMINI_API_KEY must not be empty".into());
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            model,
        })
    }

    /// Generate a new itinerary for the given trip preferences.
    pub async fn generate_itinerary(
        &self,
        request: &PlanRequest,
    ) -> Result<Itinerary, Box<dyn std::error::Error>> {
        let prompt = build_prompt(request);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": itinerary_response_schema(),
            }
        });

        println!(
            "Requesting a {}-day itinerary for '{}' from model {}",
            request.trip_length_days, request.destination, self.model
        );

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            eprintln!("Generation request failed with {}: {}", status, detail);
            return Err(format!("generation service returned {}", status).into());
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = first_candidate_text(&parsed)
            .ok_or("generation service returned an empty response")?;
        let itinerary: Itinerary = serde_json::from_str(text)
            .map_err(|e| format!("generation service returned a malformed itinerary: {}", e))?;

        validate_itinerary(&itinerary, request.trip_length_days)?;
        Ok(itinerary)
    }
}

/// Build the generation prompt from the planner form fields.
pub fn build_prompt(request: &PlanRequest) -> String {
    let mut parts = vec![format!(
        "Plan a {}-day trip to {} with a {} travel pace.",
        request.trip_length_days,
        request.destination,
        request.travel_pace.to_lowercase()
    )];

    if let Some(travelers) = request.number_of_travelers {
        parts.push(format!("The group has {} travelers.", travelers));
    }
    if let Some(season) = &request.season {
        parts.push(format!("The trip takes place in {}.", season.to_lowercase()));
    }
    if !request.interests.is_empty() {
        parts.push(format!("Focus on {}.", request.interests.join(", ")));
    }
    if let Some(budget) = &request.budget_level {
        parts.push(format!("The budget level is {}.", budget.to_lowercase()));
    }

    parts.push(
        "Favor an unhurried pace with one activity each morning and afternoon, \
         and include an accessibility note for every activity."
            .to_string(),
    );
    parts.join(" ")
}

fn first_candidate_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .as_ref()?
        .first()?
        .text
        .as_deref()
}

/// Data-contract checks on what the generation collaborator sent back. The
/// layout and preview cores assume these hold; violations are rejected here
/// at the integration boundary.
pub fn validate_itinerary(itinerary: &Itinerary, expected_days: u32) -> Result<(), String> {
    if itinerary.total_days() != expected_days {
        return Err(format!(
            "expected {} days, generation returned {}",
            expected_days,
            itinerary.total_days()
        ));
    }

    for (index, plan) in itinerary.daily_plan.iter().enumerate() {
        let expected_day = index as u32 + 1;
        if plan.day != expected_day {
            return Err(format!(
                "day numbers must be consecutive starting at 1, found {} at position {}",
                plan.day, expected_day
            ));
        }
        for activity in [&plan.morning_activity, &plan.afternoon_activity] {
            if activity.name.trim().is_empty() || activity.description.trim().is_empty() {
                return Err(format!(
                    "day {}: activity is missing a name or description",
                    plan.day
                ));
            }
        }
    }

    Ok(())
}

fn activity_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "description": { "type": "STRING" },
            "accessibilityNote": { "type": "STRING" },
            "estimatedCost": { "type": "STRING" },
            "duration": { "type": "STRING" }
        },
        "required": ["name", "description", "accessibilityNote"]
    })
}

fn itinerary_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tripTitle": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "dailyPlan": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "INTEGER" },
                        "title": { "type": "STRING" },
                        "morningActivity": activity_schema(),
                        "afternoonActivity": activity_schema(),
                        "eveningSuggestion": { "type": "STRING" },
                        "restaurantRecommendations": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        },
                        "transportationTips": { "type": "STRING" }
                    },
                    "required": [
                        "day",
                        "title",
                        "morningActivity",
                        "afternoonActivity",
                        "eveningSuggestion"
                    ]
                }
            }
        },
        "required": ["tripTitle", "summary", "dailyPlan"]
    })
}

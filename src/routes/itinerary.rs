use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::db::sessions::SessionStore;
use crate::models::plan::PlanRequest;
use crate::models::preview::ItineraryPreview;
use crate::services::itinerary_generation_service::GenerationClient;
use crate::services::pdf_layout_service::{export_filename, Page, PdfLayoutService};
use crate::services::preview_service;

const MAX_TRIP_LENGTH_DAYS: u32 = 14;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub filename: String,
    pub page_count: usize,
    pub pages: Vec<Page>,
}

fn preview_response(session: &crate::models::session::PlanningSession) -> HttpResponse {
    let partition =
        preview_service::partition_days(session.itinerary.total_days(), session.unlocked);
    HttpResponse::Ok().json(ItineraryPreview::from_session(session, &partition))
}

/// Generate a fresh itinerary and open a new planning session around it.
pub async fn plan(
    store: web::Data<Arc<SessionStore>>,
    generator: web::Data<GenerationClient>,
    input: web::Json<PlanRequest>,
) -> impl Responder {
    let request = input.into_inner();

    if request.destination.trim().is_empty() {
        return HttpResponse::BadRequest().body("Destination is required");
    }
    if request.trip_length_days == 0 || request.trip_length_days > MAX_TRIP_LENGTH_DAYS {
        return HttpResponse::BadRequest().body(format!(
            "Trip length must be between 1 and {} days",
            MAX_TRIP_LENGTH_DAYS
        ));
    }

    match generator.generate_itinerary(&request).await {
        Ok(itinerary) => {
            let session = store.insert(itinerary);
            println!(
                "Created planning session {} for '{}'",
                session.id, request.destination
            );
            preview_response(&session)
        }
        Err(e) => {
            eprintln!("Failed to generate itinerary: {}", e);
            HttpResponse::InternalServerError()
                .body("Failed to generate itinerary. Try rephrasing your request.")
        }
    }
}

/// The preview-gated view of an existing planning session.
pub async fn get_by_id(
    store: web::Data<Arc<SessionStore>>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid session id"),
    };

    match store.get(&id) {
        Some(session) => preview_response(&session),
        None => HttpResponse::NotFound().body("Planning session not found"),
    }
}

/// "Start Over": discard the session and its itinerary.
pub async fn discard(
    store: web::Data<Arc<SessionStore>>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid session id"),
    };

    if store.remove(&id) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().body("Planning session not found")
    }
}

/// The full paginated layout document for the PDF renderer, gated behind
/// the unlock.
pub async fn export(
    store: web::Data<Arc<SessionStore>>,
    layout: web::Data<PdfLayoutService>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid session id"),
    };

    match store.get(&id) {
        Some(session) if session.unlocked => {
            let pages = layout.layout(&session.itinerary);
            let filename =
                export_filename(&session.itinerary.trip_title, Utc::now().date_naive());
            HttpResponse::Ok().json(ExportDocument {
                filename,
                page_count: pages.len(),
                pages,
            })
        }
        Some(_) => {
            HttpResponse::PaymentRequired().body("Unlock the full itinerary to export the PDF")
        }
        None => HttpResponse::NotFound().body("Planning session not found"),
    }
}

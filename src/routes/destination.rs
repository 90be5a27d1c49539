use actix_web::{web, HttpResponse, Responder};

use crate::services::suggestion_service::{DestinationCatalog, DEFAULT_SUGGESTION_LIMIT};

const MAX_SUGGESTION_LIMIT: usize = 20;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    q: Option<String>,
    limit: Option<usize>,
}

/// Autocomplete for the destination field: ranked matches against the
/// static catalog, best first. An empty query is a valid request with an
/// empty answer.
pub async fn suggest(
    catalog: web::Data<DestinationCatalog>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let query = params.q.as_deref().unwrap_or("");
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SUGGESTION_LIMIT)
        .min(MAX_SUGGESTION_LIMIT);

    HttpResponse::Ok().json(catalog.suggest(query, limit))
}

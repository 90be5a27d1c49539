use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::db::sessions::SessionStore;
use crate::services::suggestion_service::DestinationCatalog;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

fn check_env_key(name: &str) -> ServiceStatus {
    match env::var(name) {
        Ok(value) if !value.is_empty() => ServiceStatus {
            status: "configured".to_string(),
            details: None,
        },
        _ => ServiceStatus {
            status: "missing".to_string(),
            details: Some(format!("{} not set", name)),
        },
    }
}

pub async fn health_check(
    store: web::Data<Arc<SessionStore>>,
    catalog: web::Data<DestinationCatalog>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("gemini".to_string(), check_env_key("GEMINI_API_KEY"));
    health
        .services
        .insert("stripe".to_string(), check_env_key("STRIPE_SECRET_KEY"));
    health.services.insert(
        "sessions".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} active", store.len())),
        },
    );
    health.services.insert(
        "catalog".to_string(),
        if catalog.is_empty() {
            ServiceStatus {
                status: "empty".to_string(),
                details: Some("no destinations loaded".to_string()),
            }
        } else {
            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!("{} destinations", catalog.len())),
            }
        },
    );

    if health
        .services
        .values()
        .any(|s| s.status == "missing" || s.status == "empty")
    {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

use std::env;

use url::Url;

use crate::services::itinerary_generation_service::DEFAULT_GEMINI_MODEL;

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000/";
const DEFAULT_SESSION_TTL_MINUTES: i64 = 120;
const DEFAULT_UNLOCK_PRICE_CENTS: i64 = 2500; // $25

/// Process configuration, read from the environment once at startup and
/// passed into the collaborators that need it. The core functions stay
/// configuration-free.
#[derive(Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
    pub public_base_url: Url,
    pub catalog_path: Option<String>,
    pub session_ttl_minutes: i64,
    pub unlock_price_cents: i64,
    pub allowed_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY must be set")?;
        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")
            .map_err(|_| "STRIPE_SECRET_KEY must be set")?;
        let stripe_webhook_secret = env::var("STRIPE_WEBHOOK_SECRET").unwrap_or_default();
        if stripe_webhook_secret.is_empty() {
            eprintln!("WARNING: STRIPE_WEBHOOK_SECRET not set; webhook unlocks will be rejected");
        }

        let public_base_url = Url::parse(
            &env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()),
        )
        .map_err(|e| format!("PUBLIC_BASE_URL is not a valid URL: {}", e))?;

        Ok(Self {
            gemini_api_key,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            stripe_secret_key,
            stripe_webhook_secret,
            public_base_url,
            catalog_path: env::var("DESTINATION_CATALOG_PATH").ok(),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TTL_MINUTES),
            unlock_price_cents: env::var("UNLOCK_PRICE_CENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_UNLOCK_PRICE_CENTS),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok(),
        })
    }
}

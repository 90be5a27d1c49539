use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

mod config;
mod db;
mod models;
mod routes;
mod services;

use config::AppConfig;
use db::sessions::SessionStore;
use routes::payment::StripeConfig;
use services::itinerary_generation_service::GenerationClient;
use services::pdf_layout_service::PdfLayoutService;
use services::stripe::checkout::CheckoutService;
use services::suggestion_service::DestinationCatalog;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let config = AppConfig::from_env().expect("Configuration error");

    let catalog = web::Data::new(DestinationCatalog::load(config.catalog_path.as_deref()));
    println!("Destination catalog ready with {} entries", catalog.len());

    let generator = web::Data::new(
        GenerationClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
            .expect("Failed to create generation client"),
    );
    let layout = web::Data::new(PdfLayoutService::new());
    let checkout = web::Data::new(CheckoutService::new(
        &config.stripe_secret_key,
        config.public_base_url.clone(),
        config.unlock_price_cents,
    ));
    let stripe_config = web::Data::new(StripeConfig {
        webhook_secret: config.stripe_webhook_secret.clone(),
    });
    let store = web::Data::new(Arc::new(SessionStore::new(config.session_ttl_minutes)));

    let allowed_origin = config.allowed_origin.clone();

    println!("Attempting to bind to {}:{}", host, port);
    println!("Starting HTTP server...");

    HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(store.clone())
            .app_data(catalog.clone())
            .app_data(generator.clone())
            .app_data(layout.clone())
            .app_data(checkout.clone())
            .app_data(stripe_config.clone())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/destinations/suggest",
                        web::get().to(routes::destination::suggest),
                    )
                    .route(
                        "/payment/webhook",
                        web::post().to(routes::payment::handle_stripe_webhook),
                    )
                    .service(
                        web::scope("/itineraries")
                            .route("/plan", web::post().to(routes::itinerary::plan))
                            .route("/{id}", web::get().to(routes::itinerary::get_by_id))
                            .route("/{id}", web::delete().to(routes::itinerary::discard))
                            .route("/{id}/export", web::get().to(routes::itinerary::export))
                            .route(
                                "/{id}/checkout",
                                web::post().to(routes::payment::create_checkout),
                            )
                            .route(
                                "/{id}/unlock",
                                web::get().to(routes::payment::verify_unlock),
                            ),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use stripe::{EventObject, EventType, Webhook};
use uuid::Uuid;

use crate::db::sessions::SessionStore;
use crate::services::stripe::checkout::{CheckoutService, PLAN_SESSION_METADATA_KEY};

#[derive(Clone)]
pub struct StripeConfig {
    pub webhook_secret: String,
}

#[derive(serde::Deserialize)]
pub struct UnlockParams {
    checkout_session_id: String,
}

/// Start the payment flow: create a Stripe Checkout Session for the unlock
/// and hand its id/url back to the UI for the redirect.
pub async fn create_checkout(
    store: web::Data<Arc<SessionStore>>,
    checkout: web::Data<CheckoutService>,
    path: web::Path<String>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid session id"),
    };

    let session = match store.get(&id) {
        Some(session) => session,
        None => return HttpResponse::NotFound().body("Planning session not found"),
    };
    if session.unlocked {
        return HttpResponse::BadRequest().body("Itinerary is already unlocked");
    }

    println!("Creating checkout session for planning session {}", id);
    match checkout.create_unlock_session(id).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            eprintln!("Error creating checkout session: {:?}", e);
            HttpResponse::InternalServerError()
                .body("Failed to initiate payment. Please try again.")
        }
    }
}

/// Success-redirect unlock path: the UI comes back with the Checkout
/// Session id and we confirm payment directly with Stripe.
pub async fn verify_unlock(
    store: web::Data<Arc<SessionStore>>,
    checkout: web::Data<CheckoutService>,
    path: web::Path<String>,
    params: web::Query<UnlockParams>,
) -> impl Responder {
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid session id"),
    };

    match checkout.verify_paid_session(&params.checkout_session_id).await {
        Ok(Some(paid_session_id)) if paid_session_id == id => {
            let unlocked = store.unlock(&id);
            if unlocked {
                println!("Unlocked planning session {} after payment", id);
            }
            HttpResponse::Ok().json(serde_json::json!({ "unlocked": unlocked }))
        }
        Ok(Some(_)) => {
            HttpResponse::BadRequest().body("Payment belongs to a different planning session")
        }
        Ok(None) => HttpResponse::Ok().json(serde_json::json!({ "unlocked": false })),
        Err(e) => {
            eprintln!("Error verifying checkout session: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to verify payment")
        }
    }
}

/// Webhook unlock path: Stripe tells us the checkout completed.
pub async fn handle_stripe_webhook(
    req: HttpRequest,
    payload: web::Bytes,
    stripe_config: web::Data<StripeConfig>,
    store: web::Data<Arc<SessionStore>>,
) -> impl Responder {
    let signature = match req.headers().get("stripe-signature") {
        Some(sig) => sig.to_str().unwrap_or(""),
        None => {
            return HttpResponse::BadRequest().body("Missing stripe-signature header");
        }
    };

    let payload_str = match String::from_utf8(payload.to_vec()) {
        Ok(s) => s,
        Err(_) => {
            return HttpResponse::BadRequest().body("Invalid payload encoding");
        }
    };

    let event =
        match Webhook::construct_event(&payload_str, signature, &stripe_config.webhook_secret) {
            Ok(event) => event,
            Err(e) => {
                eprintln!("Webhook error: {:?}", e);
                return HttpResponse::BadRequest().body(format!("Webhook error: {}", e));
            }
        };

    match event.type_ {
        EventType::CheckoutSessionCompleted => {
            if let EventObject::CheckoutSession(session) = event.data.object {
                let plan_session_id = session
                    .metadata
                    .as_ref()
                    .and_then(|m| m.get(PLAN_SESSION_METADATA_KEY))
                    .and_then(|raw| Uuid::parse_str(raw).ok());

                match plan_session_id {
                    Some(id) => {
                        if store.unlock(&id) {
                            println!("Unlocked planning session {} via webhook", id);
                        } else {
                            eprintln!("Webhook unlock for unknown planning session {}", id);
                        }
                    }
                    None => {
                        eprintln!("Completed checkout session {} has no planning session metadata", session.id);
                    }
                }
                HttpResponse::Ok().json(serde_json::json!({ "received": true }))
            } else {
                HttpResponse::BadRequest().body("Invalid checkout session object")
            }
        }

        _ => {
            println!("Unhandled event type: {:?}", event.type_);
            HttpResponse::Ok().json(serde_json::json!({ "received": true }))
        }
    }
}

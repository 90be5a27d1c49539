use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use stripe::{
    CheckoutSession, CheckoutSessionId, CheckoutSessionMode, CheckoutSessionPaymentStatus,
    CreateCheckoutSession, CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, Currency,
};
use url::Url;
use uuid::Uuid;

pub const UNLOCK_PRODUCT_NAME: &str = "Unrushed Europe Full Itinerary PDF";
pub const PLAN_SESSION_METADATA_KEY: &str = "plan_session_id";

/// What the UI needs to hand the user over to Stripe Checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub id: String,
    pub url: Option<String>,
}

/// Creates and verifies Stripe Checkout Sessions for the itinerary unlock.
/// The planning-session id rides along in the Checkout Session metadata so
/// both unlock paths (webhook and verify) can find their way back.
pub struct CheckoutService {
    client: stripe::Client,
    public_base_url: Url,
    unlock_price_cents: i64,
}

impl CheckoutService {
    pub fn new(secret_key: &str, public_base_url: Url, unlock_price_cents: i64) -> Self {
        Self {
            client: stripe::Client::new(secret_key),
            public_base_url,
            unlock_price_cents,
        }
    }

    /// Create a Checkout Session for unlocking the given planning session.
    pub async fn create_unlock_session(
        &self,
        plan_session_id: Uuid,
    ) -> Result<CheckoutSummary, Box<dyn std::error::Error>> {
        let success_url = format!(
            "{}?success=true&checkout_session_id={{CHECKOUT_SESSION_ID}}",
            self.public_base_url
        );
        let cancel_url = format!("{}?canceled=true", self.public_base_url);

        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Payment);
        params.success_url = Some(&success_url);
        params.cancel_url = Some(&cancel_url);
        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::USD,
                unit_amount: Some(self.unlock_price_cents),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: UNLOCK_PRODUCT_NAME.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);
        params.metadata = Some(HashMap::from([(
            PLAN_SESSION_METADATA_KEY.to_string(),
            plan_session_id.to_string(),
        )]));

        let session = CheckoutSession::create(&self.client, params).await?;
        Ok(CheckoutSummary {
            id: session.id.to_string(),
            url: session.url,
        })
    }

    /// Retrieve a Checkout Session and, when it has been paid, return the
    /// planning-session id from its metadata. An unpaid session yields
    /// `Ok(None)`.
    pub async fn verify_paid_session(
        &self,
        checkout_session_id: &str,
    ) -> Result<Option<Uuid>, Box<dyn std::error::Error>> {
        let id = CheckoutSessionId::from_str(checkout_session_id)?;
        let session = CheckoutSession::retrieve(&self.client, &id, &[]).await?;

        if session.payment_status != CheckoutSessionPaymentStatus::Paid {
            return Ok(None);
        }

        let plan_session_id = session
            .metadata
            .as_ref()
            .and_then(|m| m.get(PLAN_SESSION_METADATA_KEY))
            .ok_or("paid checkout session has no planning session attached")?;
        Ok(Some(Uuid::parse_str(plan_session_id)?))
    }
}

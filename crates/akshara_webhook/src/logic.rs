// --- File: crates/akshara_webhook/src/logic.rs ---

use akshara_common::http;
use akshara_common::services::BookingSubmission;
use akshara_config::WebhookConfig;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info, warn};

/// Fixed source tag stamped on every booking payload.
pub const BOOKING_SOURCE: &str = "website_booking_modal";

/// The JSON body posted to the automation webhook: the submission fields
/// plus the submission timestamp and the fixed source tag. The flattened
/// layout keeps the wire format identical to what the downstream
/// automation already consumes.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWebhookPayload {
    #[serde(flatten)]
    pub booking: BookingSubmission,
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub source: String,
}

impl BookingWebhookPayload {
    pub fn new(booking: BookingSubmission) -> Self {
        Self {
            booking,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: BOOKING_SOURCE.to_string(),
        }
    }
}

/// Posts a booking to the automation webhook.
///
/// The endpoint may be offline or answer with a non-success status; per
/// the site's documented contract every transport outcome resolves to
/// `true`. Non-success outcomes are logged so operators can see them,
/// but the caller never does. Get product sign-off before surfacing
/// failures here.
pub async fn submit_booking(config: &WebhookConfig, booking: BookingSubmission) -> bool {
    let payload = BookingWebhookPayload::new(booking);
    info!(
        "[Webhook] Posting booking for {} to {}",
        payload.booking.email, config.booking_url
    );

    match http::post(&config.booking_url, &payload).await {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            warn!(
                "[Webhook] Booking endpoint returned {}, continuing as success",
                response.status()
            );
            true
        }
        Err(err) => {
            error!("[Webhook] Booking submission error: {}", err);
            true
        }
    }
}

/// A volunteer application, as collected by the volunteer page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerApplication {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub message: String,
}

/// Placeholder for the volunteer webhook: logs the application and
/// resolves successfully after a short simulated processing delay.
pub async fn submit_volunteer_application(application: &VolunteerApplication) -> bool {
    info!(
        "[Webhook] Submitting volunteer application for {} ({})",
        application.name, application.role
    );
    tokio::time::sleep(Duration::from_millis(1500)).await;
    true
}

/// How often a donation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationFrequency {
    Once,
    Monthly,
}

/// Donation processing stub. Real payment processing is out of scope;
/// the donate page only simulates the checkout.
pub async fn process_donation(amount: i64, frequency: DonationFrequency) -> bool {
    info!(
        "[Webhook] Processing {:?} donation of ₹{}",
        frequency, amount
    );
    tokio::time::sleep(Duration::from_secs(2)).await;
    true
}

// --- File: crates/akshara_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Site-wide theme preference.
///
/// The theme used to live in ambient document-level state; it is now an
/// explicit application setting passed down to whatever renders the site.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

// --- Booking Webhook Config ---
// Holds the fixed automation endpoint bookings are posted to.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookConfig {
    pub booking_url: String, // Loaded via AKSHARA_WEBHOOK__BOOKING_URL or config file
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_booking_webhook: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub webhook: Option<WebhookConfig>,
}

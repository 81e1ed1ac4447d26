// --- File: crates/akshara_webhook/src/service.rs ---
//! Production implementation of the booking submission seam.

use crate::logic;
use akshara_common::services::{BookingSubmission, BookingSubmitter, BoxFuture};
use akshara_common::{config_error, AksharaError};
use akshara_config::{AppConfig, WebhookConfig};

/// Booking submitter backed by the configured automation webhook.
#[derive(Debug)]
pub struct WebhookSubmitter {
    config: WebhookConfig,
}

impl WebhookSubmitter {
    pub fn new(config: WebhookConfig) -> Self {
        Self { config }
    }

    /// Build from the application config; fails when the webhook section
    /// is absent.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, AksharaError> {
        let webhook = config
            .webhook
            .clone()
            .ok_or_else(|| config_error("webhook configuration missing"))?;
        Ok(Self::new(webhook))
    }
}

impl BookingSubmitter for WebhookSubmitter {
    type Error = AksharaError;

    fn submit_booking(&self, submission: BookingSubmission) -> BoxFuture<'_, bool, Self::Error> {
        Box::pin(async move { Ok(logic::submit_booking(&self.config, submission).await) })
    }
}

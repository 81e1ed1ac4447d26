//! Runtime feature flag handling.
//!
//! Features are toggled two ways: a `use_*` flag in the configuration file
//! and the presence of the matching configuration section. A feature is
//! only considered enabled when both are present, which lets a deployment
//! ship a config section while keeping the feature switched off.

use akshara_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the booking webhook is enabled at runtime.
pub fn is_webhook_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config.use_booking_webhook, config.webhook.as_ref())
}

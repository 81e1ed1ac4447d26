// --- File: crates/akshara_webhook/src/lib.rs ---
// Declare modules within this crate
pub mod logic;
pub mod service;

pub use logic::{
    process_donation, submit_booking, submit_volunteer_application, BookingWebhookPayload,
    DonationFrequency, VolunteerApplication, BOOKING_SOURCE,
};
pub use service::WebhookSubmitter;

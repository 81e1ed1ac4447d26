// --- File: crates/akshara_booking/src/lib.rs ---
// Declare modules within this crate
pub mod calendar;
#[cfg(test)]
mod calendar_proptest;
#[cfg(test)]
mod calendar_test;
pub mod models;
pub mod widget;
#[cfg(test)]
mod widget_test;

pub use calendar::{generate_time_slots, CalendarSelection, MonthView};
pub use models::{staff_options, BookingForm, MeetingPurpose, StaffOption};
pub use widget::{BookingConfirmation, BookingError, BookingModal, WidgetPhase, WidgetState};

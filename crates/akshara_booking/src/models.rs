// --- File: crates/akshara_booking/src/models.rs ---

use akshara_common::services::BookingSubmission;
use akshara_content::Founder;
use serde::Serialize;
use std::fmt;

/// Enumerated reason for requesting a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MeetingPurpose {
    #[default]
    Partnership,
    Donation,
    Volunteering,
    Media,
    Other,
}

impl fmt::Display for MeetingPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MeetingPurpose::Partnership => "Partnership",
            MeetingPurpose::Donation => "Donation",
            MeetingPurpose::Volunteering => "Volunteering",
            MeetingPurpose::Media => "Media",
            MeetingPurpose::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Contact and meeting metadata collected by the form.
///
/// Fields are independently editable with no cross-field validation;
/// required-field enforcement (name, email, phone) is the input
/// controls' concern, not this struct's. The selected date and time live
/// in the calendar state and join the form only at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub purpose: MeetingPurpose,
    /// Preferred staff member id; empty string means "no preference".
    pub founder_id: String,
    pub message: String,
    pub is_urgent: bool,
}

impl BookingForm {
    /// A fresh form, optionally pre-selecting a staff member.
    pub fn new(preselected_founder_id: Option<&str>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            purpose: MeetingPurpose::default(),
            founder_id: preselected_founder_id.unwrap_or_default().to_string(),
            message: String::new(),
            is_urgent: false,
        }
    }

    /// Combine the form with the resolved calendar selection into the
    /// submission payload.
    pub fn to_submission(&self, date: String, time: String) -> BookingSubmission {
        BookingSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            purpose: self.purpose.to_string(),
            founder_id: self.founder_id.clone(),
            date,
            time,
            message: self.message.clone(),
            is_urgent: self.is_urgent,
        }
    }
}

/// One entry of the staff-preference dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffOption {
    /// Founder id, or empty for "no preference".
    pub value: String,
    pub label: String,
}

/// Dropdown options for the staff preference: an explicit "no preference"
/// entry followed by every supplied founder, labeled by display name.
pub fn staff_options(founders: &[Founder]) -> Vec<StaffOption> {
    let mut options = Vec::with_capacity(founders.len() + 1);
    options.push(StaffOption {
        value: String::new(),
        label: "Any Staff Member".to_string(),
    });
    options.extend(founders.iter().map(|f| StaffOption {
        value: f.id.to_string(),
        label: f.name.to_string(),
    }));
    options
}

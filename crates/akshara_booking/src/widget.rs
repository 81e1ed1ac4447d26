// --- File: crates/akshara_booking/src/widget.rs ---
//! The booking widget state machine.
//!
//! One opening of the modal owns one [`WidgetState`]: the form fields,
//! the calendar selection, and the phase. Closing discards everything;
//! reopening starts fresh. The only asynchronous operation is the
//! submission call, and the only concurrency guard is the exclusive
//! borrow `submit` takes for its duration.

use crate::calendar::CalendarSelection;
use crate::models::{staff_options, BookingForm, StaffOption};
use akshara_common::services::BookingSubmitter;
use akshara_content::Founder;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Local precondition failure; recoverable by completing the
    /// calendar selection. The submitter is never called in this case.
    #[error("Please select a date and time.")]
    DateTimeNotSelected,
}

/// Phase of one widget opening. There is no transition back from
/// `Success` within the same opening; only closing resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Form,
    Success,
}

/// Data backing the confirmation view shown after a successful
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// `"{date} at {time}"`, e.g. `"2025-03-12 at 10:30"`.
    pub scheduled_for: String,
    /// The email address the confirmation was (nominally) sent to.
    pub email: String,
}

/// State of an open booking widget.
#[derive(Debug)]
pub struct WidgetState {
    phase: WidgetPhase,
    loading: bool,
    form: BookingForm,
    calendar: CalendarSelection,
}

impl WidgetState {
    fn new(today: NaiveDate, preselected_founder_id: Option<&str>) -> Self {
        Self {
            phase: WidgetPhase::Form,
            loading: false,
            form: BookingForm::new(preselected_founder_id),
            calendar: CalendarSelection::starting_at(today),
        }
    }

    pub fn phase(&self) -> WidgetPhase {
        self.phase
    }

    /// True while a submission is in flight; the submit control renders
    /// disabled.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    pub fn calendar(&self) -> &CalendarSelection {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut CalendarSelection {
        &mut self.calendar
    }

    /// Submit the booking.
    ///
    /// Aborts with [`BookingError::DateTimeNotSelected`] before touching
    /// the submitter when the calendar selection is incomplete.
    ///
    /// Result handling preserves the site's long-standing contract: a
    /// submitter error is logged and treated as a confirmed booking, so
    /// there is no user-visible failure path for this call. See the
    /// design notes before tightening this.
    pub async fn submit<S: BookingSubmitter>(
        &mut self,
        submitter: &S,
    ) -> Result<WidgetPhase, BookingError> {
        if self.phase == WidgetPhase::Success {
            debug!("submit after confirmation ignored");
            return Ok(self.phase);
        }

        let (date, time) = match (self.calendar.date_string(), self.calendar.selected_time()) {
            (Some(date), Some(time)) => (date, time.to_string()),
            _ => return Err(BookingError::DateTimeNotSelected),
        };

        self.loading = true;
        let submission = self.form.to_submission(date, time);
        let success = match submitter.submit_booking(submission).await {
            Ok(success) => success,
            Err(err) => {
                warn!("booking submission failed, treating as confirmed: {}", err);
                true
            }
        };
        self.loading = false;

        if success {
            info!("booking confirmed for {}", self.form.email);
            self.phase = WidgetPhase::Success;
        }
        Ok(self.phase)
    }

    /// The confirmation view data; `None` until the phase is `Success`.
    pub fn confirmation(&self) -> Option<BookingConfirmation> {
        if self.phase != WidgetPhase::Success {
            return None;
        }
        let date = self.calendar.date_string()?;
        let time = self.calendar.selected_time()?;
        Some(BookingConfirmation {
            scheduled_for: format!("{} at {}", date, time),
            email: self.form.email.clone(),
        })
    }
}

/// The modal dialog wrapping the widget.
///
/// `None` inner state is the closed widget. Opening creates fresh state
/// (optionally pre-selecting a staff member); closing discards it. A
/// submission future dropped because the modal closed mid-flight is
/// simply discarded.
#[derive(Debug)]
pub struct BookingModal {
    founders: Vec<Founder>,
    state: Option<WidgetState>,
}

impl BookingModal {
    pub fn new(founders: Vec<Founder>) -> Self {
        Self {
            founders,
            state: None,
        }
    }

    /// Open the modal. Any previous state is discarded; the calendar
    /// starts on the month containing `today`.
    pub fn open(&mut self, today: NaiveDate, preselected_founder_id: Option<&str>) {
        self.state = Some(WidgetState::new(today, preselected_founder_id));
    }

    /// Close the modal, discarding all form and calendar state.
    pub fn close(&mut self) {
        self.state = None;
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&WidgetState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut WidgetState> {
        self.state.as_mut()
    }

    /// Staff dropdown options for the supplied founder records.
    pub fn staff_options(&self) -> Vec<StaffOption> {
        staff_options(&self.founders)
    }
}

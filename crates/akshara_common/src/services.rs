// --- File: crates/akshara_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for the external interfaces the
//! booking widget depends on. The traits decouple the widget's state
//! machine from the concrete webhook transport, which keeps the widget
//! testable with mock submitters.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A completed booking request, ready for submission.
///
/// Field names serialize in camelCase because the downstream automation
/// webhook was built against the original site's payload format and keys
/// must match it exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Reason for the meeting, as its display string (e.g. "Partnership").
    pub purpose: String,
    /// Preferred staff member id; empty string means "no preference".
    pub founder_id: String,
    /// Selected calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Selected half-hour slot label, e.g. `"10:30"`.
    pub time: String,
    pub message: String,
    pub is_urgent: bool,
}

/// A trait for booking submission.
///
/// One operation: hand a completed booking to the downstream automation
/// endpoint. The returned boolean is the success flag the widget acts on;
/// implementations document their own failure semantics.
pub trait BookingSubmitter: Send + Sync {
    /// Error type returned by the submitter.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submit a completed booking.
    fn submit_booking(&self, submission: BookingSubmission) -> BoxFuture<'_, bool, Self::Error>;
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Error type returned by the scripted mock.
    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    pub struct MockSubmitterError(pub String);

    /// Mock booking submitter for testing.
    ///
    /// Records every submission it receives and resolves with a scripted
    /// outcome.
    pub struct MockBookingSubmitter {
        outcome: Result<bool, String>,
        submissions: Mutex<Vec<BookingSubmission>>,
    }

    impl MockBookingSubmitter {
        /// A submitter that accepts every booking.
        pub fn succeeding() -> Self {
            Self::reporting(true)
        }

        /// A submitter that resolves with the given success flag.
        pub fn reporting(success: bool) -> Self {
            Self {
                outcome: Ok(success),
                submissions: Mutex::new(Vec::new()),
            }
        }

        /// A submitter whose calls fail with the given message,
        /// simulating a transport error.
        pub fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                submissions: Mutex::new(Vec::new()),
            }
        }

        /// Every submission received so far.
        pub fn submissions(&self) -> Vec<BookingSubmission> {
            self.submissions.lock().unwrap().clone()
        }
    }

    impl BookingSubmitter for MockBookingSubmitter {
        type Error = MockSubmitterError;

        fn submit_booking(
            &self,
            submission: BookingSubmission,
        ) -> BoxFuture<'_, bool, Self::Error> {
            Box::pin(async move {
                self.submissions.lock().unwrap().push(submission);
                match &self.outcome {
                    Ok(success) => Ok(*success),
                    Err(message) => Err(MockSubmitterError(message.clone())),
                }
            })
        }
    }
}

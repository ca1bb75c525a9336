//! Form state for a single prediction submission
//!
//! The form moves `Idle -> InFlight -> Settled`. Every submission gets a
//! sequence number; only the response for the latest one is accepted, so a
//! slow earlier request can never overwrite newer results. Clearing the form
//! also invalidates whatever is in flight.

use std::path::PathBuf;
use tuners_types::{Error, ImageSource, ReportEntry, Result};

use crate::input::resolve_source;

/// Message shown for any failed request
pub const PREDICTION_FAILED_MESSAGE: &str = "Error making prediction. Please try again.";

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Vec<ReportEntry>),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight {
        seq: u64,
    },
    Settled(Outcome),
}

/// What to preview: whichever input the user touched last
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    File(PathBuf),
    Url(String),
}

/// Handle for one issued submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    pub source: ImageSource,
}

/// Form fields plus submission state
#[derive(Debug, Default)]
pub struct SubmissionForm {
    file: Option<PathBuf>,
    image_url: String,
    preview: Option<Preview>,
    state: SubmissionState,
    latest_seq: u64,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, SubmissionState::InFlight { .. })
    }

    /// Results of the last successful submission
    pub fn results(&self) -> &[ReportEntry] {
        match &self.state {
            SubmissionState::Settled(Outcome::Success(entries)) => entries,
            _ => &[],
        }
    }

    /// Message of the last failed submission
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Settled(Outcome::Failure(message)) => Some(message),
            _ => None,
        }
    }

    pub fn set_file(&mut self, file: Option<PathBuf>) {
        self.preview = file.clone().map(Preview::File);
        self.file = file;
    }

    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
        self.preview = if self.image_url.trim().is_empty() {
            None
        } else {
            Some(Preview::Url(self.image_url.clone()))
        };
    }

    /// Start a submission. Previous results and errors are dropped.
    ///
    /// With no file and no URL the form settles on the validation message
    /// and no ticket is issued.
    pub fn begin(&mut self) -> Result<Ticket> {
        let source = match resolve_source(self.file.clone(), Some(&self.image_url)) {
            Ok(source) => source,
            Err(e) => {
                self.state = SubmissionState::Settled(Outcome::Failure(e.to_string()));
                return Err(e);
            }
        };

        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.state = SubmissionState::InFlight { seq };

        tracing::debug!(seq, source = %source, "Submission started");

        Ok(Ticket { seq, source })
    }

    /// Record the response for a submission. Returns false if it was stale
    /// and discarded.
    pub fn settle(&mut self, seq: u64, result: Result<Vec<ReportEntry>>) -> bool {
        if self.state != (SubmissionState::InFlight { seq }) {
            tracing::warn!(
                seq,
                latest = self.latest_seq,
                "Discarding response for a superseded submission"
            );
            return false;
        }

        let outcome = match result {
            Ok(entries) => Outcome::Success(entries),
            Err(e) => {
                if !e.is_validation() {
                    tracing::error!(seq, error = %e, "Submission failed");
                }
                Outcome::Failure(failure_message(&e))
            }
        };
        self.state = SubmissionState::Settled(outcome);
        true
    }

    /// Reset inputs and results; any in-flight response will be discarded
    pub fn clear(&mut self) {
        self.file = None;
        self.image_url.clear();
        self.preview = None;
        self.state = SubmissionState::Idle;
        self.latest_seq += 1;
    }
}

/// User-facing text for a failed submission
pub fn failure_message(error: &Error) -> String {
    if error.is_validation() {
        error.to_string()
    } else {
        PREDICTION_FAILED_MESSAGE.to_string()
    }
}

//! Application service layer - config, input validation, prediction use case

pub mod config;
pub mod input;
pub mod prediction_service;
pub mod submission;

pub use prediction_service::PredictionService;
pub use submission::{Outcome, Preview, SubmissionForm, SubmissionState, Ticket};

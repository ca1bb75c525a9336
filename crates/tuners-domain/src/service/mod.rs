//! Domain services

pub mod report;
pub mod result_selector;

pub use report::build_report;
pub use result_selector::{select_predictions, MAX_PROBABILITY_GAP_PCT};

//! Decide which classifier results to surface
//!
//! When the top two guesses are close, both are shown instead of asserting
//! a certainty the classifier does not have. When one guess clearly
//! dominates, only that one is shown.

use std::collections::HashSet;
use tuners_types::Classification;

/// Largest gap (in percentage points) between the top two results for which
/// both are shown
pub const MAX_PROBABILITY_GAP_PCT: f64 = 15.0;

/// Sort descending by probability. Stable, so ties keep their input order.
pub fn sort_by_probability(classifications: &mut [Classification]) {
    classifications.sort_by(|a, b| b.probability.total_cmp(&a.probability));
}

/// Absolute percentage-point gap between two probabilities
pub fn probability_gap(top: f64, second: f64) -> f64 {
    (top - second).abs() * 100.0
}

/// Keep the first occurrence of each category label
pub fn dedup_by_category(classifications: Vec<Classification>) -> Vec<Classification> {
    let mut seen = HashSet::new();
    classifications
        .into_iter()
        .filter(|c| seen.insert(c.category.clone()))
        .collect()
}

/// Select the classifications to display: the top result, plus the runner-up
/// when it is within [`MAX_PROBABILITY_GAP_PCT`] and has a different label.
///
/// Total over any input; the result holds at most two entries with distinct
/// labels, in descending probability order.
pub fn select_predictions(classifications: &[Classification]) -> Vec<Classification> {
    let mut sorted = classifications.to_vec();
    sort_by_probability(&mut sorted);

    let mut iter = sorted.into_iter();
    let Some(top) = iter.next() else {
        return Vec::new();
    };
    let second = iter.next();

    let second_probability = second.as_ref().map_or(0.0, |s| s.probability);
    let gap = probability_gap(top.probability, second_probability);

    let selected = match second {
        Some(second) if gap <= MAX_PROBABILITY_GAP_PCT && top.category != second.category => {
            vec![top, second]
        }
        _ => vec![top],
    };

    dedup_by_category(selected)
}

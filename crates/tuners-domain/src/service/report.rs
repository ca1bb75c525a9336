//! Pair selected classifications with their cost estimates

use crate::constants::lookup_cost;
use crate::service::result_selector::select_predictions;
use tuners_types::{Classification, ReportEntry};

/// Select the results to show and attach the cost estimate for each
pub fn build_report(classifications: &[Classification]) -> Vec<ReportEntry> {
    select_predictions(classifications)
        .into_iter()
        .map(|c| ReportEntry {
            cost: lookup_cost(&c.category),
            category: c.category,
            probability: c.probability,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuners_types::CostEstimate;

    #[test]
    fn test_report_attaches_costs() {
        let report = build_report(&[
            Classification::new("Sedan", 0.80),
            Classification::new("Truck", 0.90),
        ]);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].category, "Truck");
        assert_eq!(report[0].cost.insurance_cost, "$1200/year");
        assert_eq!(report[1].category, "Sedan");
        assert_eq!(report[1].cost.finance_option, "28-month installment at $85/month");
    }

    #[test]
    fn test_report_unknown_label() {
        let report = build_report(&[Classification::new("Tractor", 0.99)]);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].cost, CostEstimate::not_available());
    }

    #[test]
    fn test_report_empty() {
        assert!(build_report(&[]).is_empty());
    }
}

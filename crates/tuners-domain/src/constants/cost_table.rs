//! Insurance and financing estimates per vehicle category

use std::collections::HashMap;
use std::sync::LazyLock;
use tuners_types::{CostEstimate, VehicleCategory};

/// Base cost options per vehicle category
pub static COST_TABLE: LazyLock<HashMap<VehicleCategory, CostEstimate>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        VehicleCategory::Truck,
        CostEstimate {
            insurance_cost: "$1200/year",
            finance_option: "52-month installment at $100/month",
        },
    );

    m.insert(
        VehicleCategory::Van,
        CostEstimate {
            insurance_cost: "$900/year",
            finance_option: "36-month installment at $90/month",
        },
    );

    m.insert(
        VehicleCategory::Suv,
        CostEstimate {
            insurance_cost: "$1100/year",
            finance_option: "36-month installment at $92/month",
        },
    );

    m.insert(
        VehicleCategory::Hatchback,
        CostEstimate {
            insurance_cost: "$800/year",
            finance_option: "28-month installment at $80/month",
        },
    );

    m.insert(
        VehicleCategory::Sedan,
        CostEstimate {
            insurance_cost: "$1000/year",
            finance_option: "28-month installment at $85/month",
        },
    );

    m
});

/// Get the cost estimate for a label, if the table has one.
/// Labels match exactly, including case.
pub fn get_cost_estimate(label: &str) -> Option<&'static CostEstimate> {
    VehicleCategory::from_label(label).and_then(|category| COST_TABLE.get(&category))
}

/// Get the cost estimate for a label, falling back to the "Not available" sentinel
pub fn lookup_cost(label: &str) -> CostEstimate {
    get_cost_estimate(label)
        .copied()
        .unwrap_or_else(CostEstimate::not_available)
}

/// All table rows in category order
pub fn cost_table_rows() -> Vec<(VehicleCategory, CostEstimate)> {
    VehicleCategory::ALL
        .into_iter()
        .filter_map(|category| COST_TABLE.get(&category).map(|cost| (category, *cost)))
        .collect()
}

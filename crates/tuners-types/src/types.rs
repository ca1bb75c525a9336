//! Shared data types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder shown for labels missing from the cost table
pub const NOT_AVAILABLE: &str = "Not available";

/// One (category, probability) pair returned by the image classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Category label as returned by the classifier (e.g., "Truck")
    pub category: String,
    /// Probability in [0, 1]
    pub probability: f64,
}

impl Classification {
    pub fn new(category: impl Into<String>, probability: f64) -> Self {
        Self {
            category: category.into(),
            probability,
        }
    }
}

/// Vehicle categories the classifier is trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    Truck,
    Van,
    #[serde(rename = "SUV")]
    Suv,
    Hatchback,
    Sedan,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 5] = [
        VehicleCategory::Truck,
        VehicleCategory::Van,
        VehicleCategory::Suv,
        VehicleCategory::Hatchback,
        VehicleCategory::Sedan,
    ];

    /// Label used by the classifier and the cost table
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Truck => "Truck",
            VehicleCategory::Van => "Van",
            VehicleCategory::Suv => "SUV",
            VehicleCategory::Hatchback => "Hatchback",
            VehicleCategory::Sedan => "Sedan",
        }
    }

    /// Exact match on the classifier label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Insurance and financing estimate for a vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub insurance_cost: &'static str,
    pub finance_option: &'static str,
}

impl CostEstimate {
    /// Sentinel for categories without an entry
    pub const fn not_available() -> Self {
        Self {
            insurance_cost: NOT_AVAILABLE,
            finance_option: NOT_AVAILABLE,
        }
    }
}

/// A selected classification paired with its cost estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub category: String,
    pub probability: f64,
    pub cost: CostEstimate,
}

impl ReportEntry {
    /// Probability formatted the way results are displayed ("90.00%")
    pub fn probability_label(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

/// Image chosen by the user, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Url(String),
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::File(path) => write!(f, "file {}", path.display()),
            ImageSource::Url(url) => write!(f, "url {}", url),
        }
    }
}

/// Validated request body for the classifier
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePayload {
    /// Raw image file contents
    Bytes(Vec<u8>),
    /// Publicly reachable image URL
    Url(url::Url),
}

impl ImagePayload {
    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            ImagePayload::Bytes(bytes) => format!("{} bytes", bytes.len()),
            ImagePayload::Url(url) => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in VehicleCategory::ALL {
            assert_eq!(VehicleCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(VehicleCategory::from_label("suv"), None);
        assert_eq!(VehicleCategory::from_label("Motorbike"), None);
    }

    #[test]
    fn test_probability_label() {
        let entry = ReportEntry {
            category: "Truck".to_string(),
            probability: 0.9,
            cost: CostEstimate::not_available(),
        };
        assert_eq!(entry.probability_label(), "90.00%");
    }

    #[test]
    fn test_not_available_sentinel() {
        let sentinel = CostEstimate::not_available();
        assert_eq!(sentinel.insurance_cost, "Not available");
        assert_eq!(sentinel.finance_option, "Not available");
    }
}

//! Request and result records for the diagnosis engine
//!
//! Transient values crossing the JSON boundary; field names follow the
//! dashboard's camelCase wire format.

use serde::{Deserialize, Serialize};

/// Vehicle metadata supplied alongside a complaint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    /// Manufacturer, e.g. "Toyota"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    /// Model name, e.g. "Corolla"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Model year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl VehicleInfo {
    /// Make and model are both present and non-empty
    ///
    /// The dashboard sends empty strings for blank form fields; those count
    /// as absent.
    pub fn has_make_and_model(&self) -> bool {
        self.make.as_deref().map_or(false, |m| !m.is_empty())
            && self.model.as_deref().map_or(false, |m| !m.is_empty())
    }
}

/// A single diagnosis request
///
/// Constructed per call and discarded after use; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRequest {
    /// Free-text customer complaint
    #[serde(default)]
    pub complaint: String,

    /// Optional vehicle descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_info: Option<VehicleInfo>,
}

/// Structured diagnosis produced by the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// Diagnosis narrative
    pub diagnosis: String,

    /// Heuristic confidence, in [0, 1]
    pub confidence: f64,

    /// Estimated cost range, rendered "min-max"
    pub estimated_cost_range: String,

    /// Estimated repair time, e.g. "2-6 hours"
    pub repair_time: String,

    /// Parts and services likely involved, in suggestion order
    pub suggested_parts: Vec<String>,
}

//! JSON handler adapter
//!
//! Mirrors the dashboard's diagnosis endpoint contract without owning any
//! transport: a JSON payload in, a `{success, data}` envelope out. Routing,
//! authentication, and persistence belong entirely to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnosis::{DiagnosisRequest, DiagnosisResult, SymptomClassifier};
use crate::errors::{Result, TriageError};

/// Response envelope returned to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    /// Always true; the classifier is total and the handler rejects
    /// malformed payloads before reaching it
    pub success: bool,

    /// The diagnosis record
    pub data: DiagnosisResult,
}

/// Run one typed request through the classifier
pub fn diagnose_request(
    classifier: &SymptomClassifier,
    request: &DiagnosisRequest,
) -> DiagnosisResponse {
    let data = classifier.diagnose(&request.complaint, request.vehicle_info.as_ref());
    DiagnosisResponse {
        success: true,
        data,
    }
}

/// Handle a raw JSON payload as the dashboard sends it
///
/// Missing fields are tolerated (an absent complaint reads as empty, an
/// absent vehicleInfo as none); fields of the wrong type are rejected as an
/// invalid payload.
pub fn handle_diagnosis(classifier: &SymptomClassifier, payload: &Value) -> Result<Value> {
    let request: DiagnosisRequest = serde_json::from_value(payload.clone())
        .map_err(|e| TriageError::InvalidPayload(e.to_string()))?;
    let response = diagnose_request(classifier, &request);
    Ok(serde_json::to_value(response)?)
}

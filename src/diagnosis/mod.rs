//! Symptom-to-diagnosis engine
//!
//! Matches free-text customer complaints against an ordered table of fault
//! categories and produces a structured diagnosis with cost and repair-time
//! estimates, adjusted for vehicle age.

pub mod catalog;
pub mod classifier;
pub mod types;

pub use catalog::{FaultCatalog, FaultCategory};
pub use classifier::SymptomClassifier;
pub use types::{DiagnosisRequest, DiagnosisResult, VehicleInfo};

//! Autotriage - rule-based symptom triage for auto-repair workshops
//!
//! Matches free-text customer complaints against a fixed table of fault
//! categories and produces a structured diagnosis: narrative, confidence,
//! cost range, repair time, and suggested parts, adjusted for vehicle age.
//!
//! # Architecture
//!
//! - **diagnosis**: the pure classification engine and its records
//! - **api**: transport-agnostic JSON handler mirroring the dashboard contract
//! - **config**: TOML tuning overrides for the category table
//! - **cli / interactive / batch**: terminal front-ends

pub mod api;
pub mod batch;
pub mod cli;
pub mod config;
pub mod diagnosis;
pub mod doctor;
pub mod errors;
pub mod interactive;

// Re-export commonly used types
pub use diagnosis::{
    DiagnosisRequest, DiagnosisResult, FaultCatalog, FaultCategory, SymptomClassifier, VehicleInfo,
};
pub use errors::{Result, TriageError};

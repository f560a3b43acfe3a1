//! Symptom classifier
//!
//! Pure keyword-overlap matching over the fault catalog. The function is
//! total: unrecognized or empty complaints degrade to a default advisory
//! result instead of failing, and identical inputs always produce identical
//! output.

use super::catalog::{FaultCatalog, FaultCategory};
use super::types::{DiagnosisResult, VehicleInfo};

/// Confidence assigned when no category matches
const DEFAULT_CONFIDENCE: f64 = 0.75;

/// Cost bounds assigned when no category matches
const DEFAULT_COST_RANGE: (u32, u32) = (100, 500);

/// Repair time assigned when no category matches
const DEFAULT_REPAIR_TIME: &str = "2-6 hours";

/// Parts list assigned when no category matches
const DEFAULT_PARTS: [&str; 3] = ["Comprehensive diagnostic", "Standard inspection", "Labor"];

/// Model years strictly below this cutoff get the age adjustment
const AGE_CUTOFF_YEAR: i32 = 2010;

/// Confidence penalty for vehicles older than the cutoff
const AGE_CONFIDENCE_PENALTY: f64 = 0.05;

/// Confidence floor after the age penalty
const AGE_CONFIDENCE_FLOOR: f64 = 0.75;

/// Widening of the upper cost bound for vehicles older than the cutoff
const AGE_COST_WIDENING: u32 = 200;

/// Sentence appended after the vehicle clause
const PARTS_AVAILABILITY_NOTE: &str =
    " - specific parts availability and common issues for this vehicle have been considered.";

/// Closing sentence anchoring every diagnosis to local operating conditions
const REGIONAL_CONTEXT_NOTE: &str =
    " Local road conditions and climate in Ghana have been factored into this assessment.";

/// Rule-based symptom classifier
///
/// Stateless apart from the immutable catalog; safe to share across threads
/// and call concurrently without synchronization.
pub struct SymptomClassifier {
    catalog: FaultCatalog,
}

impl SymptomClassifier {
    /// Create a classifier over the given catalog
    pub fn new(catalog: FaultCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this classifier matches against
    pub fn catalog(&self) -> &FaultCatalog {
        &self.catalog
    }

    /// Diagnose a free-text complaint
    ///
    /// Matching is literal substring containment on the lowercased
    /// complaint; the category with the strictly greatest keyword count
    /// wins, with ties going to the earliest declared category. When no
    /// keyword matches at all, a default advisory result is produced
    /// instead.
    pub fn diagnose(&self, complaint: &str, vehicle: Option<&VehicleInfo>) -> DiagnosisResult {
        let text = complaint.to_lowercase();
        let matched = self.best_match(&text);

        let (mut narrative, mut confidence, (cost_min, mut cost_max), repair_time, parts) =
            match matched {
                Some(cat) => (
                    cat.narrative.clone(),
                    cat.confidence,
                    cat.cost_range,
                    cat.repair_time.clone(),
                    cat.parts.clone(),
                ),
                None => (
                    format!(
                        "Based on the symptoms described: '{}', this appears to be an automotive issue requiring professional diagnostic inspection. Multiple systems could be involved.",
                        complaint
                    ),
                    DEFAULT_CONFIDENCE,
                    DEFAULT_COST_RANGE,
                    DEFAULT_REPAIR_TIME.to_string(),
                    DEFAULT_PARTS.iter().map(|p| p.to_string()).collect(),
                ),
            };

        if let Some(vehicle) = vehicle {
            if vehicle.has_make_and_model() {
                let make = title_case(&vehicle.make.as_deref().unwrap_or("").to_lowercase());
                let model = title_case(&vehicle.model.as_deref().unwrap_or("").to_lowercase());
                narrative.push_str(&format!(" Vehicle: {} {}", make, model));
                if let Some(year) = vehicle.year {
                    narrative.push_str(&format!(" ({})", year));
                }
                narrative.push_str(PARTS_AVAILABILITY_NOTE);
            }

            // Age adjustment applies to matched categories only, never to
            // the default result.
            if matched.is_some() {
                if let Some(year) = vehicle.year {
                    if year < AGE_CUTOFF_YEAR {
                        confidence = (confidence - AGE_CONFIDENCE_PENALTY).max(AGE_CONFIDENCE_FLOOR);
                        cost_max += AGE_COST_WIDENING;
                    }
                }
            }
        }

        narrative.push_str(REGIONAL_CONTEXT_NOTE);

        DiagnosisResult {
            diagnosis: narrative,
            confidence,
            estimated_cost_range: format!("{}-{}", cost_min, cost_max),
            repair_time,
            suggested_parts: parts,
        }
    }

    /// Best category by keyword overlap, or None when nothing matched
    ///
    /// Strict greater-than: a later category with an equal count never
    /// displaces an earlier one.
    fn best_match(&self, text: &str) -> Option<&FaultCategory> {
        let mut best = None;
        let mut max_matches = 0usize;

        for cat in self.catalog.categories() {
            let matches = cat
                .keywords
                .iter()
                .filter(|keyword| text.contains(keyword.as_str()))
                .count();
            if matches > max_matches {
                max_matches = matches;
                best = Some(cat);
            }
        }

        best
    }
}

impl Default for SymptomClassifier {
    fn default() -> Self {
        Self::new(FaultCatalog::standard())
    }
}

/// Title-case the way the dashboard renders vehicle names: every letter
/// following a non-alphabetic character is uppercased, the rest lowercased,
/// so "f-150" becomes "F-150".
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn vehicle(make: &str, model: &str, year: Option<i32>) -> VehicleInfo {
        VehicleInfo {
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            year,
        }
    }

    #[test]
    fn test_brake_complaint_matches_brake_category() {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose("brake pedal is grinding", None);
        assert!(result.diagnosis.starts_with("Brake system diagnosis"));
        assert_eq!(result.confidence, 0.92);
        assert_eq!(result.estimated_cost_range, "200-600");
        assert_eq!(result.repair_time, "2-6 hours");
        assert_eq!(result.suggested_parts[0], "Brake pads");
    }

    #[test]
    fn test_unmatched_complaint_falls_back_to_default() {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose("weird smell from dashboard", None);
        assert!(result.diagnosis.contains("weird smell from dashboard"));
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.estimated_cost_range, "100-500");
        assert_eq!(result.repair_time, "2-6 hours");
        assert_eq!(
            result.suggested_parts,
            vec!["Comprehensive diagnostic", "Standard inspection", "Labor"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose("BRAKE PEDAL GRINDING", None);
        assert_eq!(result.confidence, 0.92);
    }

    #[test]
    fn test_old_vehicle_adjusts_confidence_and_cost() {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose(
            "car won't start, battery seems dead",
            Some(&vehicle("Toyota", "Corolla", Some(2005))),
        );
        assert!((result.confidence - 0.85).abs() < 1e-9);
        assert_eq!(result.estimated_cost_range, "100-1000");
        assert!(result.diagnosis.contains("Toyota Corolla (2005)"));
    }

    #[test]
    fn test_age_adjustment_skips_newer_vehicles() {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose(
            "car won't start, battery seems dead",
            Some(&vehicle("Toyota", "Corolla", Some(2018))),
        );
        assert_eq!(result.confidence, 0.90);
        assert_eq!(result.estimated_cost_range, "100-800");
    }

    #[test]
    fn test_age_adjustment_applies_without_make_and_model() {
        let classifier = SymptomClassifier::default();
        let old = VehicleInfo {
            make: None,
            model: None,
            year: Some(2003),
        };
        let result = classifier.diagnose("brakes grinding", Some(&old));
        assert!((result.confidence - 0.87).abs() < 1e-9);
        assert_eq!(result.estimated_cost_range, "200-800");
    }

    #[test]
    fn test_age_adjustment_floors_at_default_confidence() {
        let classifier = SymptomClassifier::default();
        // ac has base confidence 0.82; the penalty would land at 0.77,
        // still above the floor.
        let result = classifier.diagnose(
            "air conditioning blows warm air",
            Some(&vehicle("Nissan", "Almera", Some(2001))),
        );
        assert!((result.confidence - 0.77).abs() < 1e-9);

        // default path never gets the adjustment
        let result = classifier.diagnose(
            "weird smell from dashboard",
            Some(&vehicle("Nissan", "Almera", Some(2001))),
        );
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.estimated_cost_range, "100-500");
    }

    #[test]
    fn test_empty_complaint_with_vehicle_still_names_it() {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose("", Some(&vehicle("Honda", "Civic", None)));
        assert_eq!(result.confidence, 0.75);
        assert!(result.diagnosis.contains("Honda Civic"));
        assert!(!result.diagnosis.contains('('));
    }

    #[test]
    fn test_tie_breaks_to_earliest_category() {
        let classifier = SymptomClassifier::default();
        // "grinding" is a brake keyword, "noise" a suspension keyword;
        // one match each, and brake is declared first.
        let result = classifier.diagnose("grinding noise", None);
        assert!(result.diagnosis.starts_with("Brake system diagnosis"));
    }

    #[test]
    fn test_higher_overlap_beats_earlier_declaration() {
        let classifier = SymptomClassifier::default();
        // One brake keyword ("pedal") against two electrical keywords
        // ("battery", "dead").
        let result = classifier.diagnose("pedal ok but battery dead", None);
        assert!(result.diagnosis.starts_with("Electrical system diagnosis"));
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        let classifier = SymptomClassifier::default();
        // "ac" matches inside "track" by design of the literal matcher.
        let result = classifier.diagnose("track", None);
        assert!(result.diagnosis.starts_with("Climate control"));
    }

    #[test]
    fn test_regional_context_always_appended() {
        let classifier = SymptomClassifier::default();
        for complaint in ["brakes grinding", "weird smell from dashboard", ""] {
            let result = classifier.diagnose(complaint, None);
            assert!(result.diagnosis.ends_with(
                "Local road conditions and climate in Ghana have been factored into this assessment."
            ));
        }
    }

    #[test]
    fn test_title_case_matches_dashboard_rendering() {
        assert_eq!(title_case("toyota"), "Toyota");
        assert_eq!(title_case("f-150"), "F-150");
        assert_eq!(title_case("mercedes benz"), "Mercedes Benz");
    }

    #[quickcheck]
    fn prop_diagnose_is_total(complaint: String) -> bool {
        let classifier = SymptomClassifier::default();
        let result = classifier.diagnose(&complaint, None);
        let bounds: Vec<&str> = result.estimated_cost_range.splitn(2, '-').collect();
        result.confidence >= 0.0
            && result.confidence <= 1.0
            && bounds.len() == 2
            && bounds[0].parse::<u32>().is_ok()
            && bounds[1].parse::<u32>().is_ok()
            && !result.suggested_parts.is_empty()
    }

    #[quickcheck]
    fn prop_diagnose_is_idempotent(complaint: String, year: i32) -> bool {
        let classifier = SymptomClassifier::default();
        let v = VehicleInfo {
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(year),
        };
        classifier.diagnose(&complaint, Some(&v)) == classifier.diagnose(&complaint, Some(&v))
    }
}

//! Integration tests for the diagnosis flow
//!
//! Exercises the public library surface the way the front-ends do: typed
//! classifier calls, the JSON handler, and config-tuned catalogs.

use serde_json::json;

use autotriage::api;
use autotriage::config::{CategoryOverride, Config};
use autotriage::{DiagnosisRequest, SymptomClassifier, VehicleInfo};

fn vehicle(make: &str, model: &str, year: Option<i32>) -> VehicleInfo {
    VehicleInfo {
        make: Some(make.to_string()),
        model: Some(model.to_string()),
        year,
    }
}

#[test]
fn test_brake_scenario() {
    let classifier = SymptomClassifier::default();
    let result = classifier.diagnose("brake pedal is grinding", None);

    assert_eq!(result.confidence, 0.92);
    assert_eq!(result.estimated_cost_range, "200-600");
    assert_eq!(result.repair_time, "2-6 hours");
    assert!(result.diagnosis.starts_with("Brake system diagnosis"));
}

#[test]
fn test_old_electrical_scenario() {
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
fn test_unknown_symptom_scenario() {
    let classifier = SymptomClassifier::default();
    let result = classifier.diagnose("weird smell from dashboard", None);

    assert_eq!(result.confidence, 0.75);
    assert_eq!(result.estimated_cost_range, "100-500");
    assert_eq!(
        result.suggested_parts,
        vec!["Comprehensive diagnostic", "Standard inspection", "Labor"]
    );
}

#[test]
fn test_empty_complaint_scenario() {
    let classifier = SymptomClassifier::default();
    let result = classifier.diagnose("", Some(&vehicle("Honda", "Civic", None)));

    assert_eq!(result.confidence, 0.75);
    assert!(result.diagnosis.contains("Honda Civic"));
}

#[test]
fn test_tie_break_is_stable_across_calls() {
    let classifier = SymptomClassifier::default();
    let first = classifier.diagnose("grinding noise", None);
    for _ in 0..10 {
        assert_eq!(classifier.diagnose("grinding noise", None), first);
    }
    assert!(first.diagnosis.starts_with("Brake system diagnosis"));
}

#[test]
fn test_age_adjustment_is_monotonic() {
    let classifier = SymptomClassifier::default();
    let complaint = "transmission slipping between gears";

    let without_year = classifier.diagnose(complaint, Some(&vehicle("Kia", "Rio", None)));
    let with_old_year = classifier.diagnose(complaint, Some(&vehicle("Kia", "Rio", Some(2008))));

    assert!(with_old_year.confidence < without_year.confidence);
    assert_eq!(without_year.estimated_cost_range, "300-2000");
    assert_eq!(with_old_year.estimated_cost_range, "300-2200");
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = std::sync::Arc::new(SymptomClassifier::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let classifier = classifier.clone();
            std::thread::spawn(move || classifier.diagnose("brakes squealing", None))
        })
        .collect();

    let expected = classifier.diagnose("brakes squealing", None);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_json_handler_end_to_end() {
    let classifier = SymptomClassifier::default();
    let payload = json!({
        "complaint": "engine stalls at idle",
        "vehicleInfo": {"make": "nissan", "model": "almera", "year": 2015}
    });

    let response = api::handle_diagnosis(&classifier, &payload).unwrap();

    assert_eq!(response["success"], json!(true));
    assert_eq!(response["data"]["confidence"], json!(0.88));
    assert_eq!(response["data"]["estimatedCostRange"], json!("150-1200"));
    // make/model are title-cased in the narrative regardless of input case
    assert!(response["data"]["diagnosis"]
        .as_str()
        .unwrap()
        .contains("Nissan Almera (2015)"));
}

#[test]
fn test_config_tuning_flows_into_diagnosis() {
    let mut config = Config::default();
    config.categories.insert(
        "brake".to_string(),
        CategoryOverride {
            cost_max: Some(750),
            ..Default::default()
        },
    );

    let classifier = SymptomClassifier::new(config.catalog().unwrap());
    let result = classifier.diagnose("brake pedal is grinding", None);

    assert_eq!(result.estimated_cost_range, "200-750");
    // selection unchanged by tuning
    assert!(result.diagnosis.starts_with("Brake system diagnosis"));
}

#[test]
fn test_batch_request_line_format() {
    // The JSON-lines batch format is one DiagnosisRequest per line.
    let line = r#"{"complaint":"flat tire on the highway","vehicleInfo":{"make":"Toyota","model":"Hilux"}}"#;
    let request: DiagnosisRequest = serde_json::from_str(line).unwrap();

    let classifier = SymptomClassifier::default();
    let response = api::diagnose_request(&classifier, &request);

    assert!(response.success);
    assert_eq!(response.data.estimated_cost_range, "50-400");
    assert!(response.data.diagnosis.contains("Toyota Hilux"));
}

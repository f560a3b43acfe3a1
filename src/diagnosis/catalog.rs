//! Fault-category table
//!
//! The categories are configuration-like data: hand-tuned keyword sets,
//! narratives, and cost/time estimates. Declaration order matters — the
//! classifier breaks keyword-count ties in favor of the earliest category,
//! so the table is an ordered sequence, never a keyed map.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TriageError};

/// A named cluster of related vehicle symptoms with its diagnostic template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultCategory {
    /// Category identifier, e.g. "brake"
    pub name: String,

    /// Lowercase substrings that indicate this category
    pub keywords: Vec<String>,

    /// Base diagnostic narrative
    pub narrative: String,

    /// Hand-tuned base confidence, in (0, 1]
    pub confidence: f64,

    /// Estimated cost bounds in currency units, min <= max
    pub cost_range: (u32, u32),

    /// Estimated repair time, free-form text
    pub repair_time: String,

    /// Parts and services typically involved
    pub parts: Vec<String>,
}

/// Ordered, immutable set of fault categories
///
/// Fixed at construction time; every constructor path runs the invariant
/// checks in [`FaultCatalog::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultCatalog {
    categories: Vec<FaultCategory>,
}

fn category(
    name: &str,
    keywords: &[&str],
    narrative: &str,
    confidence: f64,
    cost_range: (u32, u32),
    repair_time: &str,
    parts: &[&str],
) -> FaultCategory {
    FaultCategory {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        narrative: narrative.to_string(),
        confidence,
        cost_range,
        repair_time: repair_time.to_string(),
        parts: parts.iter().map(|p| p.to_string()).collect(),
    }
}

impl FaultCatalog {
    /// Build a catalog from an explicit category list
    pub fn new(categories: Vec<FaultCategory>) -> Result<Self> {
        Self::validate(&categories)?;
        Ok(Self { categories })
    }

    /// The built-in category table
    ///
    /// Constants are tuned from workshop history; selection depends only on
    /// the keywords and declaration order.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                category(
                    "brake",
                    &["brake", "braking", "squealing", "grinding", "pedal", "stopping"],
                    "Brake system diagnosis indicates potential issues with brake pads, rotors, or fluid system. The symptoms suggest immediate attention is required for safety.",
                    0.92,
                    (200, 600),
                    "2-6 hours",
                    &["Brake pads", "Brake rotors", "Brake fluid", "Brake inspection", "Labor"],
                ),
                category(
                    "engine",
                    &["engine", "motor", "starting", "stall", "power", "acceleration", "rough idle"],
                    "Engine symptoms detected. Diagnostic scan required to identify specific issues. Could involve fuel system, ignition, or mechanical components.",
                    0.88,
                    (150, 1200),
                    "3-8 hours",
                    &["Diagnostic scan", "Spark plugs", "Fuel filter", "Engine oil", "Labor"],
                ),
                category(
                    "transmission",
                    &["transmission", "shifting", "gear", "slipping", "jerking", "fluid leak"],
                    "Transmission symptoms indicate potential issues with gear shifting mechanism, fluid levels, or internal components. Requires professional inspection.",
                    0.85,
                    (300, 2000),
                    "4-12 hours",
                    &["Transmission fluid", "Filter", "Diagnostic", "Transmission service", "Labor"],
                ),
                category(
                    "electrical",
                    &["battery", "alternator", "lights", "electrical", "charging", "dead", "won't start"],
                    "Electrical system diagnosis suggests issues with battery, alternator, or charging system. Battery and charging system test recommended.",
                    0.90,
                    (100, 800),
                    "1-4 hours",
                    &["Battery", "Alternator", "Battery test", "Charging system check", "Labor"],
                ),
                category(
                    "cooling",
                    &["overheating", "coolant", "radiator", "temperature", "fan", "thermostat"],
                    "Cooling system issues detected. Overheating can cause severe engine damage. Immediate inspection of radiator, thermostat, and coolant levels required.",
                    0.89,
                    (150, 800),
                    "2-6 hours",
                    &["Coolant", "Thermostat", "Radiator", "Water pump", "Labor"],
                ),
                category(
                    "ac",
                    &["air conditioning", "ac", "cooling", "heating", "climate", "air flow"],
                    "Climate control system issues. Could involve refrigerant levels, compressor, or ventilation system. Diagnostic check recommended.",
                    0.82,
                    (100, 600),
                    "1-4 hours",
                    &["Refrigerant", "AC service", "Cabin filter", "Compressor check", "Labor"],
                ),
                category(
                    "suspension",
                    &["suspension", "shock", "strut", "bouncing", "noise", "handling", "steering"],
                    "Suspension system symptoms detected. Issues with shocks, struts, or steering components affect vehicle handling and safety.",
                    0.86,
                    (200, 1000),
                    "3-6 hours",
                    &["Shock absorbers", "Struts", "Suspension inspection", "Wheel alignment", "Labor"],
                ),
                category(
                    "tire",
                    &["tire", "tyre", "flat", "puncture", "pressure", "wear", "alignment"],
                    "Tire-related issues identified. Could involve tire pressure, wear patterns, alignment, or puncture. Safety inspection recommended.",
                    0.94,
                    (50, 400),
                    "0.5-3 hours",
                    &["Tire repair", "New tires", "Wheel alignment", "Tire pressure check", "Labor"],
                ),
            ],
        }
    }

    /// Categories in tie-break order
    pub fn categories(&self) -> &[FaultCategory] {
        &self.categories
    }

    /// Look up a category by name
    pub fn get(&self, name: &str) -> Option<&FaultCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Number of categories in the table
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Check the construction invariants
    ///
    /// Keywords must be non-empty and lowercase, cost ranges ordered,
    /// confidence in (0, 1], category names unique.
    pub fn validate(categories: &[FaultCategory]) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for cat in categories {
            if cat.name.is_empty() {
                return Err(TriageError::InvalidCategory {
                    name: "<unnamed>".to_string(),
                    reason: "category name is empty".to_string(),
                });
            }
            if !seen.insert(cat.name.as_str()) {
                return Err(TriageError::InvalidCategory {
                    name: cat.name.clone(),
                    reason: "duplicate category name".to_string(),
                });
            }
            if cat.keywords.is_empty() {
                return Err(TriageError::InvalidCategory {
                    name: cat.name.clone(),
                    reason: "keyword list is empty".to_string(),
                });
            }
            for keyword in &cat.keywords {
                if keyword.is_empty() {
                    return Err(TriageError::InvalidCategory {
                        name: cat.name.clone(),
                        reason: "empty keyword".to_string(),
                    });
                }
                if *keyword != keyword.to_lowercase() {
                    return Err(TriageError::InvalidCategory {
                        name: cat.name.clone(),
                        reason: format!("keyword \"{}\" is not lowercase", keyword),
                    });
                }
            }
            if !(cat.confidence > 0.0 && cat.confidence <= 1.0) {
                return Err(TriageError::InvalidCategory {
                    name: cat.name.clone(),
                    reason: format!("confidence {} outside (0, 1]", cat.confidence),
                });
            }
            if cat.cost_range.0 > cat.cost_range.1 {
                return Err(TriageError::InvalidCategory {
                    name: cat.name.clone(),
                    reason: format!(
                        "cost range {}-{} is inverted",
                        cat.cost_range.0, cat.cost_range.1
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for FaultCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

//! Catalog health checks
//!
//! Validates the active fault catalog the way an operator would want to see
//! it: one line per check, Pass/Warning/Fail, non-zero exit on failure.

use crate::diagnosis::FaultCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    fn symbol(&self) -> &str {
        match self {
            Self::Pass => "✓",
            Self::Warning => "⚠",
            Self::Fail => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub checks: Vec<HealthCheck>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    pub fn print(&self) {
        println!("\n╔═══════════════════════════════════════════════════════╗");
        println!("║ Autotriage Catalog Health Check                       ║");
        println!("╚═══════════════════════════════════════════════════════╝\n");

        for check in &self.checks {
            println!(
                "  {} {:<16} {}",
                check.status.symbol(),
                format!("{}:", check.name),
                check.message
            );
        }

        println!();

        if self.is_healthy() {
            println!("  ✓ All checks passed - catalog is usable\n");
        } else {
            println!("  ✗ Some checks failed - fix the config overrides\n");
        }
    }
}

/// Runs structural checks against a fault catalog
pub struct CatalogDoctor<'a> {
    catalog: &'a FaultCatalog,
}

impl<'a> CatalogDoctor<'a> {
    pub fn new(catalog: &'a FaultCatalog) -> Self {
        Self { catalog }
    }

    pub fn run_checks(&self) -> HealthReport {
        let mut checks = Vec::new();

        checks.push(self.check_keywords());
        checks.push(self.check_cost_ranges());
        checks.push(self.check_confidence());
        checks.push(self.check_unique_names());
        checks.push(self.check_keyword_collisions());
        checks.push(self.check_short_keywords());

        HealthReport { checks }
    }

    fn check_keywords(&self) -> HealthCheck {
        for cat in self.catalog.categories() {
            if cat.keywords.is_empty() {
                return fail("keywords", format!("'{}' has no keywords", cat.name));
            }
            for keyword in &cat.keywords {
                if keyword.is_empty() || *keyword != keyword.to_lowercase() {
                    return fail(
                        "keywords",
                        format!("'{}' has keyword \"{}\"", cat.name, keyword),
                    );
                }
            }
        }
        pass("keywords", "all non-empty and lowercase")
    }

    fn check_cost_ranges(&self) -> HealthCheck {
        for cat in self.catalog.categories() {
            if cat.cost_range.0 > cat.cost_range.1 {
                return fail(
                    "cost ranges",
                    format!(
                        "'{}' range {}-{} is inverted",
                        cat.name, cat.cost_range.0, cat.cost_range.1
                    ),
                );
            }
        }
        pass("cost ranges", "all ordered min <= max")
    }

    fn check_confidence(&self) -> HealthCheck {
        for cat in self.catalog.categories() {
            if !(cat.confidence > 0.0 && cat.confidence <= 1.0) {
                return fail(
                    "confidence",
                    format!("'{}' confidence {} outside (0, 1]", cat.name, cat.confidence),
                );
            }
        }
        pass("confidence", "all within (0, 1]")
    }

    fn check_unique_names(&self) -> HealthCheck {
        let mut seen = std::collections::HashSet::new();
        for cat in self.catalog.categories() {
            if !seen.insert(cat.name.as_str()) {
                return fail("names", format!("'{}' declared twice", cat.name));
            }
        }
        pass("names", "all unique")
    }

    // A keyword shared by two categories silently biases every tie toward
    // the earlier one.
    fn check_keyword_collisions(&self) -> HealthCheck {
        let mut owners: std::collections::HashMap<&str, &str> = std::collections::HashMap::new();
        for cat in self.catalog.categories() {
            for keyword in &cat.keywords {
                if let Some(owner) = owners.get(keyword.as_str()) {
                    return warn(
                        "collisions",
                        format!(
                            "keyword \"{}\" appears in both '{}' and '{}'",
                            keyword, owner, cat.name
                        ),
                    );
                }
                owners.insert(keyword, &cat.name);
            }
        }
        pass("collisions", "no keyword shared between categories")
    }

    // The matcher is literal substring containment, so very short keywords
    // fire inside unrelated words.
    fn check_short_keywords(&self) -> HealthCheck {
        for cat in self.catalog.categories() {
            for keyword in &cat.keywords {
                if keyword.len() < 3 {
                    return warn(
                        "keyword length",
                        format!(
                            "\"{}\" in '{}' will substring-match unrelated words",
                            keyword, cat.name
                        ),
                    );
                }
            }
        }
        pass("keyword length", "no keyword shorter than 3 chars")
    }
}

fn pass(name: &str, message: &str) -> HealthCheck {
    HealthCheck {
        name: name.to_string(),
        status: CheckStatus::Pass,
        message: message.to_string(),
    }
}

fn warn(name: &str, message: String) -> HealthCheck {
    HealthCheck {
        name: name.to_string(),
        status: CheckStatus::Warning,
        message,
    }
}

fn fail(name: &str, message: String) -> HealthCheck {
    HealthCheck {
        name: name.to_string(),
        status: CheckStatus::Fail,
        message,
    }
}

//! CLI module for autotriage
//!
//! Command dispatch and terminal rendering of diagnosis results.

pub mod args;

pub use args::{Args, Commands};

use anyhow::Result;
use colored::Colorize;

use crate::api;
use crate::batch;
use crate::config::Config;
use crate::diagnosis::{DiagnosisRequest, DiagnosisResult, SymptomClassifier};
use crate::doctor::CatalogDoctor;
use crate::interactive;

/// Run the CLI with parsed arguments
pub fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let classifier = SymptomClassifier::new(config.catalog()?);

    match args.command {
        Some(Commands::Interactive) => interactive::run(&classifier),
        Some(Commands::Batch { ref file }) => batch::run(&classifier, file),
        Some(Commands::Categories) => {
            print_categories(&classifier);
            Ok(())
        }
        Some(Commands::Check) => run_check(&classifier),
        Some(Commands::Config) => print_config(&config),
        None => match args.complaint {
            Some(ref complaint) => one_shot(&classifier, complaint, &args),
            None => anyhow::bail!(
                "no complaint given - try: autotriage \"brakes are squealing\" (see --help)"
            ),
        },
    }
}

fn one_shot(classifier: &SymptomClassifier, complaint: &str, args: &Args) -> Result<()> {
    let vehicle = args.vehicle();

    if args.json {
        let request = DiagnosisRequest {
            complaint: complaint.to_string(),
            vehicle_info: vehicle,
        };
        let response = api::diagnose_request(classifier, &request);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let result = classifier.diagnose(complaint, vehicle.as_ref());
    print_result(&result);
    Ok(())
}

/// Render a diagnosis for the terminal
pub fn print_result(result: &DiagnosisResult) {
    println!();
    println!("{}", "Diagnosis".bold().cyan());
    println!("  {}", result.diagnosis);
    println!();
    println!(
        "  {} {}",
        "Confidence:".bold(),
        format!("{:.0}%", result.confidence * 100.0)
    );
    println!("  {} {}", "Estimated cost:".bold(), result.estimated_cost_range);
    println!("  {} {}", "Repair time:".bold(), result.repair_time);
    println!("  {}", "Suggested parts:".bold());
    for part in &result.suggested_parts {
        println!("    - {}", part);
    }
    println!();
}

fn print_categories(classifier: &SymptomClassifier) {
    println!("\n{}", "Fault categories".bold().cyan());
    for cat in classifier.catalog().categories() {
        println!(
            "  {:<14} confidence {:.2}  cost {}-{}  time {}",
            cat.name.bold(),
            cat.confidence,
            cat.cost_range.0,
            cat.cost_range.1,
            cat.repair_time
        );
        println!("    keywords: {}", cat.keywords.join(", "));
    }
    println!();
}

fn run_check(classifier: &SymptomClassifier) -> Result<()> {
    let report = CatalogDoctor::new(classifier.catalog()).run_checks();
    report.print();
    if report.is_healthy() {
        Ok(())
    } else {
        anyhow::bail!("catalog check failed")
    }
}

fn print_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;
    if config.categories.is_empty() {
        println!("\n{}\n", "No tuning overrides - standard catalog active".bold());
    } else {
        println!("\n{}", rendered);
    }
    println!("config path: {}", Config::config_path()?.display());
    Ok(())
}

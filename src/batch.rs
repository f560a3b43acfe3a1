//! Batch runner
//!
//! Feeds a JSON-lines file of diagnosis requests through the classifier,
//! writing one response envelope per line to stdout. Progress renders on
//! stderr so stdout stays machine-readable.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api;
use crate::diagnosis::{DiagnosisRequest, SymptomClassifier};

pub fn run(classifier: &SymptomClassifier, file: &Path) -> Result<()> {
    let input =
        File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;
    let lines: Vec<String> = BufReader::new(input)
        .lines()
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}")?);

    let mut skipped = 0usize;
    for (index, line) in lines.iter().enumerate() {
        pb.inc(1);

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: DiagnosisRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(err) => {
                skipped += 1;
                pb.suspend(|| eprintln!("line {}: skipping malformed request: {}", index + 1, err));
                continue;
            }
        };

        let response = api::diagnose_request(classifier, &request);
        pb.suspend(|| -> Result<()> {
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        })?;
    }

    pb.finish_and_clear();

    if skipped > 0 {
        eprintln!("{} malformed request(s) skipped", skipped);
    }

    Ok(())
}

//! Interactive triage session
//!
//! rustyline loop with persistent history: each line is a complaint, the
//! diagnosis renders immediately. Ctrl-C/Ctrl-D or "exit" quits.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::print_result;
use crate::diagnosis::SymptomClassifier;

const PROMPT: &str = ">complaint: ";

/// History file: ~/.autotriage_history
fn history_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(".autotriage_history"))
}

pub fn run(classifier: &SymptomClassifier) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    let history = history_path();
    if let Some(path) = &history {
        if path.exists() {
            let _ = editor.load_history(path);
        }
    }

    println!(
        "{}",
        "Interactive triage - describe a symptom, 'exit' to quit".bold()
    );

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                let _ = editor.add_history_entry(line);

                let result = classifier.diagnose(line, None);
                print_result(&result);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }

    Ok(())
}

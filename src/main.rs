//! Autotriage - Main CLI Entry Point

use clap::Parser;
use colored::Colorize;

use autotriage::cli::{self, Args};

fn main() {
    let args = Args::parse();

    if let Err(err) = cli::run(args) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

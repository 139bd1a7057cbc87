use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use loopdep_fix::rewriter::rewrite_file;
use loopdep_fix::rules::builtin_rules;

#[derive(Parser)]
#[command(name = "fix-loop-carried-dep")]
#[command(
	author,
	version,
	about = "Rewrite stale LOOP_CARRIED_DEP identifiers into PATTERN_ or ANTIPATTERN_ constants"
)]
struct Cli {
	/// Files to fix in place, processed in order
	#[arg(value_name = "FILE")]
	files: Vec<PathBuf>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let rules = builtin_rules().context("Failed to load built-in rules")?;

	// First failure aborts the remaining files
	for file in &cli.files {
		println!("Fixing LOOP_CARRIED_DEP in {}...", file.display());
		rewrite_file(&rules, file)
			.with_context(|| format!("Failed to fix {}", file.display()))?;
	}

	Ok(ExitCode::SUCCESS)
}

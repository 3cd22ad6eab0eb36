use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "trailspace")]
#[command(about = "Find and remove trailing whitespace")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Files to check
	#[arg(required = true, value_name = "FILE")]
	pub files: Vec<PathBuf>,

	/// Remove trailing whitespace and write changed files back
	#[arg(long)]
	pub fix: bool,

	/// Exit with status 1 when trailing whitespace is found
	#[arg(long)]
	pub check: bool,

	/// Configuration file (defaults to the user config if present)
	#[arg(short, long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

//! `trailspace` binary.
//!
//! Reports trailing whitespace in files, and removes it with `--fix`.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use trailspace_config::Config;

mod cli;
mod report;
mod run;

use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => {
			Config::load(path).with_context(|| format!("failed to load config {}", path.display()))?
		}
		None => Config::load_default().context("failed to load user config")?,
	};

	let outcome = run::run(&cli, &config, &mut std::io::stdout().lock())?;
	if cli.check && outcome.found > 0 {
		return Ok(ExitCode::FAILURE);
	}
	Ok(ExitCode::SUCCESS)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("TRAILSPACE_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("trailspace=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};
use trailspace_config::Config;
use trailspace_editor::Documents;

use crate::cli::Cli;
use crate::report;

/// Totals over every processed file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
	/// Spans found before any fixing.
	pub found: usize,
	/// Files rewritten by `--fix`.
	pub fixed_files: usize,
}

/// Checks, and with `--fix` cleans, every file named on the command line.
pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<Outcome> {
	let mut outcome = Outcome::default();
	if !config.highlight_enabled() {
		info!("trailing whitespace tracking disabled by configuration");
		return Ok(outcome);
	}

	let mut docs = Documents::new(config.highlight_style());
	for path in &cli.files {
		let id = docs
			.open_path(path)
			.with_context(|| format!("failed to read {}", path.display()))?;
		let doc = docs
			.get_mut(id)
			.with_context(|| format!("document for {} was not opened", path.display()))?;

		let findings = report::findings(path, doc)?;
		for finding in &findings {
			writeln!(out, "{finding}")?;
		}
		outcome.found += findings.len();
		debug!(path = %path.display(), found = findings.len(), "file checked");

		if cli.fix && !findings.is_empty() {
			let removed = doc.remove_all_trailing()?;
			doc.save()
				.with_context(|| format!("failed to write {}", path.display()))?;
			outcome.fixed_files += 1;
			info!(path = %path.display(), removed, "trailing whitespace removed");
		}
		docs.close(id);
	}
	Ok(outcome)
}

//! Per-file trailing-whitespace findings.

use std::fmt;
use std::path::{Path, PathBuf};

use trailspace_editor::Document;
use trailspace_whitespace::{BufferError, TextSource};

/// One trailing-whitespace run, located for humans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
	pub path: PathBuf,
	/// One-based line.
	pub line: usize,
	/// One-based character column.
	pub column: usize,
	/// Run length in characters.
	pub len: usize,
}

impl fmt::Display for Finding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let plural = if self.len == 1 { "" } else { "s" };
		write!(
			f,
			"{}:{}:{}: trailing whitespace ({} char{plural})",
			self.path.display(),
			self.line,
			self.column,
			self.len
		)
	}
}

/// Locates every tracked span of `doc`.
pub fn findings(path: &Path, doc: &mut Document) -> Result<Vec<Finding>, BufferError> {
	let ranges: Vec<_> = doc.trailing()?.spans().iter().map(|s| s.range()).collect();
	ranges
		.into_iter()
		.map(|range| {
			let line_start = doc.line_start(range.start)?;
			Ok(Finding {
				path: path.to_path_buf(),
				line: doc.line_of(range.start)? + 1,
				column: range.start - line_start + 1,
				len: range.len(),
			})
		})
		.collect()
}

//! Caret hints and whitespace removal.

use std::fmt;

use tracing::debug;
use trailspace_primitives::{CharIdx, CharRange};

use crate::error::{BufferError, Result};
use crate::index::SpanIndex;
use crate::source::{TextSink, TextSource};
use crate::span::Span;

#[cfg(test)]
mod tests;

/// Message attached to every trailing-whitespace hint.
pub const HINT_MESSAGE: &str = "Trailing whitespace";

/// How prominently a hint is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
	#[default]
	Hint,
	Warning,
	Error,
}

impl Severity {
	/// Returns the lowercase name used in reports and configuration.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Hint => "hint",
			Self::Warning => "warning",
			Self::Error => "error",
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A fix offered alongside a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fix {
	/// Remove the span on the hinted line.
	RemoveFromLine,
	/// Remove every tracked span in the buffer.
	RemoveAll,
}

impl Fix {
	/// Returns the user-facing title of the fix.
	pub fn title(self) -> &'static str {
		match self {
			Self::RemoveFromLine => "Remove trailing whitespace from line",
			Self::RemoveAll => "Remove all trailing whitespace",
		}
	}
}

/// A diagnostic for the line under the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
	pub severity: Severity,
	pub message: &'static str,
	/// One-based line number.
	pub line: usize,
	pub span: CharRange,
	pub fixes: [Fix; 2],
}

/// Returns the first span on the line containing `offset`.
///
/// The line range includes its terminator. Offsets past the end of the
/// buffer are treated as the end of the buffer.
pub fn span_on_line<'a, A>(
	index: &'a SpanIndex<A>,
	source: &impl TextSource,
	offset: CharIdx,
) -> Option<&'a Span<A>> {
	let offset = offset.min(source.len_chars());
	let line = source.line_range(offset).ok()?;
	index.first_in(line.start, line.end)
}

/// Builds the hint for the line containing `offset`, if it has a span.
pub fn hint_at<A>(index: &SpanIndex<A>, source: &impl TextSource, offset: CharIdx) -> Option<Hint> {
	let span = span_on_line(index, source, offset)?;
	let line = source.line_of(span.start).ok()?;
	Some(Hint {
		severity: Severity::Hint,
		message: HINT_MESSAGE,
		line: line + 1,
		span: span.range(),
		fixes: [Fix::RemoveFromLine, Fix::RemoveAll],
	})
}

/// Deletes one span and returns where the caret ends up.
///
/// A caret inside `[start, end]` lands on `start`. Any other caret is moved
/// left by the deleted length if it sat after the span.
pub fn remove_one<S: TextSink>(sink: &mut S, span: CharRange, caret: CharIdx) -> Result<CharIdx> {
	sink.check_range(span)?;
	sink.atomic_edit(|sink| sink.remove(span.start, span.len()))?;
	debug!(start = span.start, end = span.end, "trailing whitespace removed from line");

	Ok(if caret >= span.start && caret <= span.end {
		span.start
	} else if caret > span.end {
		caret - span.len()
	} else {
		caret
	})
}

/// Deletes every span in `spans` as one atomic edit group.
///
/// Deletion runs in descending start order so earlier offsets stay valid.
/// Returns the number of spans removed. An empty slice opens no group.
pub fn remove_all<S: TextSink, A>(sink: &mut S, spans: &[Span<A>]) -> Result<usize> {
	if spans.is_empty() {
		return Ok(0);
	}

	let mut ranges: Vec<CharRange> = spans.iter().map(Span::range).collect();
	ranges.sort_unstable_by(|a, b| b.start.cmp(&a.start));

	let removed = sink.atomic_edit(|sink| {
		for range in &ranges {
			sink.remove(range.start, range.len())?;
		}
		Ok::<_, BufferError>(ranges.len())
	})?;
	debug!(removed, "trailing whitespace removed from buffer");
	Ok(removed)
}

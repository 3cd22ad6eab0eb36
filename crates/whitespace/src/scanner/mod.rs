//! Trailing-whitespace scanner.
//!
//! A single left-to-right pass over a character sequence. A run of
//! horizontal whitespace becomes a span when it is followed by a line
//! terminator or by the end of the sequence. Any other character discards
//! the pending run.

use trailspace_primitives::{CharIdx, RopeSlice};

use crate::span::Span;

#[cfg(test)]
mod tests;

/// Returns true for every character `ropey` treats as a line break.
///
/// `\r\n` is two terminators here. The `\r` ends the run and the `\n` finds
/// no run open, so the pair still yields exactly one span.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
	)
}

/// Returns true for whitespace that is not a line terminator.
#[inline]
pub fn is_horizontal_whitespace(c: char) -> bool {
	c.is_whitespace() && !is_line_terminator(c)
}

/// Scans `text` for trailing-whitespace runs.
///
/// Spans are offset by `shift` so a slice can be scanned in place, and are
/// returned in ascending order, non-overlapping, one per run.
pub fn scan<A: Clone>(text: impl IntoIterator<Item = char>, shift: CharIdx, attr: &A) -> Vec<Span<A>> {
	let mut spans = Vec::new();
	let mut run_start: Option<CharIdx> = None;
	let mut len = 0;

	for (i, c) in text.into_iter().enumerate() {
		len = i + 1;
		match run_start {
			None if is_horizontal_whitespace(c) => run_start = Some(i),
			Some(start) if is_line_terminator(c) => {
				spans.push(Span::new(shift + start, shift + i, attr.clone()));
				run_start = None;
			}
			_ if !c.is_whitespace() => run_start = None,
			_ => {}
		}
	}

	if let Some(start) = run_start {
		spans.push(Span::new(shift + start, shift + len, attr.clone()));
	}
	spans
}

/// Scans a rope slice whose first character sits at `shift`.
#[inline]
pub fn scan_slice<A: Clone>(text: RopeSlice<'_>, shift: CharIdx, attr: &A) -> Vec<Span<A>> {
	scan(text.chars(), shift, attr)
}

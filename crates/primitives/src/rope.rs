//! Rope utilities and extensions.
//!
//! All helpers work in char coordinates and treat line breaks the same way
//! `ropey` does: `\n`, `\r\n`, lone `\r`, and the Unicode line separators.

use ropey::RopeSlice;

use crate::range::CharIdx;

/// Returns the zero-based line containing `pos`.
///
/// `pos` is clamped to the end of the text, so the end-of-buffer position
/// belongs to the last line.
#[inline]
pub fn line_of(text: RopeSlice, pos: CharIdx) -> usize {
	text.char_to_line(pos.min(text.len_chars()))
}

/// Returns the char index where the line containing `pos` begins.
#[inline]
pub fn line_start(text: RopeSlice, pos: CharIdx) -> CharIdx {
	text.line_to_char(line_of(text, pos))
}

/// Returns the char index where the line after the one containing `pos` begins.
///
/// Returns `None` when `pos` is on the last line, which has no successor.
pub fn next_line_start(text: RopeSlice, pos: CharIdx) -> Option<CharIdx> {
	let next = line_of(text, pos) + 1;
	(next < text.len_lines()).then(|| text.line_to_char(next))
}

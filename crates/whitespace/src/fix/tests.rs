use pretty_assertions::assert_eq;
use rstest::rstest;
use trailspace_primitives::Rope;

use super::*;
use crate::error::BufferError;
use crate::scanner::scan;

/// Rope wrapper that records removals and edit groups.
#[derive(Default)]
struct Recorder {
	text: Rope,
	removed: Vec<(usize, usize)>,
	groups: usize,
	depth: usize,
}

impl Recorder {
	fn new(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			..Self::default()
		}
	}
}

impl TextSource for Recorder {
	fn len_chars(&self) -> usize {
		TextSource::len_chars(&self.text)
	}

	fn chars_in(&self, range: CharRange) -> Result<impl Iterator<Item = char> + '_> {
		self.text.chars_in(range)
	}

	fn line_of(&self, offset: CharIdx) -> Result<usize> {
		TextSource::line_of(&self.text, offset)
	}

	fn line_start(&self, offset: CharIdx) -> Result<CharIdx> {
		TextSource::line_start(&self.text, offset)
	}

	fn line_end_after(&self, offset: CharIdx) -> Result<CharIdx> {
		self.text.line_end_after(offset)
	}
}

impl TextSink for Recorder {
	fn remove(&mut self, start: CharIdx, len: usize) -> Result<()> {
		assert!(self.depth > 0, "removal outside an edit group");
		TextSink::remove(&mut self.text, start, len)?;
		self.removed.push((start, start + len));
		Ok(())
	}

	fn atomic_edit<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
		if self.depth == 0 {
			self.groups += 1;
		}
		self.depth += 1;
		let out = f(self);
		self.depth -= 1;
		out
	}
}

fn index_of(text: &str) -> SpanIndex<()> {
	SpanIndex::from_sorted(scan(text.chars(), 0, &()))
}

#[rstest]
#[case::first_line(0, Some((1, 2)))]
#[case::caret_on_terminator(2, Some((1, 2)))]
#[case::second_line(3, Some((4, 5)))]
#[case::clean_line(6, None)]
#[case::past_end(99, None)]
fn test_span_on_line(#[case] offset: usize, #[case] expected: Option<(usize, usize)>) {
	let rope = Rope::from("a \nb\t\nc");
	let index = index_of("a \nb\t\nc");
	let found = span_on_line(&index, &rope, offset).map(|s| (s.start, s.end));
	assert_eq!(found, expected);
}

#[test]
fn test_hint_at_describes_line() {
	let rope = Rope::from("a \nb\t\nc");
	let index = index_of("a \nb\t\nc");
	let hint = hint_at(&index, &rope, 4).unwrap();
	assert_eq!(
		hint,
		Hint {
			severity: Severity::Hint,
			message: "Trailing whitespace",
			line: 2,
			span: CharRange::new(4, 5),
			fixes: [Fix::RemoveFromLine, Fix::RemoveAll],
		}
	);
	assert_eq!(hint.fixes[0].title(), "Remove trailing whitespace from line");
	assert_eq!(hint.fixes[1].title(), "Remove all trailing whitespace");
	assert!(hint_at(&index, &rope, 6).is_none());
}

#[rstest]
#[case::caret_inside(3, 2)]
#[case::caret_at_end(5, 2)]
#[case::caret_before(1, 1)]
#[case::caret_after(7, 4)]
fn test_remove_one_caret(#[case] caret: usize, #[case] expected: usize) {
	let mut sink = Recorder::new("ab   \ncd");
	let caret = remove_one(&mut sink, CharRange::new(2, 5), caret).unwrap();
	assert_eq!(caret, expected);
	assert_eq!(sink.text.to_string(), "ab\ncd");
	assert_eq!(sink.groups, 1);
}

#[test]
fn test_remove_one_stale_span() {
	let mut sink = Recorder::new("ab");
	let err = remove_one(&mut sink, CharRange::new(1, 4), 0).unwrap_err();
	assert!(matches!(err, BufferError::OutOfBounds { .. }));
	assert_eq!(sink.groups, 0);
}

#[test]
fn test_remove_all_descending_in_one_group() {
	let mut sink = Recorder::new("a \nb\t\n");
	let index = index_of("a \nb\t\n");
	let removed = remove_all(&mut sink, index.spans()).unwrap();
	assert_eq!(removed, 2);
	assert_eq!(sink.removed, vec![(4, 5), (1, 2)]);
	assert_eq!(sink.groups, 1);
	assert_eq!(sink.text.to_string(), "a\nb\n");
}

#[test]
fn test_remove_all_empty_is_noop() {
	let mut sink = Recorder::new("clean\n");
	assert_eq!(remove_all::<_, ()>(&mut sink, &[]).unwrap(), 0);
	assert_eq!(sink.groups, 0);
}

#[test]
fn test_remove_all_unsorted_input() {
	let mut sink = Recorder::new("x \ny \nz ");
	let spans = vec![Span::new(4, 5, ()), Span::new(7, 8, ()), Span::new(1, 2, ())];
	remove_all(&mut sink, &spans).unwrap();
	assert_eq!(sink.removed, vec![(7, 8), (4, 5), (1, 2)]);
	assert_eq!(sink.text.to_string(), "x\ny\nz");
}

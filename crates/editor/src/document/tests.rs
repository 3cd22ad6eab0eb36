use pretty_assertions::assert_eq;
use trailspace_config::{Color, HighlightStyle};
use trailspace_primitives::{Change, CharRange, EditError, Transaction};
use trailspace_whitespace::{Fix, Severity, scan};

use super::*;

fn spans(doc: &mut Document) -> Vec<(usize, usize)> {
	doc.trailing()
		.unwrap()
		.spans()
		.iter()
		.map(|s| (s.start, s.end))
		.collect()
}

fn full_scan(doc: &Document) -> Vec<(usize, usize)> {
	scan(doc.content().chars(), 0, &())
		.into_iter()
		.map(|s| (s.start, s.end))
		.collect()
}

#[test]
fn tracker_is_created_on_first_access() {
	let mut doc = Document::new("a \nb\t\nc", None);
	doc.insert(0, "x").unwrap();
	assert_eq!(spans(&mut doc), vec![(2, 3), (5, 6)]);
}

#[test]
fn insert_recomputes_edited_line() {
	let mut doc = Document::new("a \n", None);
	assert_eq!(spans(&mut doc), vec![(1, 2)]);
	doc.insert(1, "x").unwrap();
	assert_eq!(doc.content().to_string(), "ax \n");
	assert_eq!(spans(&mut doc), vec![(2, 3)]);
}

#[test]
fn spans_carry_document_style() {
	let style = HighlightStyle::background(Color::rgb(1, 2, 3));
	let mut doc = Document::new("x \n", None).with_style(style);
	assert_eq!(doc.trailing().unwrap().spans()[0].attr, style);
}

#[test]
fn multi_change_transaction_keeps_spans_exact() {
	let mut doc = Document::new("one \ntwo\nthree\t\n", None);
	spans(&mut doc);
	let tx = Transaction::change(
		doc.content().slice(..),
		[
			Change {
				start: 0,
				end: 3,
				replacement: Some("1  ".into()),
			},
			Change::delete(CharRange::new(5, 9)),
			Change::insert(14, "   "),
		],
	);
	doc.apply(&tx).unwrap();
	assert_eq!(spans(&mut doc), full_scan(&doc));
}

#[test]
fn readonly_rejects_edits() {
	let mut doc = Document::new("a \n", None);
	doc.set_readonly(true);
	assert_eq!(doc.insert(0, "x"), Err(EditError::ReadOnly));
	assert_eq!(doc.undo(), Err(EditError::ReadOnly));
	assert_eq!(doc.version(), 0);
	assert!(!doc.is_modified());
}

#[test]
fn out_of_bounds_edit_is_rejected() {
	let mut doc = Document::new("abc", None);
	assert!(matches!(
		doc.delete(CharRange::new(2, 9)),
		Err(EditError::OutOfBounds { start: 2, end: 9, len: 3 })
	));
	assert!(doc.insert(4, "x").is_err());
}

#[test]
fn stale_transaction_is_rejected() {
	let mut doc = Document::new("abc", None);
	let other = Rope::from("abcdef");
	let tx = Transaction::insert(other.slice(..), 6, "x");
	assert!(matches!(doc.apply(&tx), Err(EditError::OutOfBounds { .. })));
	assert_eq!(doc.content().to_string(), "abc");
}

#[test]
fn commit_result_tracks_versions() {
	let mut doc = Document::new("abc", None);
	let result = doc.insert(3, "d").unwrap();
	assert_eq!(result.version_before, 0);
	assert_eq!(result.version_after, 1);
	assert!(result.undo_recorded);
	assert!(doc.is_modified());
}

#[test]
fn undo_and_redo_keep_spans_exact() {
	let mut doc = Document::new("ab  \ncd\n", None);
	spans(&mut doc);
	doc.insert(4, "x").unwrap();
	doc.delete(5..7).unwrap();
	doc.insert(0, "\t \n").unwrap();
	let after = doc.content().to_string();

	while doc.undo().unwrap() {
		assert_eq!(spans(&mut doc), full_scan(&doc));
	}
	assert_eq!(doc.content().to_string(), "ab  \ncd\n");
	assert_eq!(spans(&mut doc), vec![(2, 4)]);

	while doc.redo().unwrap() {
		assert_eq!(spans(&mut doc), full_scan(&doc));
	}
	assert_eq!(doc.content().to_string(), after);
}

#[test]
fn remove_all_trailing_is_one_undo_step() {
	let mut doc = Document::new("a \nb\t\n", None);
	assert_eq!(spans(&mut doc), vec![(1, 2), (4, 5)]);

	assert_eq!(doc.remove_all_trailing().unwrap(), 2);
	assert_eq!(doc.content().to_string(), "a\nb\n");
	assert!(spans(&mut doc).is_empty());
	assert_eq!(doc.undo_len(), 1);

	assert!(doc.undo().unwrap());
	assert_eq!(doc.content().to_string(), "a \nb\t\n");
	assert_eq!(spans(&mut doc), vec![(1, 2), (4, 5)]);
	assert!(!doc.can_undo());
}

#[test]
fn remove_all_trailing_on_clean_buffer() {
	let mut doc = Document::new("clean\ntext\n", None);
	assert_eq!(doc.remove_all_trailing().unwrap(), 0);
	assert!(!doc.can_undo());
	assert_eq!(doc.version(), 0);
}

#[test]
fn hint_at_cursor_reports_line() {
	let mut doc = Document::new("a \nb\t\nc", None);
	doc.set_cursor(3);
	let hint = doc.hint_at_cursor().unwrap().expect("hint on line 2");
	assert_eq!(hint.line, 2);
	assert_eq!(hint.severity, Severity::Hint);
	assert_eq!(hint.span, CharRange::new(4, 5));
	assert_eq!(hint.fixes, [Fix::RemoveFromLine, Fix::RemoveAll]);

	doc.set_cursor(6);
	assert!(doc.hint_at_cursor().unwrap().is_none());
}

#[test]
fn remove_trailing_on_line_moves_caret() {
	let mut doc = Document::new("ab   \ncd  ", None);
	doc.set_cursor(4);
	let span = doc.hint_at_cursor().unwrap().unwrap().span;
	doc.remove_trailing_on_line(span).unwrap();
	assert_eq!(doc.content().to_string(), "ab\ncd  ");
	assert_eq!(doc.cursor(), 2);
	assert_eq!(spans(&mut doc), vec![(5, 7)]);

	doc.set_cursor(7);
	doc.remove_trailing_on_line(CharRange::new(5, 7)).unwrap();
	assert_eq!(doc.cursor(), 5);
	assert!(spans(&mut doc).is_empty());
}

#[test]
fn caret_after_span_shifts_left() {
	let mut doc = Document::new("ab   \ncd", None);
	doc.set_cursor(8);
	doc.remove_trailing_on_line(CharRange::new(2, 5)).unwrap();
	assert_eq!(doc.cursor(), 5);
}

#[test]
fn atomic_edit_groups_nest() {
	let mut doc = Document::new("abc", None);
	doc.atomic_edit(|doc| {
		doc.insert(0, "1").unwrap();
		doc.atomic_edit(|doc| doc.insert(4, "2").unwrap());
		doc.insert(0, "3").unwrap();
	});
	assert_eq!(doc.content().to_string(), "31abc2");
	assert_eq!(doc.undo_len(), 1);
	doc.undo().unwrap();
	assert_eq!(doc.content().to_string(), "abc");
}

#[test]
fn set_style_rescans() {
	let mut doc = Document::new("x \n", None);
	spans(&mut doc);
	let style = HighlightStyle::background(Color::BLACK);
	doc.set_style(style);
	assert_eq!(doc.trailing().unwrap().spans()[0].attr, style);
}

#[test]
fn save_and_open_roundtrip() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("file.txt");
	std::fs::write(&path, "a \nb\t\n").unwrap();

	let mut doc = Document::open(&path).unwrap();
	doc.remove_all_trailing().unwrap();
	assert!(doc.is_modified());
	doc.save().unwrap();
	assert!(!doc.is_modified());

	assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[test]
fn save_without_path_fails() {
	let mut doc = Document::scratch();
	assert!(doc.save().is_err());
}

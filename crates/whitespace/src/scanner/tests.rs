use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use trailspace_primitives::Rope;

use super::*;

fn ranges(text: &str) -> Vec<(usize, usize)> {
	scan(text.chars(), 0, &())
		.into_iter()
		.map(|s| (s.start, s.end))
		.collect()
}

#[rstest]
#[case::empty("", vec![])]
#[case::clean("abc\ndef", vec![])]
#[case::before_newline("abc  \ndef", vec![(3, 5)])]
#[case::at_end_of_buffer("abc\t ", vec![(3, 5)])]
#[case::whitespace_only_line("   ", vec![(0, 3)])]
#[case::blank_line_between("a\n \t\nb", vec![(2, 4)])]
#[case::inner_space_ignored("a b\n", vec![])]
#[case::two_lines("a \nb\t\nc", vec![(1, 2), (4, 5)])]
#[case::crlf("a \r\nb", vec![(1, 2)])]
#[case::lone_cr("a \rb", vec![(1, 2)])]
#[case::unicode_separator("a\u{00A0}\u{2028}b", vec![(1, 2)])]
#[case::form_feed_terminates("a \u{000C}", vec![(1, 2)])]
fn test_scan(#[case] text: &str, #[case] expected: Vec<(usize, usize)>) {
	assert_eq!(ranges(text), expected);
}

#[test]
fn test_scan_applies_shift() {
	let spans = scan("x  \n".chars(), 10, &"ws");
	assert_eq!(spans, vec![Span::new(11, 13, "ws")]);
}

#[test]
fn test_scan_slice_matches_scan() {
	let rope = Rope::from("head\nab  \ncd \n");
	let slice = rope.slice(5..);
	assert_eq!(scan_slice(slice, 5, &()), scan("head\nab  \ncd \n".chars(), 0, &()));
}

#[test]
fn test_terminators_are_whitespace() {
	for c in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}'] {
		assert!(is_line_terminator(c));
		assert!(c.is_whitespace());
		assert!(!is_horizontal_whitespace(c));
	}
	assert!(is_horizontal_whitespace('\t'));
	assert!(is_horizontal_whitespace('\u{3000}'));
}

#[test]
fn test_terminators_agree_with_rope_lines() {
	for c in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}'] {
		let rope = Rope::from(format!("a{c}b").as_str());
		assert_eq!(rope.len_lines(), 2, "{c:?} should split lines");
	}
}

proptest! {
	/// Every span is whitespace, non-empty, ordered, and ends at a terminator or the end.
	#[test]
	fn prop_spans_are_trailing_runs(text in "[ a\t\n\r]{0,80}") {
		let chars: Vec<char> = text.chars().collect();
		let spans = scan(text.chars(), 0, &());
		let mut last_end = 0;
		for span in &spans {
			prop_assert!(span.start < span.end);
			prop_assert!(span.start >= last_end);
			prop_assert!(chars[span.start..span.end].iter().all(|&c| is_horizontal_whitespace(c)));
			prop_assert!(span.end == chars.len() || is_line_terminator(chars[span.end]));
			prop_assert!(span.start == 0 || !is_horizontal_whitespace(chars[span.start - 1]));
			last_end = span.end;
		}
	}

	/// Shifting the input by a prefix shifts every span by the prefix length.
	#[test]
	fn prop_shift_is_translation(text in "[ a\t\n]{0,60}", shift in 0usize..1000) {
		let base = scan(text.chars(), 0, &());
		let shifted = scan(text.chars(), shift, &());
		prop_assert_eq!(base.len(), shifted.len());
		for (a, b) in base.iter().zip(&shifted) {
			prop_assert_eq!((a.start + shift, a.end + shift), (b.start, b.end));
		}
	}
}

//! Document - a text buffer with undo history and trailing-whitespace tracking.
//!
//! [`Document::apply`] is the only way text changes. Every transaction it
//! commits, including undo and redo replays, reaches the trailing-whitespace
//! tracker as a series of [`EditEvent`]s before `apply` returns, so the spans
//! are always in step with the text.

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, trace};
use trailspace_config::HighlightStyle;
use trailspace_primitives::{
	Bias, CharIdx, CharLen, CharRange, CommitResult, EditError, EditEvent, Rope, Transaction,
};
use trailspace_whitespace::{BufferError, Hint, TextSink, TextSource, TrailingWhitespace, fix};

use crate::undo_store::TxnUndoStore;

/// Counter for generating unique document IDs.
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl DocumentId {
	/// Generates a new unique document ID.
	pub fn next() -> Self {
		Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Trailing-whitespace tracker specialised to theme styles.
pub type Trailing = TrailingWhitespace<HighlightStyle>;

/// A text buffer.
///
/// # Field Access
///
/// Core fields are private to enforce invariants. Text only changes through
/// [`apply`](Self::apply) and the helpers built on it.
pub struct Document {
	/// Unique identifier for this document.
	pub id: DocumentId,

	/// The text content.
	content: Rope,

	/// Associated file path (None for scratch documents).
	pub path: Option<PathBuf>,

	/// Caret position.
	cursor: CharIdx,

	/// Whether the document has unsaved changes.
	modified: bool,

	/// Whether the document is read-only (prevents all text modifications).
	readonly: bool,

	/// Document version, incremented on every applied transaction.
	version: u64,

	undo: TxnUndoStore,

	/// Attribute attached to trailing-whitespace spans.
	style: HighlightStyle,

	/// Created on first access.
	trailing: Option<Trailing>,
}

impl Document {
	/// Creates a new document with the given content and optional file path.
	pub fn new(content: &str, path: Option<PathBuf>) -> Self {
		Self::from_rope(Rope::from(content), path)
	}

	/// Creates a new scratch document (no file path).
	pub fn scratch() -> Self {
		Self::new("", None)
	}

	/// Reads a document from disk.
	pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
		let path = path.as_ref();
		let content = Rope::from_reader(BufReader::new(File::open(path)?))?;
		Ok(Self::from_rope(content, Some(path.to_path_buf())))
	}

	fn from_rope(content: Rope, path: Option<PathBuf>) -> Self {
		Self {
			id: DocumentId::next(),
			content,
			path,
			cursor: 0,
			modified: false,
			readonly: false,
			version: 0,
			undo: TxnUndoStore::new(),
			style: HighlightStyle::default(),
			trailing: None,
		}
	}

	/// Sets the style given to trailing-whitespace spans.
	///
	/// Drops the current spans; the next access rescans with the new style.
	pub fn with_style(mut self, style: HighlightStyle) -> Self {
		self.set_style(style);
		self
	}

	/// Sets the style given to trailing-whitespace spans.
	pub fn set_style(&mut self, style: HighlightStyle) {
		self.style = style;
		self.trailing = None;
	}

	/// Writes the content back to the document's path.
	pub fn save(&mut self) -> io::Result<()> {
		let Some(path) = &self.path else {
			return Err(io::Error::other("document has no path"));
		};
		let mut writer = BufWriter::new(File::create(path)?);
		self.content.write_to(&mut writer)?;
		writer.flush()?;
		self.modified = false;
		debug!(path = %path.display(), version = self.version, "document saved");
		Ok(())
	}

	/// Applies an edit through the authoritative edit gate.
	///
	/// This is the single entry point for document modifications. It checks the
	/// read-only flag, records undo, applies the transaction, bumps the version,
	/// maps the caret, and brings trailing-whitespace spans up to date.
	///
	/// # Errors
	///
	/// Returns [`EditError::ReadOnly`] if the document is read-only, and
	/// [`EditError::OutOfBounds`] if the transaction was built for a buffer of
	/// a different length.
	pub fn apply(&mut self, tx: &Transaction) -> Result<CommitResult, EditError> {
		self.ensure_writable()?;
		let len = self.content.len_chars();
		if tx.changes().len() != len {
			return Err(EditError::OutOfBounds {
				start: 0,
				end: tx.changes().len(),
				len,
			});
		}

		let version_before = self.version;
		if tx.is_identity() {
			return Ok(CommitResult {
				version_before,
				version_after: version_before,
				undo_recorded: false,
			});
		}

		self.undo.record_transaction(tx.clone(), &self.content);
		self.commit(tx);
		Ok(CommitResult {
			version_before,
			version_after: self.version,
			undo_recorded: true,
		})
	}

	/// Inserts `text` at `pos`.
	pub fn insert(&mut self, pos: CharIdx, text: &str) -> Result<CommitResult, EditError> {
		self.check_edit_range(CharRange::point(pos))?;
		let tx = Transaction::insert(self.content.slice(..), pos, text);
		self.apply(&tx)
	}

	/// Deletes the characters in `range`.
	pub fn delete(&mut self, range: impl Into<CharRange>) -> Result<CommitResult, EditError> {
		let range = range.into();
		self.check_edit_range(range)?;
		let tx = Transaction::delete(self.content.slice(..), [range]);
		self.apply(&tx)
	}

	/// Reverts the most recent undo step.
	///
	/// Returns `false` if there was nothing to undo.
	pub fn undo(&mut self) -> Result<bool, EditError> {
		self.ensure_writable()?;
		let Some(step) = self.undo.undo().cloned() else {
			return Ok(false);
		};
		for tx in step.undo_txs() {
			self.commit(tx);
		}
		self.undo.commit_undo();
		Ok(true)
	}

	/// Reapplies the most recently undone step.
	///
	/// Returns `false` if there was nothing to redo.
	pub fn redo(&mut self) -> Result<bool, EditError> {
		self.ensure_writable()?;
		let Some(step) = self.undo.redo().cloned() else {
			return Ok(false);
		};
		for tx in step.redo_txs() {
			self.commit(tx);
		}
		self.undo.commit_redo();
		Ok(true)
	}

	/// Opens an edit group; every transaction until the matching
	/// [`end_group`](Self::end_group) becomes one undo step.
	pub fn begin_group(&mut self) {
		self.undo.begin_group();
	}

	/// Closes an edit group.
	pub fn end_group(&mut self) {
		self.undo.end_group();
	}

	/// Applies `tx` and reports each of its operations to the tracker.
	fn commit(&mut self, tx: &Transaction) {
		let trailing = &mut self.trailing;
		tx.apply_observed(&mut self.content, |rope, event| {
			observe(trailing, rope, event);
		});
		self.cursor = tx.map_pos(self.cursor, Bias::Right);
		self.modified = true;
		self.version = self.version.wrapping_add(1);
		trace!(version = self.version, len = self.content.len_chars(), "transaction applied");
	}

	fn ensure_writable(&self) -> Result<(), EditError> {
		if self.readonly {
			return Err(EditError::ReadOnly);
		}
		Ok(())
	}

	fn check_edit_range(&self, range: CharRange) -> Result<(), EditError> {
		let len = self.content.len_chars();
		if range.end > len {
			return Err(EditError::OutOfBounds {
				start: range.start,
				end: range.end,
				len,
			});
		}
		Ok(())
	}

	/// Returns the trailing-whitespace tracker, scanning the buffer on first use.
	pub fn trailing(&mut self) -> Result<&Trailing, BufferError> {
		tracker(&mut self.trailing, &self.content, self.style)
	}

	/// Returns the hint for the line under the caret, if it has trailing whitespace.
	pub fn hint_at_cursor(&mut self) -> Result<Option<Hint>, BufferError> {
		let tracker = tracker(&mut self.trailing, &self.content, self.style)?;
		Ok(tracker
			.index()
			.and_then(|index| fix::hint_at(index, &self.content, self.cursor)))
	}

	/// Removes one span of trailing whitespace and places the caret.
	pub fn remove_trailing_on_line(&mut self, span: CharRange) -> Result<(), BufferError> {
		let cursor = self.cursor;
		self.cursor = fix::remove_one(self, span, cursor)?;
		Ok(())
	}

	/// Removes every tracked span as a single undo step.
	///
	/// Returns the number of spans removed.
	pub fn remove_all_trailing(&mut self) -> Result<usize, BufferError> {
		let spans = self.trailing()?.spans().to_vec();
		let removed = fix::remove_all(self, &spans)?;
		debug!(id = self.id.0, removed, "trailing whitespace cleared");
		Ok(removed)
	}

	/// Returns a reference to the document's text content.
	pub fn content(&self) -> &Rope {
		&self.content
	}

	/// Returns the caret position.
	pub fn cursor(&self) -> CharIdx {
		self.cursor
	}

	/// Moves the caret, clamped to the end of the buffer.
	pub fn set_cursor(&mut self, pos: CharIdx) {
		self.cursor = pos.min(self.content.len_chars());
	}

	/// Returns whether the document has unsaved changes.
	pub fn is_modified(&self) -> bool {
		self.modified
	}

	/// Sets the modified flag.
	pub fn set_modified(&mut self, modified: bool) {
		self.modified = modified;
	}

	/// Returns whether the document is read-only.
	pub fn is_readonly(&self) -> bool {
		self.readonly
	}

	/// Sets the read-only flag.
	pub fn set_readonly(&mut self, readonly: bool) {
		self.readonly = readonly;
	}

	/// Returns the document version.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Returns whether undo is available.
	pub fn can_undo(&self) -> bool {
		self.undo.can_undo()
	}

	/// Returns whether redo is available.
	pub fn can_redo(&self) -> bool {
		self.undo.can_redo()
	}

	/// Returns the number of undo steps.
	pub fn undo_len(&self) -> usize {
		self.undo.undo_len()
	}
}

/// Returns the tracker, creating and scanning it if needed.
fn tracker<'a>(
	slot: &'a mut Option<Trailing>,
	content: &Rope,
	style: HighlightStyle,
) -> Result<&'a Trailing, BufferError> {
	let tracker = slot.get_or_insert_with(|| Trailing::new(style));
	tracker.ensure_initialized(content)?;
	Ok(&*tracker)
}

/// Feeds one edit to the tracker.
///
/// A failed update leaves spans that can no longer be trusted, so the tracker
/// is reset and the next access scans the buffer again.
fn observe(slot: &mut Option<Trailing>, rope: &Rope, event: EditEvent) {
	let Some(tracker) = slot else {
		return;
	};
	if let Err(err) = tracker.on_edit(rope, event) {
		error!(error = %err, ?event, "trailing whitespace update failed");
		tracker.reset();
	}
}

impl TextSource for Document {
	fn len_chars(&self) -> CharLen {
		self.content.len_chars()
	}

	fn chars_in(&self, range: CharRange) -> Result<impl Iterator<Item = char> + '_, BufferError> {
		self.content.chars_in(range)
	}

	fn line_of(&self, offset: CharIdx) -> Result<usize, BufferError> {
		TextSource::line_of(&self.content, offset)
	}

	fn line_start(&self, offset: CharIdx) -> Result<CharIdx, BufferError> {
		TextSource::line_start(&self.content, offset)
	}

	fn line_end_after(&self, offset: CharIdx) -> Result<CharIdx, BufferError> {
		self.content.line_end_after(offset)
	}
}

impl TextSink for Document {
	fn remove(&mut self, start: CharIdx, len: CharLen) -> Result<(), BufferError> {
		let range = CharRange::with_len(start, len);
		self.check_range(range)?;
		self.delete(range)?;
		Ok(())
	}

	fn atomic_edit<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
		self.begin_group();
		let out = f(self);
		self.end_group();
		out
	}
}

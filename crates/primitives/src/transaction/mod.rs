//! Undo/redo transaction primitives.
//!
//! A [`Transaction`] wraps a [`ChangeSet`] built from a sorted list of
//! [`Change`]s. Transactions are the only way buffers are edited, which lets
//! undo stores keep inverses instead of document copies and lets observers
//! follow every individual insert and delete.

mod changeset;
mod types;


pub use changeset::ChangeSet;
pub use types::{Bias, Change, Tendril};

use crate::edit::EditEvent;
use crate::range::{CharIdx, CharRange};
use crate::{Rope, RopeSlice};

/// A document edit that can be applied, inverted, and used to map positions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transaction {
	changes: ChangeSet,
}

impl Transaction {
	/// Builds a transaction from changes sorted by `start` and non-overlapping.
	///
	/// Change bounds are clamped to the document, so a stale change can never
	/// address text past the end.
	pub fn change(doc: RopeSlice, changes: impl IntoIterator<Item = Change>) -> Self {
		let len = doc.len_chars();
		let mut cs = ChangeSet::new();
		let mut last = 0;

		for Change {
			start,
			end,
			replacement,
		} in changes
		{
			let start = start.clamp(last, len);
			let end = end.clamp(start, len);

			cs.retain(start - last);
			if let Some(text) = replacement {
				cs.insert(text);
			}
			cs.delete(end - start);
			last = end;
		}

		cs.retain(len - last);
		Self { changes: cs }
	}

	/// Builds a transaction deleting each of `ranges` (sorted, non-overlapping).
	pub fn delete(doc: RopeSlice, ranges: impl IntoIterator<Item = CharRange>) -> Self {
		Self::change(doc, ranges.into_iter().map(Change::delete))
	}

	/// Builds a transaction inserting `text` at `pos`.
	pub fn insert(doc: RopeSlice, pos: CharIdx, text: impl Into<Tendril>) -> Self {
		Self::change(doc, [Change::insert(pos, text)])
	}

	/// Returns the underlying changeset.
	pub fn changes(&self) -> &ChangeSet {
		&self.changes
	}

	/// Returns true if applying this transaction leaves the document unchanged.
	pub fn is_identity(&self) -> bool {
		self.changes.is_identity()
	}

	/// Applies this transaction to a document.
	pub fn apply(&self, doc: &mut Rope) {
		self.changes.apply(doc);
	}

	/// Applies this transaction, reporting each insert and delete as it lands.
	///
	/// See [`ChangeSet::apply_observed`].
	pub fn apply_observed(&self, doc: &mut Rope, observer: impl FnMut(&Rope, EditEvent)) {
		self.changes.apply_observed(doc, observer);
	}

	/// Returns the transaction that undoes this one.
	///
	/// `doc` must be the document before this transaction was applied.
	pub fn invert(&self, doc: &Rope) -> Transaction {
		Transaction {
			changes: self.changes.invert(doc),
		}
	}

	/// Maps a position in the pre-edit document to the post-edit document.
	pub fn map_pos(&self, pos: CharIdx, bias: Bias) -> CharIdx {
		self.changes.map_pos(pos, bias)
	}
}

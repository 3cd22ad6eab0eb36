use super::types::{Bias, Insertion, Operation, Tendril};
use crate::Rope;
use crate::edit::EditEvent;
use crate::range::{CharIdx, CharLen};

/// Retain/delete/insert operations over a source document of length `len`.
///
/// Undo stores keep the inverse changeset of every edit instead of a copy of
/// the text, and [`apply_observed`](Self::apply_observed) turns each step into
/// an [`EditEvent`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
	pub(super) changes: Vec<Operation>,
	pub(super) len: usize,
}

impl ChangeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the length of the document this changeset applies to.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.changes.is_empty()
	}

	/// Returns true if applying this changeset leaves the document unchanged.
	pub fn is_identity(&self) -> bool {
		self.changes.iter().all(|op| matches!(op, Operation::Retain(_)))
	}

	pub(crate) fn retain(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}

		self.len += n;

		if let Some(Operation::Retain(count)) = self.changes.last_mut() {
			*count += n;
		} else {
			self.changes.push(Operation::Retain(n));
		}
	}

	pub(crate) fn delete(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}

		self.len += n;

		if let Some(Operation::Delete(count)) = self.changes.last_mut() {
			*count += n;
		} else {
			self.changes.push(Operation::Delete(n));
		}
	}

	/// Appends an insert. A replacement always reads insert-then-delete, so
	/// the deleted text is still in place when the inverse is built.
	pub(crate) fn insert(&mut self, text: Tendril) {
		if text.is_empty() {
			return;
		}

		let ins = Insertion::new(text);

		match self.changes.as_mut_slice() {
			[.., Operation::Insert(prev)] | [.., Operation::Insert(prev), Operation::Delete(_)] => {
				prev.text.push_str(&ins.text);
				prev.char_len += ins.char_len;
			}
			[.., last @ Operation::Delete(_)] => {
				let del = std::mem::replace(last, Operation::Insert(ins));
				self.changes.push(del);
			}
			_ => {
				self.changes.push(Operation::Insert(ins));
			}
		}
	}

	pub fn apply(&self, doc: &mut Rope) {
		self.apply_observed(doc, |_, _| {});
	}

	/// Applies this changeset one operation at a time, reporting each edit.
	///
	/// `observer` runs after every insert or delete with the document in its
	/// intermediate state, so the event's offsets are valid in the rope it
	/// receives.
	pub fn apply_observed(&self, doc: &mut Rope, mut observer: impl FnMut(&Rope, EditEvent)) {
		let mut pos = 0;
		for op in &self.changes {
			match op {
				Operation::Retain(n) => {
					pos += n;
				}
				Operation::Delete(n) => {
					doc.remove(pos..pos + n);
					observer(doc, EditEvent::delete(pos, *n));
				}
				Operation::Insert(ins) => {
					doc.insert(pos, &ins.text);
					observer(doc, EditEvent::insert(pos, ins.char_len));
					pos += ins.char_len;
				}
			}
		}
	}

	/// Builds the changeset that undoes this one.
	///
	/// `doc` is the document before this changeset was applied; deleted text
	/// is copied out of it.
	pub fn invert(&self, doc: &Rope) -> ChangeSet {
		let mut result = ChangeSet::new();

		let mut pos = 0;
		for op in &self.changes {
			match op {
				Operation::Retain(n) => {
					result.retain(*n);
					pos += n;
				}
				Operation::Delete(n) => {
					result.insert(doc.slice(pos..pos + n).to_string());
					pos += n;
				}
				Operation::Insert(ins) => {
					result.delete(ins.char_len);
				}
			}
		}

		result
	}

	/// Moves a cursor position across this changeset.
	///
	/// A position inside deleted text lands where the deletion happened.
	pub fn map_pos(&self, pos: CharIdx, bias: Bias) -> CharIdx {
		let (mut src, mut dst) = (0, 0);

		for op in &self.changes {
			match *op {
				Operation::Retain(n) if src + n > pos => return dst + (pos - src),
				Operation::Retain(n) => {
					src += n;
					dst += n;
				}
				Operation::Delete(n) if src + n > pos => return dst,
				Operation::Delete(n) => src += n,
				Operation::Insert(ref ins) => {
					if src < pos || bias == Bias::Right {
						dst += ins.char_len;
					}
				}
			}
		}

		dst + pos.saturating_sub(src)
	}
}

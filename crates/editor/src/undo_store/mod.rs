//! Transaction-based undo history.
//!
//! Each undo step stores the forward transactions of one edit group and their
//! inverses. Steps hold only deltas, never rope snapshots. Replaying a step
//! goes through the document's edit path, so everything observing edits sees
//! undo and redo as ordinary changes.


use trailspace_primitives::{Rope, Transaction};

/// Maximum undo history size.
pub const MAX_UNDO: usize = 100;

/// One undoable unit: every transaction committed inside one edit group.
#[derive(Debug, Clone, Default)]
pub struct TxnUndoStep {
	/// Inverses, in commit order.
	undo: Vec<Transaction>,
	/// Forward transactions, in commit order.
	redo: Vec<Transaction>,
}

impl TxnUndoStep {
	/// Returns the transactions that revert this step, in application order.
	pub fn undo_txs(&self) -> impl Iterator<Item = &Transaction> {
		self.undo.iter().rev()
	}

	/// Returns the transactions that reapply this step, in application order.
	pub fn redo_txs(&self) -> impl Iterator<Item = &Transaction> {
		self.redo.iter()
	}

	/// Returns the number of transactions in this step.
	pub fn len(&self) -> usize {
		self.redo.len()
	}

	/// Returns true if the step holds no transactions.
	pub fn is_empty(&self) -> bool {
		self.redo.is_empty()
	}

	fn push(&mut self, redo_tx: Transaction, before: &Rope) {
		self.undo.push(redo_tx.invert(before));
		self.redo.push(redo_tx);
	}
}

/// Transaction-based undo store with nestable edit groups.
///
/// Outside a group every recorded transaction is its own step. Between
/// [`begin_group`](Self::begin_group) and the matching
/// [`end_group`](Self::end_group), transactions accumulate into one step that
/// is pushed when the outermost group closes.
#[derive(Debug, Default)]
pub struct TxnUndoStore {
	undo_stack: Vec<TxnUndoStep>,
	redo_stack: Vec<TxnUndoStep>,
	open: TxnUndoStep,
	depth: usize,
}

impl TxnUndoStore {
	/// Creates a new empty transaction store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns whether undo is available.
	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	/// Returns whether redo is available.
	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	/// Returns the undo stack length.
	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	/// Returns the redo stack length.
	pub fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}

	/// Returns true while an edit group is open.
	pub fn in_group(&self) -> bool {
		self.depth > 0
	}

	/// Opens an edit group. Groups nest; only the outermost one counts.
	pub fn begin_group(&mut self) {
		self.depth += 1;
	}

	/// Closes an edit group.
	///
	/// Closing the outermost group pushes everything recorded inside it as a
	/// single step. An empty group leaves no step behind.
	pub fn end_group(&mut self) {
		let Some(depth) = self.depth.checked_sub(1) else {
			return;
		};
		self.depth = depth;
		if depth == 0 && !self.open.is_empty() {
			let step = std::mem::take(&mut self.open);
			self.push_step(step);
		}
	}

	/// Records a transaction for undo.
	///
	/// Computes the inverse against `before`, the document as it was before
	/// `redo_tx` was applied.
	pub fn record_transaction(&mut self, redo_tx: Transaction, before: &Rope) {
		self.redo_stack.clear();
		if self.in_group() {
			self.open.push(redo_tx, before);
			return;
		}
		let mut step = TxnUndoStep::default();
		step.push(redo_tx, before);
		self.push_step(step);
	}

	/// Returns the step to revert, or `None` if nothing to undo.
	///
	/// The caller applies the step and then calls [`commit_undo`](Self::commit_undo).
	pub fn undo(&self) -> Option<&TxnUndoStep> {
		self.undo_stack.last()
	}

	/// Moves the most recent step from the undo stack to the redo stack.
	pub fn commit_undo(&mut self) {
		if let Some(step) = self.undo_stack.pop() {
			self.redo_stack.push(step);
		}
	}

	/// Returns the step to reapply, or `None` if nothing to redo.
	pub fn redo(&self) -> Option<&TxnUndoStep> {
		self.redo_stack.last()
	}

	/// Moves the most recent step from the redo stack back to the undo stack.
	pub fn commit_redo(&mut self) {
		if let Some(step) = self.redo_stack.pop() {
			self.undo_stack.push(step);
		}
	}

	fn push_step(&mut self, step: TxnUndoStep) {
		self.undo_stack.push(step);
		if self.undo_stack.len() > MAX_UNDO {
			self.undo_stack.remove(0);
		}
	}
}

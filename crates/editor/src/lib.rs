//! Editor core: documents, undo history, and the open-document table.
//!
//! Every [`Document`] owns the trailing-whitespace spans of its text and keeps
//! them current through its own edit gate.

pub mod document;
pub mod documents;
pub mod undo_store;

pub use document::{Document, DocumentId, Trailing};
pub use documents::Documents;
pub use undo_store::{MAX_UNDO, TxnUndoStep, TxnUndoStore};

#[cfg(test)]
use proptest as _;

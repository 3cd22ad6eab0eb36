//! Core types for text editing: char ranges, rope helpers, edit events, and transactions.

/// Edit events, edit errors, and commit results.
pub mod edit;
/// Text range types: char indices, lengths, and half-open ranges.
pub mod range;
/// Rope utilities and extensions.
pub mod rope;
/// Undo/redo transaction primitives.
pub mod transaction;

pub use edit::{CommitResult, EditError, EditEvent, EditKind};
pub use range::{CharIdx, CharLen, CharRange};
pub use rope::{line_of, line_start, next_line_start};
pub use ropey::{Rope, RopeSlice};
pub use transaction::{Bias, Change, ChangeSet, Transaction};

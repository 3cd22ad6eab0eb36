//! Error types for buffer access during scanning and fixing.

use thiserror::Error;
use trailspace_primitives::{CharIdx, CharLen, EditError};

/// Errors raised while reading from or writing to a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
	/// A read or delete addressed text outside the buffer.
	///
	/// This means the buffer changed underneath the caller. The operation
	/// that hit it is abandoned.
	#[error("range {start}..{end} is out of bounds for buffer of length {len}")]
	OutOfBounds {
		/// Start of the requested range.
		start: CharIdx,
		/// End of the requested range.
		end: CharIdx,
		/// Buffer length at the time of the request.
		len: CharLen,
	},

	/// The line after the last line was requested.
	#[error("no line follows offset {offset}")]
	PastLastLine {
		/// Offset whose following line was requested.
		offset: CharIdx,
	},

	/// The buffer refused an edit.
	#[error(transparent)]
	Rejected(#[from] EditError),
}

/// Result type for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;

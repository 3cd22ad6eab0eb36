//! Side table of open documents.
//!
//! Documents, and with them their trailing-whitespace spans, live exactly as
//! long as their entry here. Closing a document drops its tracker.

use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;
use trailspace_config::HighlightStyle;

use crate::document::{Document, DocumentId};

/// Open documents keyed by [`DocumentId`].
#[derive(Default)]
pub struct Documents {
	docs: FxHashMap<DocumentId, Document>,
	style: HighlightStyle,
}

impl Documents {
	/// Creates an empty table whose documents highlight with `style`.
	pub fn new(style: HighlightStyle) -> Self {
		Self {
			docs: FxHashMap::default(),
			style,
		}
	}

	/// Adds an in-memory document.
	pub fn open(&mut self, content: &str) -> DocumentId {
		self.insert(Document::new(content, None))
	}

	/// Reads a document from disk and adds it.
	pub fn open_path(&mut self, path: impl AsRef<Path>) -> io::Result<DocumentId> {
		let doc = Document::open(path)?;
		Ok(self.insert(doc))
	}

	fn insert(&mut self, doc: Document) -> DocumentId {
		let doc = doc.with_style(self.style);
		let id = doc.id;
		debug!(id = id.0, path = ?doc.path, "document opened");
		self.docs.insert(id, doc);
		id
	}

	pub fn get(&self, id: DocumentId) -> Option<&Document> {
		self.docs.get(&id)
	}

	pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
		self.docs.get_mut(&id)
	}

	/// Removes a document, releasing its spans.
	pub fn close(&mut self, id: DocumentId) -> Option<Document> {
		let doc = self.docs.remove(&id)?;
		debug!(id = id.0, "document closed");
		Some(doc)
	}

	/// Iterates open documents in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &Document> {
		self.docs.values()
	}

	pub fn len(&self) -> usize {
		self.docs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.docs.is_empty()
	}
}

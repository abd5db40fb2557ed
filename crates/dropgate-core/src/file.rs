//! Candidate file handles offered for intake.
//!
//! A `CandidateFile` models what a picker or drop event hands over: a name,
//! a declared MIME type, and the payload bytes. Each handle carries a stable
//! synthetic `FileId` minted at construction; rename and content replacement
//! keep the id, so registry entries keyed by it are never orphaned.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a candidate file, stable across rename and
/// payload replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u64);

impl FileId {
    fn next() -> Self {
        FileId(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A binary blob with a name and a declared MIME type, offered for intake.
///
/// Payload bytes are shared (`Arc`), so clones are cheap and handles can be
/// moved into spawned build tasks without copying content.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    id: FileId,
    name: String,
    mime: String,
    data: Arc<[u8]>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: FileId::next(),
            name: name.into(),
            mime: mime.into(),
            data: data.into(),
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared MIME type. Empty when the source could not guess one,
    /// mirroring a browser `File.type`.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte length of the payload.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Up to the first `n` bytes of the payload.
    pub fn prefix(&self, n: usize) -> &[u8] {
        &self.data[..self.data.len().min(n)]
    }

    /// Filename without the final `.extension`.
    ///
    /// A name with no dot, or a dot only at position 0 (hidden-file
    /// convention), is returned whole:
    /// "my.photo.final.png" → "my.photo.final", ".gitignore" → ".gitignore".
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            Some(i) if i > 0 => &self.name[..i],
            _ => &self.name,
        }
    }

    /// New handle with a different name; payload, MIME, and `FileId` are kept.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            mime: self.mime.clone(),
            data: Arc::clone(&self.data),
        }
    }

    /// New handle with a different payload; name, MIME, and `FileId` are kept.
    /// Used when SVG normalization rewrites the content.
    pub fn with_bytes(&self, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            mime: self.mime.clone(),
            data: data.into(),
        }
    }

    /// True when two handles are the very same object state: same identity,
    /// same name, and payload shared (not merely equal).
    pub fn same_handle(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && Arc::ptr_eq(&self.data, &other.data)
    }
}

/// Apply a user-edited id to a handle.
///
/// Empty id returns the handle unchanged (moved through, nothing allocated).
/// An id equal to the current `stem()` also returns it unchanged. Otherwise
/// the handle is renamed to exactly `id`; the extension is not re-appended.
pub fn check_file(id: &str, file: CandidateFile) -> CandidateFile {
    if id.is_empty() || id == file.stem() {
        return file;
    }
    file.renamed(id)
}

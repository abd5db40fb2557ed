//! Pure classification of candidate files by declared type and size.
//!
//! These are classifications, not errors: a file that fails a check is routed
//! to the rejected set (or trips a policy flag) by the orchestrator. Nothing
//! here has side effects.

use crate::config::TypeExtensions;
use crate::file::CandidateFile;

/// True iff the file's declared MIME type is a key of the accepted-type map.
/// An empty declared type simply fails the lookup.
pub fn is_valid_file_type(file: &CandidateFile, accepted_types: &TypeExtensions) -> bool {
    accepted_types.contains_key(file.mime())
}

/// True iff the file is strictly larger than `max_bytes`.
pub fn exceeds_size(file: &CandidateFile, max_bytes: u64) -> bool {
    file.len() > max_bytes
}

/// True iff any file in the batch exceeds `max_bytes`. Short-circuits on the
/// first offender.
pub fn any_exceeds_size(files: &[CandidateFile], max_bytes: u64) -> bool {
    files.iter().any(|f| exceeds_size(f, max_bytes))
}

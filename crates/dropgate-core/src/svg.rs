//! SVG namespace normalization.
//!
//! Browsers refuse to render an SVG served without its `xmlns` declaration.
//! This pass probes only the first 2 KB for the token (well-formed SVGs
//! declare the namespace up front) and rewrites the full payload only when
//! the declaration is genuinely missing.

use crate::blob_url::BlobUrlRegistry;
use crate::config::TypeExtensions;
use crate::descriptor::{self, DocumentDescriptor};
use crate::file::CandidateFile;

/// MIME type this pass applies to; everything else bypasses it.
pub const SVG_MIME: &str = "image/svg+xml";

/// Case-sensitive token looked for in the prefix probe. xmlns attributes are
/// case-sensitive in XML, so no lowercasing.
const XMLNS_TOKEN: &str = "xmlns=";

/// Replacement for a bare `<svg` opening tag.
const SVG_OPEN_WITH_XMLNS: &str = "<svg xmlns='http://www.w3.org/2000/svg'";

/// Bytes inspected before falling back to the full payload.
const PREFIX_PROBE_BYTES: usize = 2048;

/// Inspect an SVG candidate and inject the namespace declaration if absent,
/// then build its descriptor. Non-SVG files go straight to the builder.
///
/// When the token is already present in the first 2 KB the original handle is
/// passed through untouched (no rewrite, payload still shared).
pub async fn normalize_svg(
    file: CandidateFile,
    accepted_types: &TypeExtensions,
    registry: &BlobUrlRegistry,
) -> Option<DocumentDescriptor> {
    if file.mime() != SVG_MIME {
        return descriptor::build(file, accepted_types, registry);
    }

    let prefix = String::from_utf8_lossy(file.prefix(PREFIX_PROBE_BYTES));
    if prefix.contains(XMLNS_TOKEN) {
        return descriptor::build(file, accepted_types, registry);
    }

    let full = String::from_utf8_lossy(file.data()).into_owned();
    let patched = inject_xmlns(&full);
    let rewritten = file.with_bytes(patched.into_bytes());
    descriptor::build(rewritten, accepted_types, registry)
}

/// Replace the first `<svg` word occurrence with the namespaced opening tag.
/// `<svgfoo` is not a match; a payload with no `<svg` tag is returned as-is.
fn inject_xmlns(text: &str) -> String {
    let Some(at) = find_svg_tag(text) else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len() + SVG_OPEN_WITH_XMLNS.len());
    out.push_str(&text[..at]);
    out.push_str(SVG_OPEN_WITH_XMLNS);
    out.push_str(&text[at + "<svg".len()..]);
    out
}

/// Byte offset of the first `<svg` followed by a word boundary.
fn find_svg_tag(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut from = 0;
    while let Some(rel) = text[from..].find("<svg") {
        let at = from + rel;
        let after = at + "<svg".len();
        let boundary = match bytes.get(after) {
            None => true,
            Some(&b) => !(b.is_ascii_alphanumeric() || b == b'_'),
        };
        if boundary {
            return Some(at);
        }
        from = after;
    }
    None
}

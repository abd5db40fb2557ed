//! Normalized accepted-file records handed to the UI.

use crate::blob_url::BlobUrlRegistry;
use crate::config::TypeExtensions;
use crate::file::CandidateFile;

/// Accepted-file record: display id, mapped extension, preview URL, and the
/// raw handle for later transport hand-off.
///
/// Owned exclusively by the orchestrator's accepted set; the orchestrator
/// releases `url` exactly once when the descriptor is discarded.
#[derive(Debug, Clone)]
pub struct DocumentDescriptor {
    pub id: String,
    pub extension: String,
    pub file: CandidateFile,
    pub url: String,
}

/// Build a descriptor for a file, or `None` when its declared MIME type has
/// no entry in the active type map.
///
/// The extension lookup happens before the URL acquire, so an unsupported
/// file never registers a URL.
pub fn build(
    file: CandidateFile,
    accepted_types: &TypeExtensions,
    registry: &BlobUrlRegistry,
) -> Option<DocumentDescriptor> {
    let extension = accepted_types.get(file.mime())?.clone();
    let url = registry.acquire(&file);
    Some(DocumentDescriptor {
        id: file.stem().to_string(),
        extension,
        file,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_type_extensions;

    #[test]
    fn build_maps_extension_and_strips_id() {
        let registry = BlobUrlRegistry::new();
        let file = CandidateFile::new("holiday.photo.jpeg", "image/jpeg", b"x".to_vec());
        let desc = build(file, &default_type_extensions(), &registry).unwrap();
        assert_eq!(desc.id, "holiday.photo");
        assert_eq!(desc.extension, ".jpeg");
        assert!(desc.url.starts_with("memory://dropgate/"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn build_unsupported_type_registers_nothing() {
        let registry = BlobUrlRegistry::new();
        let file = CandidateFile::new("clip.mp4", "video/mp4", b"x".to_vec());
        assert!(build(file, &default_type_extensions(), &registry).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn build_respects_a_narrower_map() {
        // A custom map supplied at build time can be narrower than the one
        // used for the batch filter; the lookup here is what decides.
        let registry = BlobUrlRegistry::new();
        let mut narrow = TypeExtensions::new();
        narrow.insert("image/png".to_string(), ".png".to_string());
        let file = CandidateFile::new("doc.pdf", "application/pdf", b"x".to_vec());
        assert!(build(file, &narrow, &registry).is_none());
    }

    #[test]
    fn build_reuses_registry_url_for_same_identity() {
        let registry = BlobUrlRegistry::new();
        let file = CandidateFile::new("a.png", "image/png", b"x".to_vec());
        let url = registry.acquire(&file);
        let desc = build(file, &default_type_extensions(), &registry).unwrap();
        assert_eq!(desc.url, url);
    }
}

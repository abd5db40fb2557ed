//! Intake orchestration: batch policy checks, concurrent descriptor builds,
//! and accepted/rejected state.
//!
//! `FileIntake` is the stateful engine behind an upload widget. Each `ingest`
//! call supersedes the previous batch wholesale, so the displayed set always
//! reflects the most recent selection; every path that drops a descriptor
//! releases its preview URL through the owned registry.

use std::collections::HashSet;

use crate::blob_url::BlobUrlRegistry;
use crate::config::IntakeConfig;
use crate::descriptor::DocumentDescriptor;
use crate::file::{self, CandidateFile, FileId};
use crate::svg;
use crate::validate;

/// Sticky policy-violation flag surfaced to the UI. `status` stays raised
/// until explicitly reset; `message` is templated with the observed values.
#[derive(Debug, Clone, Default)]
pub struct ErrorFlag {
    pub status: bool,
    pub message: String,
}

impl ErrorFlag {
    fn raise(&mut self, message: String) {
        self.status = true;
        self.message = message;
    }

    fn reset(&mut self) {
        self.status = false;
        self.message.clear();
    }
}

/// Stateful file-intake engine.
pub struct FileIntake {
    config: IntakeConfig,
    registry: BlobUrlRegistry,
    accepted: Vec<DocumentDescriptor>,
    rejected: Vec<CandidateFile>,
    count_error: ErrorFlag,
    size_error: ErrorFlag,
    /// Test-only: names whose build task is made to panic after the
    /// descriptor build, to exercise the fault arm of the join loop.
    #[cfg(test)]
    build_faults: HashSet<String>,
}

impl FileIntake {
    pub fn new(config: IntakeConfig) -> Self {
        Self::with_registry(config, BlobUrlRegistry::new())
    }

    /// Construct with an injected registry (shared with other components or a
    /// test harness).
    pub fn with_registry(config: IntakeConfig, registry: BlobUrlRegistry) -> Self {
        Self {
            config,
            registry,
            accepted: Vec::new(),
            rejected: Vec::new(),
            count_error: ErrorFlag::default(),
            size_error: ErrorFlag::default(),
            #[cfg(test)]
            build_faults: HashSet::new(),
        }
    }

    #[cfg(test)]
    fn inject_build_fault(&mut self, name: &str) {
        self.build_faults.insert(name.to_string());
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn registry(&self) -> &BlobUrlRegistry {
        &self.registry
    }

    /// Descriptors of the most recent batch, in intake order.
    pub fn accepted(&self) -> &[DocumentDescriptor] {
        &self.accepted
    }

    /// Files of the most recent batch whose declared type was not accepted.
    pub fn rejected(&self) -> &[CandidateFile] {
        &self.rejected
    }

    pub fn count_error(&self) -> &ErrorFlag {
        &self.count_error
    }

    pub fn size_error(&self) -> &ErrorFlag {
        &self.size_error
    }

    /// Ingest one batch of candidates, replacing all per-batch state.
    ///
    /// Policy violations (count or size) reject the entire batch: the flag is
    /// raised with a templated message and existing state is cleared. Both
    /// checks are edge-triggered; a flag that is already raised is not
    /// re-templated while it stays up.
    ///
    /// Overlapping ingests cannot interleave: the exclusive borrow serializes
    /// callers, so a stale async completion can never overwrite newer state.
    pub async fn ingest(&mut self, batch: Vec<CandidateFile>) {
        let size_violation =
            validate::any_exceeds_size(&batch, self.config.max_file_size) && !self.size_error.status;
        let count_violation = match self.config.max_upload_count {
            Some(max) if !self.count_error.status => batch.len() as u64 > u64::from(max),
            _ => false,
        };

        if size_violation || count_violation {
            if size_violation {
                self.size_error.raise(format!(
                    "You have attempted to upload a file(s) that exceeds the maximum size of {}",
                    self.config.printable_max_file_size()
                ));
            }
            if count_violation {
                // count_violation implies the limit is configured
                let max = self.config.max_upload_count.unwrap_or_default();
                self.count_error.raise(format!(
                    "You have attempted to upload {} files. The maximum allowable uploads for this feature is {}",
                    batch.len(),
                    max
                ));
            }
            tracing::warn!(
                batch_len = batch.len(),
                size_violation,
                count_violation,
                "intake batch rejected by policy"
            );
            self.clear();
            return;
        }

        let (valid, invalid): (Vec<_>, Vec<_>) = batch
            .into_iter()
            .partition(|f| validate::is_valid_file_type(f, &self.config.accepted_types));

        // Fan out one build task per valid file; awaiting the handles in
        // spawn order keeps the accepted set in intake order.
        let mut tasks = Vec::with_capacity(valid.len());
        for file in valid {
            let types = self.config.accepted_types.clone();
            let registry = self.registry.clone();
            let fallback = file.clone();
            #[cfg(test)]
            let fault = self.build_faults.contains(file.name());
            let handle = tokio::spawn(async move {
                let built = svg::normalize_svg(file, &types, &registry).await;
                #[cfg(test)]
                if fault {
                    panic!("injected build fault");
                }
                built
            });
            tasks.push((fallback, handle));
        }

        let mut accepted = Vec::with_capacity(tasks.len());
        let mut rejected = invalid;
        for (fallback, handle) in tasks {
            match handle.await {
                Ok(Some(desc)) => accepted.push(desc),
                Ok(None) => {
                    // Type map was consulted again at build time and said no;
                    // dropped from the accepted set without a message.
                    tracing::debug!(name = %fallback.name(), "descriptor build yielded no result");
                }
                Err(err) => {
                    tracing::error!(name = %fallback.name(), error = %err, "build task failed; rejecting file");
                    self.registry.release(&fallback);
                    rejected.push(fallback);
                }
            }
        }

        // Release URLs of the superseded batch, except identities that were
        // re-ingested (their registry entry is shared with the new
        // descriptors and must stay live).
        let kept: HashSet<FileId> = accepted.iter().map(|d| d.file.id()).collect();
        for desc in &self.accepted {
            if !kept.contains(&desc.file.id()) {
                self.registry.release(&desc.file);
            }
        }
        self.accepted = accepted;
        self.rejected = rejected;
    }

    /// Remove the accepted descriptor at `index`, releasing its URL and
    /// preserving the order of the rest. Out of range is a silent no-op.
    pub fn remove(&mut self, index: usize) {
        if index >= self.accepted.len() {
            return;
        }
        let desc = self.accepted.remove(index);
        self.registry.release(&desc.file);
    }

    /// Apply a user-edited id to the descriptor at `index`.
    ///
    /// Empty id and out-of-range index are no-ops. An id equal to the current
    /// derived id keeps the very same handle (no new object). The preview URL
    /// is untouched: file identity is stable across rename, so the registry
    /// entry stays valid.
    pub fn rename(&mut self, index: usize, new_id: &str) {
        if new_id.is_empty() {
            return;
        }
        let Some(desc) = self.accepted.get_mut(index) else {
            return;
        };
        desc.file = file::check_file(new_id, desc.file.clone());
        desc.id = new_id.to_string();
    }

    /// Release every accepted descriptor's URL and drop all per-batch state.
    /// Used by ingest-time policy rejection and by explicit cancel.
    pub fn clear(&mut self) {
        self.release_accepted();
        self.accepted.clear();
        self.rejected.clear();
    }

    /// Raw handles of all accepted files, in current order. This is the
    /// hand-off surface for an external transport collaborator.
    pub fn file_handles(&self) -> Vec<CandidateFile> {
        self.accepted.iter().map(|d| d.file.clone()).collect()
    }

    /// Force-clear the count flag (e.g. after the UI showed the message).
    pub fn reset_count_error(&mut self) {
        self.count_error.reset();
    }

    /// Force-clear the size flag.
    pub fn reset_size_error(&mut self) {
        self.size_error.reset();
    }

    fn release_accepted(&mut self) {
        for desc in &self.accepted {
            self.registry.release(&desc.file);
        }
    }
}

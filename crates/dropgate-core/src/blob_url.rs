//! Preview-URL registry: at most one live URL per file identity.
//!
//! A registry instance is owned by the orchestrator (never ambient global
//! state) and handed to descriptor builds. `acquire` is idempotent per
//! `FileId`; `release` is a no-op when nothing is registered, so every
//! descriptor-drop path can release unconditionally.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::file::{CandidateFile, FileId};

#[derive(Default)]
struct Inner {
    urls: Mutex<HashMap<FileId, String>>,
    serial: AtomicU64,
}

/// Cloneable handle to a shared URL registry.
#[derive(Clone, Default)]
pub struct BlobUrlRegistry {
    inner: Arc<Inner>,
}

impl BlobUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the registered URL for this file, minting one on first call.
    /// Two calls for the same `FileId` yield the identical string.
    pub fn acquire(&self, file: &CandidateFile) -> String {
        let mut urls = self.inner.urls.lock().unwrap();
        urls.entry(file.id())
            .or_insert_with(|| {
                let serial = self.inner.serial.fetch_add(1, Ordering::Relaxed);
                format!("memory://dropgate/{}-{}", file.id().as_u64(), serial)
            })
            .clone()
    }

    /// Revoke and forget the URL for this file, if any. Safe to call twice.
    pub fn release(&self, file: &CandidateFile) {
        self.release_id(file.id());
    }

    /// Revoke by identity; used when only the descriptor's file id is at hand.
    pub fn release_id(&self, id: FileId) {
        self.inner.urls.lock().unwrap().remove(&id);
    }

    /// True when a URL is currently registered for this identity.
    pub fn contains(&self, id: FileId) -> bool {
        self.inner.urls.lock().unwrap().contains_key(&id)
    }

    /// Number of live URLs; diagnostic surface for tests and logging.
    pub fn len(&self) -> usize {
        self.inner.urls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Acquire with a scheduled auto-release after `ttl`.
    ///
    /// The returned lease exposes the URL and a `cancel` that aborts the
    /// timer and releases immediately. Cancelling after the timer already
    /// fired is safe (release is idempotent).
    pub fn acquire_with_auto_release(&self, file: &CandidateFile, ttl: Duration) -> UrlLease {
        let url = self.acquire(file);
        let registry = self.clone();
        let id = file.id();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            registry.release_id(id);
        });
        UrlLease {
            url,
            id,
            registry: self.clone(),
            timer,
        }
    }
}

/// Handle to an auto-releasing URL. Dropping the lease leaves the timer
/// running; call `cancel` to release early.
pub struct UrlLease {
    url: String,
    id: FileId,
    registry: BlobUrlRegistry,
    timer: tokio::task::JoinHandle<()>,
}

impl UrlLease {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Abort the scheduled release and release the URL now.
    pub fn cancel(self) {
        self.timer.abort();
        self.registry.release_id(self.id);
    }
}

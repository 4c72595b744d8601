//! Content fingerprints used for duplicate detection.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Computes the SHA-256 of `content` as 64 lowercase hex characters.
pub fn content_hash(content: &[u8]) -> String {
    let mut hasher = ContentHasher::new();
    hasher.update(content);
    hasher.finish()
}

/// Incremental form of [`content_hash`], fed one chunk at a time while a
/// body is streamed in.
#[derive(Default)]
pub struct ContentHasher {
    inner: Sha256,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    pub fn finish(self) -> String {
        format!("{:x}", self.inner.finalize())
    }
}

/// Hashes of everything saved so far in one run.
///
/// Only lives as long as the run; nothing is persisted.
#[derive(Debug, Default)]
pub struct SeenHashes {
    hashes: HashSet<String>,
}

impl SeenHashes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    /// Records `hash`, returning `false` if it was already present.
    pub fn insert(&mut self, hash: String) -> bool {
        self.hashes.insert(hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

//! Ownership of decrypted preview bytes.

use bytes::Bytes;

/// Allocates and releases displayable preview content.
///
/// `release` consumes the handle, so a handle can be released at most once.
pub trait ContentStore {
    /// Exclusive reference to installed content.
    type Handle;

    /// Make `bytes` displayable and return the handle that owns them.
    fn install(&mut self, bytes: Bytes) -> Self::Handle;

    /// Give up a handle returned by [`install`](Self::install).
    fn release(&mut self, handle: Self::Handle);
}

/// Decrypted preview bytes held in memory.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewContent {
    id: u64,
    bytes: Bytes,
}

impl PreviewContent {
    /// Identifier assigned by the store.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The preview bytes.
    #[must_use]
    pub const fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the preview is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// In-memory content store that counts allocations and releases.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: u64,
    allocations: u64,
    releases: u64,
}

impl MemoryStore {
    /// Handles installed so far.
    #[must_use]
    pub const fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Handles released so far.
    #[must_use]
    pub const fn releases(&self) -> u64 {
        self.releases
    }

    /// Handles currently alive.
    #[must_use]
    pub const fn live(&self) -> u64 {
        self.allocations - self.releases
    }
}

impl ContentStore for MemoryStore {
    type Handle = PreviewContent;

    fn install(&mut self, bytes: Bytes) -> PreviewContent {
        self.next_id += 1;
        self.allocations += 1;
        tracing::debug!(id = self.next_id, len = bytes.len(), "Installed preview content");
        PreviewContent {
            id: self.next_id,
            bytes,
        }
    }

    fn release(&mut self, handle: PreviewContent) {
        self.releases += 1;
        tracing::debug!(id = handle.id, "Released preview content");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_counts() {
        let mut store = MemoryStore::default();
        let first = store.install(Bytes::from_static(b"%PDF-1"));
        let second = store.install(Bytes::from_static(b"%PDF-2"));
        assert_ne!(first.id(), second.id());
        assert_eq!(store.live(), 2);

        store.release(first);
        assert_eq!(store.allocations(), 2);
        assert_eq!(store.releases(), 1);
        assert_eq!(store.live(), 1);
        assert_eq!(second.bytes().as_ref(), b"%PDF-2");
    }
}

use rustc_hash::FxHashSet;

/// Opaque handle for one allocated visual resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceHandle(u64);

/// Tracks every live visual resource so each is released exactly once.
#[derive(Debug, Default)]
pub struct ResourceLedger {
    next: u64,
    live: FxHashSet<ResourceHandle>,
    allocated: u64,
    released: u64,
}

impl ResourceLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh handle.
    pub fn allocate(&mut self) -> ResourceHandle {
        let handle = ResourceHandle(self.next);
        self.next += 1;
        self.allocated += 1;
        let _ = self.live.insert(handle);
        handle
    }

    /// Release a handle. Returns `false` (and logs) if it was not live.
    pub fn release(&mut self, handle: ResourceHandle) -> bool {
        if self.live.remove(&handle) {
            self.released += 1;
            true
        } else {
            log::warn!("resource {} released twice", handle.0);
            false
        }
    }

    /// Whether a handle is still live.
    #[must_use]
    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        self.live.contains(&handle)
    }

    /// Number of live handles.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Handles allocated over the ledger's lifetime.
    #[must_use]
    pub fn allocated_total(&self) -> u64 {
        self.allocated
    }

    /// Handles released over the ledger's lifetime.
    #[must_use]
    pub fn released_total(&self) -> u64 {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_exactly_once() {
        let mut ledger = ResourceLedger::new();
        let a = ledger.allocate();
        let b = ledger.allocate();
        assert_ne!(a, b);
        assert_eq!(ledger.live_count(), 2);

        assert!(ledger.release(a));
        assert!(!ledger.release(a));
        assert!(!ledger.is_live(a));
        assert!(ledger.is_live(b));
        assert_eq!(ledger.released_total(), 1);
        assert_eq!(ledger.allocated_total(), 2);
    }
}

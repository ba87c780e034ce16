//! Filtering statistics.
//!
//! Counters are atomic so a summary can be read from another task while the engine is
//! still running.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::RejectReason;

/// Per-reason rejection counters plus accepted and upgraded totals.
///
/// Every [`RejectReason`] is initialized to zero on creation.
pub struct FilterStats {
    rejections: HashMap<RejectReason, AtomicUsize>,
    accepted: AtomicUsize,
    upgrades: AtomicUsize,
}

impl FilterStats {
    pub fn new() -> Self {
        let mut rejections = HashMap::new();
        for reason in RejectReason::iter() {
            rejections.insert(reason, AtomicUsize::new(0));
        }

        FilterStats {
            rejections,
            accepted: AtomicUsize::new(0),
            upgrades: AtomicUsize::new(0),
        }
    }

    pub fn increment_rejection(&self, reason: RejectReason) {
        if let Some(counter) = self.rejections.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment rejection counter for {:?} which is not in the map. \
                 This indicates a bug in FilterStats initialization.",
                reason
            );
        }
    }

    pub fn increment_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts an https URL appended for a key already held by its http variant.
    pub fn increment_upgrade(&self) {
        self.upgrades.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_rejection_count(&self, reason: RejectReason) -> usize {
        self.rejections
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_rejections(&self) -> usize {
        RejectReason::iter()
            .map(|r| self.get_rejection_count(r))
            .sum()
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    pub fn upgrades(&self) -> usize {
        self.upgrades.load(Ordering::SeqCst)
    }
}

impl Default for FilterStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStats")
            .field("accepted", &self.accepted())
            .field("rejected", &self.total_rejections())
            .field("upgrades", &self.upgrades())
            .finish()
    }
}

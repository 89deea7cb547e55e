//! Per-sender serialization of transaction submissions.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per sender address.
///
/// Holding the guard across a whole pipeline run keeps the
/// (timestamp, nonce) pair of one run from being fetched while another run
/// for the same sender is still in flight. Different senders never block
/// each other.
#[derive(Debug, Clone, Default)]
pub struct AddressSequencer {
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl AddressSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive use of `address`.
    pub async fn lock(&self, address: &str) -> OwnedMutexGuard<()> {
        // The map shard guard must be released before awaiting.
        let lock = Arc::clone(self.locks.entry(address.to_string()).or_default().value());
        lock.lock_owned().await
    }

    /// Number of addresses seen so far.
    pub fn tracked_addresses(&self) -> usize {
        self.locks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_address_is_serialized() {
        let sequencer = AddressSequencer::new();
        let active = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let sequencer = sequencer.clone();
            let active = Arc::clone(&active);
            let peak = Arc::clone(&peak);
            handles.push(tokio::spawn(async move {
                let _guard = sequencer.lock("RSender").await;
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(peak.load(Ordering::SeqCst), 1);
        assert_eq!(sequencer.tracked_addresses(), 1);
    }

    #[tokio::test]
    async fn test_different_addresses_do_not_block() {
        let sequencer = AddressSequencer::new();
        let _held = sequencer.lock("RAlice").await;

        let other = tokio::time::timeout(Duration::from_secs(1), sequencer.lock("RBob")).await;
        assert!(other.is_ok());

        let same = tokio::time::timeout(Duration::from_millis(50), sequencer.lock("RAlice")).await;
        assert!(same.is_err());
    }
}

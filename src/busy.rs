//! Busy indicator shared by every in-flight notes service call.
//!
//! The indicator is a reference count published on a `watch` channel. Any
//! number of concurrent calls share the one indicator; it reads as busy while
//! at least one [`BusyGuard`] is alive.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct BusyIndicator {
    count: Arc<watch::Sender<usize>>,
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl BusyIndicator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0usize);
        Self {
            count: Arc::new(tx),
        }
    }

    /// Mark one call as in flight. The returned guard releases it on drop,
    /// including when the call fails or its future is dropped.
    #[must_use = "the indicator is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> BusyGuard {
        self.count.send_modify(|count| *count += 1);
        BusyGuard {
            indicator: self.clone(),
        }
    }

    /// Release one hold. Releasing with nothing held is a no-op.
    pub fn release(&self) {
        self.count.send_if_modified(|count| {
            if *count == 0 {
                return false;
            }
            *count -= 1;
            true
        });
    }

    pub fn is_busy(&self) -> bool {
        *self.count.borrow() > 0
    }

    /// Number of calls currently in flight
    pub fn in_flight(&self) -> usize {
        *self.count.borrow()
    }

    /// Watch the in-flight count (the TUI draws its overlay from this)
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.count.subscribe()
    }
}

/// Releases its hold on the [`BusyIndicator`] when dropped
#[derive(Debug)]
pub struct BusyGuard {
    indicator: BusyIndicator,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.indicator.release();
    }
}

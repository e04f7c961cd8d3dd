// ── Filter State Store ──
//
// Holds the current `FilterCriteria` behind a `watch` channel. Every update
// publishes a fresh `Arc` snapshot, so readers see either the old criteria
// or the new ones, never a mix.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::trace;

use super::criteria::{FilterCriteria, FilterUpdate};

/// Session-lifetime owner of the project filter criteria.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct FilterStore {
    snapshot: watch::Sender<Arc<FilterCriteria>>,
}

impl FilterStore {
    /// A store holding empty criteria.
    pub fn new() -> Self {
        Self::with_criteria(FilterCriteria::default())
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(criteria));
        Self { snapshot }
    }

    /// The current snapshot.
    pub fn criteria(&self) -> Arc<FilterCriteria> {
        self.snapshot.borrow().clone()
    }

    /// Replace one field, leaving the others untouched.
    pub fn update(&self, update: FilterUpdate) {
        trace!(field = update.field(), "filter update");
        self.snapshot
            .send_modify(|current| *current = Arc::new(current.apply(update)));
    }

    /// Apply several updates as a single published snapshot.
    pub fn update_many(&self, updates: impl IntoIterator<Item = FilterUpdate>) {
        self.snapshot.send_modify(|current| {
            let mut next = (**current).clone();
            for update in updates {
                trace!(field = update.field(), "filter update");
                next = next.apply(update);
            }
            *current = Arc::new(next);
        });
    }

    /// Reset every field in one update.
    pub fn clear(&self) {
        trace!("filter clear");
        self.snapshot
            .send_modify(|current| *current = Arc::new(FilterCriteria::default()));
    }

    /// Subscribe to criteria changes.
    pub fn subscribe(&self) -> FilterSubscription {
        FilterSubscription::new(self.snapshot.subscribe())
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Subscription ─────────────────────────────────────────────────────

/// A view of the store's criteria.
///
/// Provides both point-in-time snapshot access and change notification via
/// `changed()` or by converting to a `Stream`.
pub struct FilterSubscription {
    current: Arc<FilterCriteria>,
    receiver: watch::Receiver<Arc<FilterCriteria>>,
}

impl FilterSubscription {
    fn new(mut receiver: watch::Receiver<Arc<FilterCriteria>>) -> Self {
        let current = receiver.borrow_and_update().clone();
        Self { current, receiver }
    }

    /// Snapshot captured at creation or at the last `changed()`.
    pub fn current(&self) -> &Arc<FilterCriteria> {
        &self.current
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<FilterCriteria>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` that yields the current snapshot first and
    /// then one item per change.
    pub fn into_stream(self) -> FilterStream {
        FilterStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct FilterStream {
    inner: WatchStream<Arc<FilterCriteria>>,
}

impl Stream for FilterStream {
    type Item = Arc<FilterCriteria>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

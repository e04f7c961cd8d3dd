// ── TTL response cache ──
//
// Concurrent map from `ResourceKey` to the last decoded JSON payload and
// the instant it was stored. Staleness is checked on read; there is no
// background sweeper and no size bound (the key space is closed).

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::trace;

use crate::resource::ResourceKey;

/// Default time-to-live for cached payloads.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

// ── Clock ────────────────────────────────────────────────────────────

/// Monotonic time source for cache staleness checks.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> Instant;
}

/// Wall-clock time via `Instant::now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Used by tests to step past a TTL
/// without sleeping.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset_ms: AtomicU64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset_ms: AtomicU64::new(0),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.offset_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
    }
}

// ── Cache ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Arc<serde_json::Value>,
    stored_at: Instant,
}

/// TTL cache for resource payloads, shared between the client and anyone
/// who needs to invalidate it.
///
/// Payloads are kept as decoded JSON so one entry can back several typed
/// views of the same resource.
#[derive(Debug)]
pub struct ResponseCache {
    entries: DashMap<ResourceKey, CacheEntry>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    /// Cache with the given TTL and the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached payload if it is younger than the TTL.
    ///
    /// A stale entry is removed and reported as a miss.
    pub fn get(&self, key: ResourceKey) -> Option<Arc<serde_json::Value>> {
        let now = self.clock.now();
        let fresh = {
            let entry = self.entries.get(&key)?;
            (!self.is_stale(&entry, now)).then(|| Arc::clone(&entry.payload))
        };
        if fresh.is_none() {
            self.evict_if_stale(key, now);
        }
        fresh
    }

    /// Remove `key` only if the entry held under the shard lock is stale,
    /// so a concurrent `set` between the read and the removal survives.
    fn evict_if_stale(&self, key: ResourceKey, now: Instant) {
        if self
            .entries
            .remove_if(&key, |_, e| self.is_stale(e, now))
            .is_some()
        {
            trace!(%key, "evicted stale cache entry");
        }
    }

    fn is_stale(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) >= self.ttl
    }

    /// Store a payload stamped with the current time, replacing any
    /// previous entry.
    pub fn set(&self, key: ResourceKey, payload: Arc<serde_json::Value>) {
        let stored_at = self.clock.now();
        self.entries.insert(key, CacheEntry { payload, stored_at });
    }

    /// Drop a single entry.
    pub fn invalidate(&self, key: ResourceKey) {
        self.entries.remove(&key);
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

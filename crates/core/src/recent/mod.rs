//! Bounded store of recently accepted events
//!
//! Wraps a [`RingBuffer`] and a lifetime append counter behind one mutex, so
//! append-and-evict and the counter bump are a single critical section.

use chrono::{DateTime, FixedOffset};
use freezeguard_common::RingBuffer;
use freezeguard_domain::ActionEvent;
use parking_lot::Mutex;

/// A retained event and the timestamp it was filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    /// The event's own `ts`, kept alongside for ordering and display.
    pub ts: DateTime<FixedOffset>,
    /// The accepted event.
    pub event: ActionEvent,
}

/// Consistent read of the store: selected entries plus the lifetime total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecentWindow {
    /// Oldest first.
    pub entries: Vec<RecentEntry>,
    /// Events ever appended, including evicted ones.
    pub total: u64,
}

/// Fill level of the store, read under one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentOccupancy {
    /// Entries currently retained.
    pub retained: usize,
    /// Maximum entries retained.
    pub capacity: usize,
    /// Events ever appended, including evicted ones.
    pub total: u64,
}

#[derive(Debug)]
struct RecentState {
    buffer: RingBuffer<RecentEntry>,
    total: u64,
}

/// Fixed-capacity FIFO of accepted events shared by all ingest callers.
#[derive(Debug)]
pub struct RecentEvents {
    state: Mutex<RecentState>,
}

impl RecentEvents {
    /// Create an empty store. A capacity of zero is clamped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { state: Mutex::new(RecentState { buffer: RingBuffer::new(capacity), total: 0 }) }
    }

    /// Append an entry, evicting the oldest one when full.
    pub fn append(&self, ts: DateTime<FixedOffset>, event: ActionEvent) {
        let mut state = self.state.lock();
        state.buffer.push(RecentEntry { ts, event });
        state.total += 1;
    }

    /// The newest `n` entries (or fewer), oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<RecentEntry> {
        self.state.lock().buffer.recent(n).cloned().collect()
    }

    /// The newest `n` entries together with the lifetime total, read under
    /// one lock.
    #[must_use]
    pub fn window(&self, n: usize) -> RecentWindow {
        let state = self.state.lock();
        RecentWindow { entries: state.buffer.recent(n).cloned().collect(), total: state.total }
    }

    /// Retained count, capacity and lifetime total as one consistent read.
    #[must_use]
    pub fn occupancy(&self) -> RecentOccupancy {
        let state = self.state.lock();
        RecentOccupancy {
            retained: state.buffer.len(),
            capacity: state.buffer.capacity(),
            total: state.total,
        }
    }

    /// Events ever appended.
    #[must_use]
    pub fn total_appended(&self) -> u64 {
        self.state.lock().total
    }

    /// Entries currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// `true` until the first append.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().buffer.is_empty()
    }

    /// Maximum entries retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.lock().buffer.capacity()
    }
}

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

//! A fixed-capacity FIFO store that evicts its oldest element on overflow.
//!
//! A [`RingBuffer`] keeps items in arrival order and never grows past the
//! capacity chosen at construction. [`push`](RingBuffer::push) on a full
//! buffer discards the oldest element (logical index `0`) and hands it back
//! to the caller. [`recent`](RingBuffer::recent) selects the newest `n`
//! elements while still yielding them oldest-first, which is the order
//! operators expect when reading a tail of events.
//!
//! # Complexity
//! - `push`, `len`, `is_empty`, `is_full` and `capacity` are **O(1)**.
//! - `recent(n)` is **O(1)** to create and **O(n)** to drain.
//!
//! # Thread Safety
//! - `RingBuffer<T>` uses no interior mutability. Shared writers wrap it in a
//!   lock so that append-and-evict stays a single critical section.

use std::collections::VecDeque;

/// A fixed-capacity circular buffer storing elements in first-in-first-out
/// order.
///
/// # Examples
///
/// ```rust
/// use freezeguard_common::collections::RingBuffer;
///
/// let mut buffer = RingBuffer::new(3);
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
/// assert_eq!(buffer.push(4), Some(1)); // oldest item is evicted
///
/// assert_eq!(buffer.recent(3).copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert_eq!(buffer.recent(2).copied().collect::<Vec<_>>(), vec![3, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a new buffer with the provided capacity.
    ///
    /// A capacity of zero is clamped to `1`.
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { buf: VecDeque::with_capacity(capacity), capacity }
    }

    /// Appends an item, returning the evicted oldest item when the buffer was
    /// already full.
    #[inline]
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.is_full() { self.buf.pop_front() } else { None };
        self.buf.push_back(item);
        evicted
    }

    /// Returns the newest `n` items (or all of them when fewer are stored),
    /// visiting the selected window from oldest to newest.
    #[inline]
    pub fn recent(&self, n: usize) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        let skip = self.buf.len().saturating_sub(n);
        self.buf.range(skip..)
    }

    /// Returns the number of items currently stored.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when the buffer has no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` when the next push will evict.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Returns the maximum number of items the buffer can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

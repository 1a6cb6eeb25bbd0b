//! Specialized data structures
//!
//! - **[`ring_buffer`]**: Fixed-size ring buffer that evicts its oldest entry
//!
//! ## Usage
//!
//! ```rust
//! use freezeguard_common::collections::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(10);
//! buffer.push(1);
//! assert_eq!(buffer.len(), 1);
//! ```

pub mod ring_buffer;

pub use ring_buffer::RingBuffer;

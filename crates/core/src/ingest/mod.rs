//! Ingestion pipeline
//!
//! [`Collector`] is the handle the transport layer holds: one per process,
//! constructed at startup and shared behind an `Arc`.

pub mod service;

pub use service::{Ack, Collector, CollectorStatus};

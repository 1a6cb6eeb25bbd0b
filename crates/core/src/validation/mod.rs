//! Event schema validation
//!
//! Turns a raw ingest payload into a typed [`ActionEvent`] or a typed
//! [`ValidationError`]. Validation is a pure function of the payload and the
//! permitted thread set; it never touches collector state.
//!
//! [`ActionEvent`]: freezeguard_domain::ActionEvent

mod coerce;
pub mod error;
pub mod event;

pub use error::{ValidationError, ROOT_FIELD};
pub use event::EventValidator;

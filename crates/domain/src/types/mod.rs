//! Common data types used throughout the application

pub mod event;

pub use event::{ActionEvent, ThreadKind};

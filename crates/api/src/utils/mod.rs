//! Handler helpers

pub mod error;
pub mod logging;

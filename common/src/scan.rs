//! Values produced and consumed by a single scanner run.

pub mod summary;
pub mod target;

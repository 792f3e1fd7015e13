//! Adapter implementations of the port traits.

pub mod fake;
pub mod live;

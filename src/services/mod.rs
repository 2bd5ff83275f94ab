//! Workflows composed from the repository traits.

pub mod lifecycle;

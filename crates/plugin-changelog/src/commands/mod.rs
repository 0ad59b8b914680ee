//! Command implementations.

pub mod changelog;

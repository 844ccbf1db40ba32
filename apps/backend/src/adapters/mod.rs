//! Store adapters implementing the repository contracts.

pub mod memory;

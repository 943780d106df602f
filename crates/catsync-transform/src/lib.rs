//! Field normalization, per-feed schema mapping, and the inventory gate.
//!
//! Everything here is pure and stateless: each call takes its inputs
//! explicitly and returns new values, so concurrent batches need no
//! coordination.

pub mod inventory;
pub mod mapper;
pub mod normalization;

pub use inventory::{partition, GatePolicy};
pub use mapper::{map_row, map_row_with_options, MapOptions, PriceSource};

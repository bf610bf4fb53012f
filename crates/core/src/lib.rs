//! HeritageGuard domain logic.
//!
//! Pure, HTTP-free building blocks: the immutable heritage site catalog, the
//! simulated inference generators (crowd, restoration, authenticity,
//! dashboard), and the injectable randomness and latency strategies they run
//! under. The API crate wires these into Axum handlers.

pub mod authenticity;
pub mod catalog;
pub mod crowd;
pub mod dashboard;
pub mod latency;
pub mod random;
pub mod restoration;
pub mod types;

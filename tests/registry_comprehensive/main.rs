//! Registry Test Suite
//!
//! End-to-end tests for the casereg public API.
//!
//! ## Modules
//!
//! - `lookup`: resolve / case_for in both directions
//! - `invariants`: singleton stability, distinctness, ordering
//! - `edge_cases`: aliased and unusual identity tokens
//! - `driver`: the demo report

pub use casereg::prelude::*;

mod edge_cases;
mod invariants;
mod lookup;

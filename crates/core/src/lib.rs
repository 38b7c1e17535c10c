//! Core types for casereg
//!
//! This crate maps a closed enumeration of cases onto one state object each:
//! - [`Case`]: the closed set of case identifiers
//! - [`StateObject`]: identity token, value and action, compared by identity
//! - [`CaseRegistry`]: case → object and object → case lookup

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod registry;
pub mod state_object;

pub use contract::Case;
pub use error::{Error, Result};
pub use registry::CaseRegistry;
pub use state_object::{Action, StateObject};

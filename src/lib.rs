//! # casereg
//!
//! A closed enumeration whose cases are backed by singleton state objects.
//!
//! ## Quick Start
//!
//! ```
//! use casereg::prelude::*;
//!
//! let registry = CaseRegistry::new();
//!
//! // Case -> object
//! let first = registry.resolve(Case::FirstState);
//! assert_eq!(first.value(), 1);
//!
//! // Object -> case, matched by identity token only
//! let probe = StateObject::from("first");
//! assert_eq!(registry.case_for(&probe), Some(Case::FirstState));
//! assert_eq!(registry.case_for(&StateObject::from("fourth")), None);
//! ```
//!
//! ## Layout
//!
//! - [`Case`] - the closed set of case identifiers
//! - [`StateObject`] - identity, value and action of one case
//! - [`CaseRegistry`] - bidirectional case/object lookup
//! - [`report`] - the demo driver used by the `casereg` binary

#![warn(missing_docs)]

pub mod prelude;
pub mod report;

pub use casereg_core::{Action, Case, CaseRegistry, Error, Result, StateObject};
pub use report::Report;

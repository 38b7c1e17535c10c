//! Convenient imports for casereg.
//!
//! ```
//! use casereg::prelude::*;
//!
//! let registry = CaseRegistry::new();
//! assert_eq!(registry.max_value(), 3);
//! ```

// Registry and its contents
pub use crate::{Case, CaseRegistry, StateObject};

// Error handling
pub use crate::{Error, Result};

// Driver
pub use crate::report::Report;

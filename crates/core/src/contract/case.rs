//! Case enumeration
//!
//! The closed set of identifiers that index the registry. A case carries no
//! data of its own; everything observable about it lives in the
//! [`StateObject`](crate::StateObject) it resolves to.
//!
//! | Case | Id | Identity | Value |
//! |------|----|----------|-------|
//! | FirstState | firstState | first | 1 |
//! | SecondState | secondState | second | 2 |
//! | ThirdState | thirdState | third | 3 |

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The known cases, in declared order
///
/// ## Invariant
///
/// `ALL` lists every variant exactly once, in declaration order. Adding a
/// variant requires extending `ALL`, `id`, `from_id` and the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Case {
    /// First state (value 1)
    FirstState,
    /// Second state (value 2)
    SecondState,
    /// Third state (value 3)
    ThirdState,
}

impl Case {
    /// Number of cases
    pub const COUNT: usize = 3;

    /// All cases (for iteration)
    pub const ALL: [Case; Case::COUNT] = [Case::FirstState, Case::SecondState, Case::ThirdState];

    /// Get all cases as a slice
    pub fn all() -> &'static [Case] {
        &Self::ALL
    }

    /// Short identifier (for the CLI and serialization)
    pub const fn id(&self) -> &'static str {
        match self {
            Case::FirstState => "firstState",
            Case::SecondState => "secondState",
            Case::ThirdState => "thirdState",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "firstState" => Some(Case::FirstState),
            "secondState" => Some(Case::SecondState),
            "thirdState" => Some(Case::ThirdState),
            _ => None,
        }
    }

    /// Position in [`Case::ALL`]
    pub const fn index(&self) -> usize {
        match self {
            Case::FirstState => 0,
            Case::SecondState => 1,
            Case::ThirdState => 2,
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::from_id(s).ok_or_else(|| Error::UnknownCase(s.to_string()))
    }
}

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// Tests
// ============================================================================

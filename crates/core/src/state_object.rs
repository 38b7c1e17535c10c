//! State objects
//!
//! A [`StateObject`] bundles an identity token, a cached integer value and an
//! action. Equality and hashing look only at the identity: two separately
//! built objects with the same token are interchangeable, which is what lets
//! the registry recover a case from any object that carries its token.

use serde::Serialize;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::io::{self, Write};
use std::str::FromStr;

/// Work performed by a state, writing its description to `out`
pub type Action = fn(out: &mut dyn Write) -> io::Result<()>;

/// Action of an object built from a bare identity token
fn no_action(_out: &mut dyn Write) -> io::Result<()> {
    Ok(())
}

/// An immutable identity/value/action bundle
///
/// Fields are private so an object cannot change after construction.
#[derive(Clone, Serialize)]
pub struct StateObject {
    identity: String,
    value: i64,
    #[serde(skip)]
    action: Action,
}

impl StateObject {
    /// Create a state object with an explicit value and action
    pub fn new(identity: impl Into<String>, value: i64, action: Action) -> Self {
        Self {
            identity: identity.into(),
            value,
            action,
        }
    }

    /// Identity token
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Value attached to this state
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Run this state's action against `out`
    pub fn perform_action(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.action)(out)
    }
}

impl PartialEq for StateObject {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for StateObject {}

impl Hash for StateObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl std::fmt::Debug for StateObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateObject")
            .field("identity", &self.identity)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Builds a base object: value 0, action writes nothing
impl From<&str> for StateObject {
    fn from(identity: &str) -> Self {
        StateObject::new(identity, 0, no_action)
    }
}

impl From<String> for StateObject {
    fn from(identity: String) -> Self {
        StateObject::new(identity, 0, no_action)
    }
}

impl FromStr for StateObject {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StateObject::from(s))
    }
}

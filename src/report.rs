//! Demo driver
//!
//! Runs one case's action, sums the values of the three cases and tracks the
//! running maximum over every case. The CLI prints the resulting [`Report`]
//! either as human lines or as JSON.

use casereg_core::{Case, CaseRegistry, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Case whose action the demo runs
pub const ACTING_CASE: Case = Case::FirstState;

/// Cases whose values the demo sums
pub const SUMMED_CASES: [Case; 3] = [Case::FirstState, Case::SecondState, Case::ThirdState];

/// Outcome of one demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Case whose action ran
    pub acted: Case,
    /// Everything the action wrote
    pub action_output: String,
    /// Sum of values over [`SUMMED_CASES`]
    pub total: i64,
    /// Maximum value over all cases
    pub max: i64,
}

impl Report {
    /// Run the demo against `registry`
    pub fn collect(registry: &CaseRegistry) -> Result<Self> {
        let mut captured = Vec::new();
        registry.resolve(ACTING_CASE).perform_action(&mut captured)?;
        let action_output = String::from_utf8_lossy(&captured).into_owned();

        let total = registry.total_value(&SUMMED_CASES);
        let max = registry.max_value();
        debug!(acted = %ACTING_CASE, total, max, "demo complete");

        Ok(Self {
            acted: ACTING_CASE,
            action_output,
            total,
            max,
        })
    }

    /// Write the human-readable form
    pub fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.action_output.as_bytes())?;
        writeln!(out, "Get total value from states: {}", self.total)?;
        writeln!(out, "Get max value from states: {}", self.max)?;
        Ok(())
    }
}

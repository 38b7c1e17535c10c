//! Output formatting: Human and JSON modes.

use casereg::{Case, CaseRegistry, Report};
use serde_json::json;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format the demo report. Human output keeps the action's own newline.
pub fn format_report(report: &Report, mode: OutputMode) -> Result<String, String> {
    match mode {
        OutputMode::Human => {
            let mut out = Vec::new();
            report.write_human(&mut out).map_err(|e| e.to_string())?;
            Ok(String::from_utf8_lossy(&out).into_owned())
        }
        OutputMode::Json => serde_json::to_string(report)
            .map(|s| s + "\n")
            .map_err(|e| e.to_string()),
    }
}

/// Format every case with its state object.
pub fn format_list(registry: &CaseRegistry, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => registry
            .objects()
            .map(|(case, object)| {
                format!(
                    "{} identity={} value={}\n",
                    case,
                    object.identity(),
                    object.value()
                )
            })
            .collect(),
        OutputMode::Json => {
            let entries: Vec<_> = registry
                .objects()
                .map(|(case, object)| json!({ "case": case, "object": object }))
                .collect();
            format!("{}\n", serde_json::Value::Array(entries))
        }
    }
}

/// Format a reverse lookup result.
pub fn format_lookup(found: Option<Case>, mode: OutputMode) -> String {
    match (mode, found) {
        (OutputMode::Human, Some(case)) => format!("{}\n", case),
        (OutputMode::Human, None) => "(nil)\n".to_string(),
        (OutputMode::Json, found) => format!("{}\n", json!({ "case": found })),
    }
}

/// Format the output of a resolved action.
pub fn format_action(case: Case, output: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => output.to_string(),
        OutputMode::Json => format!("{}\n", json!({ "case": case, "output": output })),
    }
}

/// Format an error message for stderr.
pub fn format_error(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", message),
        OutputMode::Json => json!({ "error": message }).to_string(),
    }
}

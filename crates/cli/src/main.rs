//! casereg CLI — drive the case registry from the command line.
//!
//! - `casereg` / `casereg demo` — run the first case's action, print the value
//!   total and maximum
//! - `casereg list` — every case with its identity and value
//! - `casereg resolve <CASE>` — run one case's action
//! - `casereg lookup <IDENTITY>` — reverse lookup, `(nil)` when absent

mod commands;
mod format;
mod parse;

use std::io::{self, Write};
use std::process;

use casereg::{CaseRegistry, Report};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_action, format_error, format_list, format_lookup, format_report, OutputMode};
use parse::{matches_to_action, CliAction};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    let registry = CaseRegistry::new();
    match run(&registry, action, output_mode) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("{}", format_error(&e.to_string(), output_mode));
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only results.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(registry: &CaseRegistry, action: CliAction, mode: OutputMode) -> Result<String, String> {
    tracing::debug!(?action, "dispatching");
    match action {
        CliAction::Demo => {
            let report = Report::collect(registry).map_err(|e| e.to_string())?;
            format_report(&report, mode)
        }
        CliAction::List => Ok(format_list(registry, mode)),
        CliAction::Resolve(case) => {
            let mut captured = Vec::new();
            registry
                .resolve(case)
                .perform_action(&mut captured)
                .map_err(|e| e.to_string())?;
            Ok(format_action(case, &String::from_utf8_lossy(&captured), mode))
        }
        CliAction::Lookup(identity) => Ok(format_lookup(registry.case_for_identity(&identity), mode)),
    }
}

//! ArgMatches → CliAction conversion.
//!
//! Case ids are validated here so that an unknown id never reaches the
//! registry. Identity tokens are passed through untouched: an unknown token is
//! a normal lookup miss, not a parse error.

use casereg::Case;
use clap::ArgMatches;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run the demo driver.
    Demo,
    /// List every case.
    List,
    /// Run one case's action.
    Resolve(Case),
    /// Reverse lookup by identity token.
    Lookup(String),
}

/// Convert clap ArgMatches into a CliAction.
///
/// No subcommand means `demo`.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let Some((sub_name, sub_matches)) = matches.subcommand() else {
        return Ok(CliAction::Demo);
    };

    match sub_name {
        "demo" => Ok(CliAction::Demo),
        "list" => Ok(CliAction::List),
        "resolve" => {
            let id = required(sub_matches, "case")?;
            let case = id.parse::<Case>().map_err(|e| e.to_string())?;
            Ok(CliAction::Resolve(case))
        }
        "lookup" => Ok(CliAction::Lookup(required(sub_matches, "identity")?.to_string())),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("missing argument: {}", name))
}

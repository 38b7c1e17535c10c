//! Clap command tree for the casereg binary.

use clap::{Arg, ArgAction, Command};

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("casereg")
        .about("Resolve cases to their singleton state objects and back")
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level (RUST_LOG overrides)"),
        )
        .subcommand(Command::new("demo").about("Run an action, then print the value total and maximum"))
        .subcommand(Command::new("list").about("List every case with its identity and value"))
        .subcommand(
            Command::new("resolve")
                .about("Run the action of a case")
                .arg(
                    Arg::new("case")
                        .required(true)
                        .help("Case id (firstState, secondState, thirdState)"),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Find the case whose state object has this identity")
                .arg(Arg::new("identity").required(true).help("Identity token")),
        )
}

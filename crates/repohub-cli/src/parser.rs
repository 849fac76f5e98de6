//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the repository records server.
#[derive(Parser)]
#[command(name = "repohub")]
#[command(about = "Serve an in-memory catalog of code repositories over HTTP")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_flag() {
        let cli = Cli::parse_from(["repohub", "serve", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Serve { .. })));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["repohub"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }
}

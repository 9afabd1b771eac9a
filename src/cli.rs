use clap::Parser;
use std::path::PathBuf;

/// A three-column kanban board in the terminal
#[derive(Parser, Debug)]
#[command(name = "kanban", version)]
pub struct Cli {
    /// Append log records to this file
    #[arg(long, env = "KANBAN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_logging_flags() {
        let cli = Cli::try_parse_from(["kanban", "--log-file", "board.log", "-v"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("board.log")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["kanban", "extra"]).is_err());
    }
}

pub mod check;
pub mod completions;
pub mod dump;
pub mod load_args;

use clap::{ArgAction, Parser, Subcommand};

use crate::logging::LogFormat;

/// plotcfg - Online plotting configuration checker
#[derive(Parser, Debug)]
#[command(name = "plotcfg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load configuration files and report problems
    Check(check::CheckArgs),

    /// Print the pages and draw commands of a configuration
    Dump(dump::DumpArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["plotcfg", "-vv", "check", "cfg", "--run", "1234", "--hallc"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.paths.len(), 1);
                assert_eq!(args.load.run, Some(1234));
                assert!(args.load.hallc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_dump_json() {
        let cli = Cli::parse_from(["plotcfg", "dump", "hms.cfg", "--json", "-R", "run_1234.root"]);
        match cli.command {
            Commands::Dump(args) => {
                assert!(args.json);
                assert_eq!(args.file, "hms.cfg");
                assert_eq!(args.load.root_file.as_deref(), Some("run_1234.root"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

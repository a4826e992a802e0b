use std::io::IsTerminal;

use clap::Parser;
use miette::Result;
use plotcfg::cli::{Cli, Commands};
use plotcfg::logging::{init_logging, LogConfig};
use plotcfg::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(
        &LogConfig::from_verbosity(cli.verbose)
            .with_format(cli.log_format)
            .with_ansi(std::io::stderr().is_terminal()),
    );
    let printer = Printer::new();

    match cli.command {
        Commands::Check(args) => plotcfg::cli::check::run(args, &printer)?,
        Commands::Dump(args) => plotcfg::cli::dump::run(args)?,
        Commands::Completions(args) => plotcfg::cli::completions::run(args)?,
    }

    Ok(())
}

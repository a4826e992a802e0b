//! Check command implementation.
//!
//! Loads every configuration found and reports the outcome. Individual
//! load diagnostics are logged as they are found.

use std::path::PathBuf;

use clap::Args;

use crate::config::PlotConfig;
use crate::discovery::discover_paths;
use crate::error::{ConfigError, Result};
use crate::output::{display_path, plural, Printer};

use super::load_args::LoadArgs;

/// Load configuration files and report problems
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration files or directories to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Count warnings as failures
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub load: LoadArgs,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let scan = discover_paths(&args.paths)?;
    if scan.is_empty() {
        printer.warning("Skipping", "no configuration files found");
        return Ok(());
    }

    let mut failed = 0;
    for path in &scan.configs {
        let shown = display_path(path);
        printer.status("Checking", &shown);

        let config = match PlotConfig::load(&args.load.to_options(path.display().to_string())) {
            Ok(config) => config,
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", shown, e));
                continue;
            }
        };

        let diags = config.diagnostics();
        let summary = format!(
            "{}, {}, {}",
            plural(config.page_count(), "page", "pages"),
            plural(diags.warning_count(), "warning", "warnings"),
            plural(diags.error_count(), "error", "errors")
        );

        if diags.has_errors() || (args.strict && diags.has_warnings()) {
            failed += 1;
            printer.error("Failed", &format!("{} {}", shown, printer.dim(&format!("({})", summary))));
        } else if diags.has_warnings() {
            printer.warning("Loaded", &format!("{} {}", shown, printer.dim(&format!("({})", summary))));
        } else {
            printer.info("Loaded", &format!("{} {}", shown, printer.dim(&format!("({})", summary))));
        }
    }

    let total = scan.total();
    if failed > 0 {
        return Err(ConfigError::CheckFailed { failed, total });
    }
    printer.status("Finished", &format!("checked {}", plural(total, "configuration", "configurations")));
    Ok(())
}

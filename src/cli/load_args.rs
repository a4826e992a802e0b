//! Load-option flags shared by the subcommands.

use clap::Args;

use crate::config::LoadOptions;

/// Command-line overrides for configuration values
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Extra colon-separated directories to search for configuration files
    #[arg(long, short = 'P', value_name = "DIRS")]
    pub config_dir: Option<String>,

    /// ROOT file to use instead of the configuration's rootfile
    #[arg(long, short = 'R', value_name = "FILE")]
    pub root_file: Option<String>,

    /// Reference ("golden") ROOT file
    #[arg(long, short = 'G', value_name = "FILE")]
    pub golden_file: Option<String>,

    /// Extra directories to search for ROOT files
    #[arg(long, value_name = "DIRS")]
    pub root_dir: Option<String>,

    /// Run number, used to locate the ROOT file from protorootfile
    #[arg(long, short = 'r')]
    pub run: Option<u32>,

    /// Output format for summary plots (e.g. pdf)
    #[arg(long, value_name = "EXT")]
    pub plot_format: Option<String>,

    /// Output format for single plot images (e.g. png)
    #[arg(long, value_name = "EXT")]
    pub image_format: Option<String>,

    /// Directory for summary plots
    #[arg(long, value_name = "DIR")]
    pub plots_dir: Option<String>,

    /// Directory for single plot images
    #[arg(long, value_name = "DIR")]
    pub images_dir: Option<String>,

    /// Style macro file
    #[arg(long, value_name = "FILE")]
    pub style_file: Option<String>,

    /// Hall C conventions: add .cfg to names, use the default style file
    #[arg(long)]
    pub hallc: bool,
}

impl LoadArgs {
    /// Build load options for `config_file` from these flags.
    pub fn to_options(&self, config_file: impl Into<String>) -> LoadOptions {
        LoadOptions {
            config_file: config_file.into(),
            config_dir: self.config_dir.clone(),
            root_file: self.root_file.clone(),
            golden_file: self.golden_file.clone(),
            root_dir: self.root_dir.clone(),
            plot_format: self.plot_format.clone(),
            image_format: self.image_format.clone(),
            plots_dir: self.plots_dir.clone(),
            images_dir: self.images_dir.clone(),
            style_file: self.style_file.clone(),
            run: self.run,
            hallc: self.hallc,
        }
    }
}

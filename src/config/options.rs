//! Values supplied by the invoking command line.

/// Command-line overrides for a configuration load.
///
/// Any value set here takes precedence over the corresponding directive in
/// the configuration file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Configuration file name, absolute or relative to the search path.
    pub config_file: String,
    /// Extra colon-separated directories to search for configuration files.
    pub config_dir: Option<String>,
    pub root_file: Option<String>,
    pub golden_file: Option<String>,
    /// Extra directories to search for ROOT files.
    pub root_dir: Option<String>,
    pub plot_format: Option<String>,
    pub image_format: Option<String>,
    pub plots_dir: Option<String>,
    pub images_dir: Option<String>,
    pub style_file: Option<String>,
    /// Run number; `None` means "not given".
    pub run: Option<u32>,
    /// Use Hall C conventions (`.cfg` suffix, default style file).
    pub hallc: bool,
}

impl LoadOptions {
    pub fn new(config_file: impl Into<String>) -> Self {
        Self {
            config_file: config_file.into(),
            ..Default::default()
        }
    }

    pub fn with_config_dir(mut self, dir: impl Into<String>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn with_root_file(mut self, file: impl Into<String>) -> Self {
        self.root_file = Some(file.into());
        self
    }

    pub fn with_run(mut self, run: u32) -> Self {
        self.run = Some(run);
        self
    }

    pub fn with_hallc(mut self, hallc: bool) -> Self {
        self.hallc = hallc;
        self
    }

    /// Run number, treating 0 as unset like the command line does.
    pub fn run_number(&self) -> Option<u32> {
        self.run.filter(|&r| r != 0)
    }
}

/// A command-line value counts as set when it is present and non-empty.
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

//! Document-level settings filled in by preamble directives.

use serde::Serialize;

use crate::error::Result;
use crate::parser::env::expand_path;

use super::options::LoadOptions;

/// A cut registered with `definecut <ident> <expr>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCut {
    pub ident: String,
    pub expr: String,
}

/// Global configuration state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalConfig {
    /// `watchfile`: periodically reload the data file.
    pub monitor: bool,
    pub bins_2d_x: i64,
    pub bins_2d_y: i64,
    pub cuts: Vec<NamedCut>,
    pub root_file: String,
    pub golden_root_file: String,
    /// Candidate ROOT file name templates, tried in order.
    pub proto_root_files: Vec<String>,
    pub gui_color: String,
    pub plots_dir: String,
    pub images_dir: String,
    pub plot_format: String,
    pub image_format: String,
    /// Colon-separated ROOT file search path.
    pub root_files_path: String,
    pub proto_plot_file: String,
    pub proto_plot_page_file: String,
    pub proto_image_file: String,
    pub proto_macro_image_file: String,
    pub style_file: String,
    pub run_number: u32,
    pub run_width: u32,
    pub page_width: u32,
    pub pad_width: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            monitor: false,
            bins_2d_x: 0,
            bins_2d_y: 0,
            cuts: Vec::new(),
            root_file: String::new(),
            golden_root_file: String::new(),
            proto_root_files: Vec::new(),
            gui_color: String::new(),
            plots_dir: String::new(),
            images_dir: String::new(),
            plot_format: String::new(),
            image_format: String::new(),
            root_files_path: String::new(),
            proto_plot_file: String::new(),
            proto_plot_page_file: String::new(),
            proto_image_file: String::new(),
            proto_macro_image_file: String::new(),
            style_file: String::new(),
            run_number: 0,
            run_width: 0,
            page_width: 2,
            pad_width: 2,
            canvas_width: 1120,
            canvas_height: 1080,
        }
    }
}

impl GlobalConfig {
    /// Seed the configuration with command-line values, expanding any
    /// environment references in the path-valued ones.
    pub fn from_options(opts: &LoadOptions) -> Result<Self> {
        let expand = |value: &Option<String>| -> Result<String> {
            match value {
                Some(v) => expand_path(v),
                None => Ok(String::new()),
            }
        };

        Ok(Self {
            root_file: expand(&opts.root_file)?,
            golden_root_file: expand(&opts.golden_file)?,
            root_files_path: expand(&opts.root_dir)?,
            images_dir: expand(&opts.images_dir)?,
            plots_dir: expand(&opts.plots_dir)?,
            plot_format: opts.plot_format.clone().unwrap_or_default(),
            image_format: opts.image_format.clone().unwrap_or_default(),
            style_file: opts.style_file.clone().unwrap_or_default(),
            run_number: opts.run.unwrap_or(0),
            ..Self::default()
        })
    }

    /// Expression registered for a cut identifier.
    pub fn defined_cut(&self, ident: &str) -> Option<&str> {
        self.cuts
            .iter()
            .find(|c| c.ident == ident)
            .map(|c| c.expr.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GlobalConfig::default();
        assert_eq!(config.page_width, 2);
        assert_eq!(config.pad_width, 2);
        assert_eq!((config.canvas_width, config.canvas_height), (1120, 1080));
        assert!(!config.monitor);
    }

    #[test]
    fn test_from_options() {
        let mut opts = LoadOptions::new("x.cfg").with_run(42);
        opts.plot_format = Some("png".to_string());
        opts.plots_dir = Some("out".to_string());

        let config = GlobalConfig::from_options(&opts).unwrap();
        assert_eq!(config.plot_format, "png");
        assert_eq!(config.plots_dir, "out");
        assert_eq!(config.run_number, 42);
        assert!(config.root_file.is_empty());
    }

    #[test]
    fn test_defined_cut_first_registration_wins() {
        let mut config = GlobalConfig::default();
        config.cuts.push(NamedCut {
            ident: "good".into(),
            expr: "x>0".into(),
        });
        config.cuts.push(NamedCut {
            ident: "good".into(),
            expr: "x>1".into(),
        });
        assert_eq!(config.defined_cut("good"), Some("x>0"));
        assert_eq!(config.defined_cut("bad"), None);
    }
}

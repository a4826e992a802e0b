//! Loading a configuration file into a queryable [`PlotConfig`].
//!
//! Loading runs in stages:
//!
//! 1. locate the file on the configuration search path
//! 2. read it, inlining `include` lines
//! 3. segment the document into a preamble and pages
//! 4. apply the preamble directives
//! 5. expand `multiplot` lines and re-segment
//! 6. fill in defaults and resolve file names

mod finalize;
mod global;
mod options;
mod template;

use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;
use crate::directive::dispatch;
use crate::draw::{decode_draw_line, DrawCommand};
use crate::error::{ConfigError, Result};
use crate::layout::{expand_multiplots, segment, Page, TITLE};
use crate::parser::env::{append_to_path, dirname, expand_path, find_in_path};
use crate::parser::{ConfigDocument, ConfigLine, IncludeResolver};

pub use finalize::extract_run_number;
pub use global::{GlobalConfig, NamedCut};
pub(crate) use options::is_set;
pub use options::LoadOptions;
pub use template::{strip_extension, substitute_run_number, Placeholders};

/// Environment variable holding extra configuration directories.
pub const CONFIG_PATH_ENV: &str = "PLOTCFG_CONFIG_PATH";
/// Suffix appended to configuration names in Hall C mode.
pub const HALLC_SUFFIX: &str = ".cfg";

/// A fully loaded configuration.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    config_name: String,
    config_path: Option<PathBuf>,
    search_path: String,
    document: ConfigDocument,
    preamble_len: usize,
    pages: Vec<Page>,
    global: GlobalConfig,
    diagnostics: Diagnostics,
}

impl PlotConfig {
    /// Locate and load the configuration file named by `opts`.
    pub fn load(opts: &LoadOptions) -> Result<Self> {
        let mut config_file = opts.config_file.clone();
        if opts.hallc && !config_file.ends_with(HALLC_SUFFIX) {
            config_file.push_str(HALLC_SUFFIX);
        }
        let config_file = expand_path(&config_file)?;

        let mut search_path = base_search_path(opts)?;
        let found = find_in_path(&config_file, &search_path).ok_or_else(|| ConfigError::NotFound {
            name: config_file.clone(),
            search_path: search_path.clone(),
        })?;
        tracing::info!(file = %found.display(), "loading configuration");

        let dir = dirname(&found).display().to_string();
        if dir != "." && !search_path.split(':').any(|entry| entry == dir) {
            search_path = if search_path.is_empty() {
                dir
            } else {
                format!("{}:{}", dir, search_path)
            };
        }

        let mut diagnostics = Diagnostics::new();
        let document = IncludeResolver::new(&search_path, &mut diagnostics).load_file(&found)?;
        Self::build(config_file, Some(found), search_path, document, opts, diagnostics)
    }

    /// Load configuration text directly.
    ///
    /// Includes are resolved against the current directory and the
    /// configuration search path.
    pub fn from_source(source: &str, opts: &LoadOptions) -> Result<Self> {
        let search_path = base_search_path(opts)?;
        let mut diagnostics = Diagnostics::new();
        let document = IncludeResolver::new(&search_path, &mut diagnostics).load_source(source)?;
        Self::build(opts.config_file.clone(), None, search_path, document, opts, diagnostics)
    }

    fn build(
        config_name: String,
        config_path: Option<PathBuf>,
        search_path: String,
        mut document: ConfigDocument,
        opts: &LoadOptions,
        mut diagnostics: Diagnostics,
    ) -> Result<Self> {
        let mut global = GlobalConfig::from_options(opts)?;

        let mut segmentation = segment(&document);
        dispatch(
            &document.lines()[..segmentation.preamble_len],
            &mut global,
            opts,
            &mut diagnostics,
        )?;

        if let Some(expanded) = expand_multiplots(&document, segmentation.preamble_len, &mut diagnostics)? {
            tracing::debug!(before = document.len(), after = expanded.len(), "expanded multiplot lines");
            document = expanded;
            segmentation = segment(&document);
        }
        for diagnostic in segmentation.diagnostics {
            diagnostics.push(diagnostic);
        }

        finalize::finalize(&mut global, opts, &search_path, &mut diagnostics)?;

        tracing::info!(
            pages = segmentation.pages.len(),
            cuts = global.cuts.len(),
            warnings = diagnostics.warning_count(),
            errors = diagnostics.error_count(),
            "configuration loaded"
        );

        Ok(Self {
            config_name,
            config_path,
            search_path,
            document,
            preamble_len: segmentation.preamble_len,
            pages: segmentation.pages,
            global,
            diagnostics,
        })
    }

    /// Configuration file name as requested, after expansion.
    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// Where the configuration file was found, if it came from disk.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Colon-separated directories searched for configuration files.
    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    /// The flattened document, after include and multiplot expansion.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// The lines before the first page.
    pub fn preamble(&self) -> &[ConfigLine] {
        &self.document.lines()[..self.preamble_len]
    }

    pub fn global(&self) -> &GlobalConfig {
        &self.global
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, page: usize) -> Result<&Page> {
        self.pages.get(page).ok_or(ConfigError::IndexOutOfRange {
            what: "page",
            index: page,
            len: self.pages.len(),
        })
    }

    pub fn page_dim(&self, page: usize) -> Result<(u32, u32)> {
        Ok(self.page(page)?.dim())
    }

    pub fn page_title(&self, page: usize) -> Result<&str> {
        Ok(&self.page(page)?.title)
    }

    /// Number of draw lines on a page.
    pub fn draw_count(&self, page: usize) -> Result<usize> {
        Ok(self.page(page)?.draw_count)
    }

    pub fn is_logx(&self, page: usize) -> Result<bool> {
        Ok(self.page(page)?.log_flags.logx)
    }

    pub fn is_logy(&self, page: usize) -> Result<bool> {
        Ok(self.page(page)?.log_flags.logy)
    }

    pub fn is_logz(&self, page: usize) -> Result<bool> {
        Ok(self.page(page)?.log_flags.logz)
    }

    /// Body lines of a page that draw something, in order.
    pub fn draw_lines(&self, page: usize) -> Result<impl Iterator<Item = &ConfigLine>> {
        let range = self.page(page)?.body_range();
        Ok(self.document.lines()[range].iter().filter(|l| !l.is(TITLE)))
    }

    /// Decode draw line `index` of `page`; `title` lines are skipped when
    /// counting.
    pub fn draw_command(&self, page: usize, index: usize) -> Result<DrawCommand> {
        let count = self.draw_count(page)?;
        let line = self
            .draw_lines(page)?
            .nth(index)
            .ok_or(ConfigError::IndexOutOfRange {
                what: "draw command",
                index,
                len: count,
            })?;
        Ok(decode_draw_line(line))
    }

    /// Every draw command of a page.
    pub fn draw_commands(&self, page: usize) -> Result<Vec<DrawCommand>> {
        Ok(self.draw_lines(page)?.map(decode_draw_line).collect())
    }

    pub fn defined_cut(&self, ident: &str) -> Option<&str> {
        self.global.defined_cut(ident)
    }

    /// Cut identifiers in registration order.
    pub fn cut_idents(&self) -> Vec<&str> {
        self.global.cuts.iter().map(|c| c.ident.as_str()).collect()
    }

    /// Replace every registered cut identifier found in `expr` with its
    /// expression, in registration order.
    pub fn apply_cuts(&self, expr: &str) -> String {
        self.global.cuts.iter().fold(expr.to_string(), |acc, cut| {
            if acc.contains(&cut.ident) {
                acc.replace(&cut.ident, &cut.expr)
            } else {
                acc
            }
        })
    }

    /// Placeholder values for output names on `page` (zero-based).
    pub fn placeholders<'a>(&'a self, variable: Option<&'a str>, page: usize, pad: usize) -> Placeholders<'a> {
        Placeholders {
            run: self.global.run_number,
            run_width: self.global.run_width,
            config_name: &self.config_name,
            variable,
            page: page + 1,
            page_width: self.global.page_width,
            pad,
            pad_width: self.global.pad_width,
            plot_format: &self.global.plot_format,
            image_format: &self.global.image_format,
        }
    }

    /// Output file for the full plot summary.
    pub fn plot_file_name(&self) -> String {
        self.placeholders(None, 0, 0).expand(&self.global.proto_plot_file)
    }

    /// Output file for a single page of plots.
    pub fn plot_page_file_name(&self, page: usize) -> String {
        self.placeholders(None, page, 0).expand(&self.global.proto_plot_page_file)
    }

    /// Output file for one histogram image.
    pub fn image_file_name(&self, variable: &str, page: usize, pad: usize) -> String {
        self.placeholders(Some(variable), page, pad)
            .expand(&self.global.proto_image_file)
    }

    /// Output file for one macro-drawn pad.
    pub fn macro_image_file_name(&self, page: usize, pad: usize) -> String {
        self.placeholders(None, page, pad)
            .expand(&self.global.proto_macro_image_file)
    }
}

/// `config_dir` followed by `$PLOTCFG_CONFIG_PATH`, expanded.
fn base_search_path(opts: &LoadOptions) -> Result<String> {
    let mut path = String::new();
    if let Some(dir) = opts.config_dir.as_deref() {
        append_to_path(&mut path, dir);
    }
    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        append_to_path(&mut path, &env_path);
    }
    tracing::debug!(path = %path, "configuration search path");
    expand_path(&path)
}

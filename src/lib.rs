//! plotcfg - Online plotting configuration loader
//!
//! Reads the line-oriented configuration files that drive an online
//! histogram display: a preamble of global directives followed by pages
//! of draw commands. The result is a [`PlotConfig`] that can be queried
//! page by page.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod directive;
pub mod discovery;
pub mod draw;
pub mod error;
pub mod layout;
pub mod logging;
pub mod numeric;
pub mod output;
pub mod parser;

pub use config::{GlobalConfig, LoadOptions, NamedCut, PlotConfig};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use directive::{dispatch, Directive, DirectiveKind};
pub use discovery::{discover_paths, ScanResult};
pub use draw::{decode_draw_line, DrawCommand, DrawKey};
pub use error::{ConfigError, Result, SyntaxErrorKind};
pub use layout::{expand_multiplots, segment, LogFlags, Page, Segmentation};
pub use parser::{tokenize_line, ConfigDocument, ConfigLine, IncludeResolver, Origin};

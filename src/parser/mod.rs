//! Reading configuration text into a flat document of token lines.
//!
//! # Line Grammar
//!
//! - `#` starts a comment that runs to end of line
//! - fields are separated by spaces or tabs
//! - `"..."` or `'...'` makes one field out of text containing whitespace
//! - an unquoted field may carry a call-like argument list, e.g.
//!   `macro.C("x", "y")`, kept as a single field
//! - `include <file>` is replaced by the lines of `<file>`
//!
//! # Usage
//!
//! ```ignore
//! use plotcfg::diagnostics::Diagnostics;
//! use plotcfg::parser::IncludeResolver;
//!
//! let mut diags = Diagnostics::new();
//! let doc = IncludeResolver::new("cfg:/opt/cfg", &mut diags)
//!     .load_file(Path::new("hms.cfg"))?;
//! println!("{} lines", doc.len());
//! ```

pub mod env;
mod include;
mod origin;
mod tokenizer;
mod types;

pub use include::IncludeResolver;
pub use origin::Origin;
pub use tokenizer::{strip_comment, tokenize_line};
pub use types::{ConfigDocument, ConfigLine};

//! Output filename templates.
//!
//! | Placeholder     | Replaced by                                  |
//! |-----------------|----------------------------------------------|
//! | `%R`, `XXXXX`   | run number, zero-padded to the run width     |
//! | `%C`            | configuration file base name                 |
//! | `%V`            | variable or macro name, without extension    |
//! | `%P`            | 1-based page number, zero-padded             |
//! | `%D`            | pad number, zero-padded                      |
//! | `%E`            | plot format                                  |
//! | `%F`            | image format                                 |

use std::path::Path;

pub const RUN_PLACEHOLDER: &str = "%R";
pub const LEGACY_RUN_PLACEHOLDER: &str = "XXXXX";

/// Values substituted into an output filename template.
#[derive(Debug, Clone, Default)]
pub struct Placeholders<'a> {
    pub run: u32,
    pub run_width: u32,
    pub config_name: &'a str,
    pub variable: Option<&'a str>,
    /// 1-based page number.
    pub page: usize,
    pub page_width: u32,
    pub pad: usize,
    pub pad_width: u32,
    pub plot_format: &'a str,
    pub image_format: &'a str,
}

fn zero_pad(value: impl std::fmt::Display, width: u32) -> String {
    format!("{:0>width$}", value.to_string(), width = width as usize)
}

/// Replace `XXXXX` and `%R` with the run number, zero-padded to `width`
/// digits when `width > 0`.
pub fn substitute_run_number(template: &str, run: u32, width: u32) -> String {
    let run = zero_pad(run, width);
    template
        .replace(LEGACY_RUN_PLACEHOLDER, &run)
        .replace(RUN_PLACEHOLDER, &run)
}

/// File name without directory or anything from the first `.` on.
pub fn strip_extension(name: &str) -> &str {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name);
    match base.find('.') {
        Some(pos) => &base[..pos],
        None => base,
    }
}

impl Placeholders<'_> {
    /// Expand every placeholder in `template`.
    pub fn expand(&self, template: &str) -> String {
        let mut out = substitute_run_number(template, self.run, self.run_width);
        out = out.replace("%C", strip_extension(self.config_name));
        if let Some(variable) = self.variable.filter(|v| !v.is_empty()) {
            out = out.replace("%V", strip_extension(variable));
        }
        out = out.replace("%P", &zero_pad(self.page, self.page_width));
        out = out.replace("%D", &zero_pad(self.pad, self.pad_width));
        out = out.replace("%E", self.plot_format);
        out.replace("%F", self.image_format)
    }
}

//! Configuration file loading with recursive `include` resolution.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, Result};

use super::env::{expand_path, find_in_path};
use super::origin::Origin;
use super::tokenizer::tokenize_line;
use super::types::{ConfigDocument, ConfigLine};

const INCLUDE: &str = "include";

/// Loads configuration text into a flat [`ConfigDocument`], inlining
/// `include <file>` lines as it goes.
///
/// Any failure (syntax error, missing include, include cycle) aborts the
/// whole load; no partial document is ever returned.
pub struct IncludeResolver<'a> {
    search_path: &'a str,
    diagnostics: &'a mut Diagnostics,
    /// Canonical paths of the files currently being loaded, outermost first.
    chain: Vec<PathBuf>,
    includes_loaded: usize,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(search_path: &'a str, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            search_path,
            diagnostics,
            chain: Vec::new(),
            includes_loaded: 0,
        }
    }

    /// Number of include files inlined so far.
    pub fn includes_loaded(&self) -> usize {
        self.includes_loaded
    }

    /// Load a top-level configuration file.
    pub fn load_file(mut self, path: &Path) -> Result<ConfigDocument> {
        let mut lines = Vec::new();
        self.read_file(path, &mut lines)?;
        tracing::info!(
            lines = lines.len(),
            includes = self.includes_loaded,
            "total configuration lines read"
        );
        Ok(ConfigDocument::new(lines))
    }

    /// Load configuration text that did not come from a file.
    ///
    /// Includes are still resolved against the current directory and the
    /// search path.
    pub fn load_source(mut self, source: &str) -> Result<ConfigDocument> {
        let mut lines = Vec::new();
        let file = Arc::new(PathBuf::from("<inline>"));
        self.read_lines(source, &file, &mut lines)?;
        Ok(ConfigDocument::new(lines))
    }

    fn read_file(&mut self, path: &Path, out: &mut Vec<ConfigLine>) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if self.chain.contains(&canonical) {
            return Err(ConfigError::IncludeCycle {
                path: canonical,
                chain: self.chain.clone(),
            });
        }

        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.chain.push(canonical);
        let before = out.len();
        let file = Arc::new(path.to_path_buf());
        let result = self.read_lines(&source, &file, out);
        self.chain.pop();
        result?;

        tracing::debug!(
            lines = out.len() - before,
            file = %path.display(),
            "lines read"
        );
        Ok(())
    }

    fn read_lines(
        &mut self,
        source: &str,
        file: &Arc<PathBuf>,
        out: &mut Vec<ConfigLine>,
    ) -> Result<()> {
        for (i, raw) in source.lines().enumerate() {
            let origin = Origin::new(Arc::clone(file), i as u32 + 1);
            let fields = tokenize_line(raw).map_err(|kind| ConfigError::Syntax {
                kind,
                origin: origin.clone(),
                line: raw.to_string(),
                help: None,
            })?;
            if fields.is_empty() {
                continue;
            }

            if fields[0] == INCLUDE {
                if fields.len() != 2 || fields[1].is_empty() {
                    self.diagnostics.warning(
                        "plotcfg::include",
                        format!(
                            "Too {} arguments for include statement at {} (expect 1 = file name). Skipping line: \"{}\"",
                            if fields.len() < 2 { "few" } else { "many" },
                            origin,
                            raw.trim()
                        ),
                    );
                    continue;
                }
                self.include(&fields[1], &origin, out)?;
                continue;
            }

            out.push(ConfigLine::new(fields, origin));
        }
        Ok(())
    }

    fn include(&mut self, name: &str, origin: &Origin, out: &mut Vec<ConfigLine>) -> Result<()> {
        let expanded = expand_path(name)?;
        let path = find_in_path(&expanded, self.search_path).ok_or_else(|| {
            ConfigError::Include {
                path: expanded.clone(),
                origin: origin.clone(),
                reason: "file not found in current directory or search path".to_string(),
            }
        })?;

        tracing::debug!(file = %path.display(), "loading include file");
        self.read_file(&path, out).map_err(|e| match e {
            ConfigError::Io { message, .. } => ConfigError::Include {
                path: expanded.clone(),
                origin: origin.clone(),
                reason: message,
            },
            other => other,
        })?;
        self.includes_loaded += 1;
        Ok(())
    }
}

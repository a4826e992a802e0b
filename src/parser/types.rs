//! Tokenized configuration lines and documents.

use std::ops::Index;

use serde::Serialize;

use super::origin::Origin;

/// One effective input line, split into fields.
///
/// Lines are never empty: the loader drops blank and comment-only lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigLine {
    pub fields: Vec<String>,
    #[serde(skip)]
    pub origin: Origin,
}

impl ConfigLine {
    pub fn new(fields: Vec<String>, origin: Origin) -> Self {
        debug_assert!(!fields.is_empty(), "config lines have at least one field");
        Self { fields, origin }
    }

    /// Build a line from string slices (mostly useful in tests).
    pub fn from_strs(fields: &[&str]) -> Self {
        Self::new(
            fields.iter().map(|s| s.to_string()).collect(),
            Origin::default(),
        )
    }

    /// The directive or variable name.
    pub fn command(&self) -> &str {
        &self.fields[0]
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[String] {
        &self.fields[1..]
    }

    pub fn is(&self, command: &str) -> bool {
        self.command() == command
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields joined back with single spaces.
    pub fn joined(&self) -> String {
        self.fields.join(" ")
    }
}

impl Index<usize> for ConfigLine {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.fields[index]
    }
}

/// An ordered sequence of configuration lines.
///
/// Transforms such as multiplot expansion produce a new document rather
/// than editing one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    lines: Vec<ConfigLine>,
}

impl ConfigDocument {
    pub fn new(lines: Vec<ConfigLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ConfigLine> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigLine> {
        self.lines.iter()
    }

    /// Position of the first line whose command is `command`.
    pub fn position(&self, command: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.is(command))
    }
}

impl From<Vec<ConfigLine>> for ConfigDocument {
    fn from(lines: Vec<ConfigLine>) -> Self {
        Self::new(lines)
    }
}

impl FromIterator<ConfigLine> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = ConfigLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConfigDocument {
    type Item = &'a ConfigLine;
    type IntoIter = std::slice::Iter<'a, ConfigLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl Index<usize> for ConfigDocument {
    type Output = ConfigLine;

    fn index(&self, index: usize) -> &ConfigLine {
        &self.lines[index]
    }
}

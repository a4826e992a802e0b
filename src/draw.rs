//! Decoding of page draw lines.
//!
//! A draw line names what to plot and how:
//!
//! ```text
//! <variable> [cut] [-drawopt v] [-title v] [-tree v] [-grid]
//!            [-logx] [-logy] [-logz] [-nostat] [-noshowgolden]
//! macro <macro-call> [options...]
//! loadmacro <library> <macro-call>
//! loadlib <library>
//! ```
//!
//! Any token that is not a recognized option is taken as the cut. When
//! several appear the last one wins.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::parser::ConfigLine;

/// Keys of a decoded draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawKey {
    Variable,
    Cut,
    Drawopt,
    Title,
    Tree,
    Grid,
    Logx,
    Logy,
    Logz,
    Nostat,
    Noshowgolden,
    Macro,
    Library,
}

impl DrawKey {
    pub fn as_str(self) -> &'static str {
        match self {
            DrawKey::Variable => "variable",
            DrawKey::Cut => "cut",
            DrawKey::Drawopt => "drawopt",
            DrawKey::Title => "title",
            DrawKey::Tree => "tree",
            DrawKey::Grid => "grid",
            DrawKey::Logx => "logx",
            DrawKey::Logy => "logy",
            DrawKey::Logz => "logz",
            DrawKey::Nostat => "nostat",
            DrawKey::Noshowgolden => "noshowgolden",
            DrawKey::Macro => "macro",
            DrawKey::Library => "library",
        }
    }
}

impl fmt::Display for DrawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded draw line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawCommand {
    entries: BTreeMap<DrawKey, String>,
}

impl DrawCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: DrawKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: DrawKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn insert(&mut self, key: DrawKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn variable(&self) -> Option<&str> {
        self.get(DrawKey::Variable)
    }

    pub fn cut(&self) -> Option<&str> {
        self.get(DrawKey::Cut)
    }

    pub fn is_macro(&self) -> bool {
        self.variable() == Some("macro")
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DrawKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<const N: usize> From<[(DrawKey, &str); N]> for DrawCommand {
    fn from(pairs: [(DrawKey, &str); N]) -> Self {
        let mut cmd = DrawCommand::new();
        for (key, value) in pairs {
            cmd.insert(key, value);
        }
        cmd
    }
}

/// Decode one page body line into a draw command.
///
/// Malformed `macro`, `loadmacro` and `loadlib` lines are logged. A bare
/// `macro` decodes to an empty command; the other two keep only the
/// variable.
pub fn decode_draw_line(line: &ConfigLine) -> DrawCommand {
    let fields = &line.fields;
    let mut cmd = DrawCommand::new();
    cmd.insert(DrawKey::Variable, fields[0].as_str());

    let options_start = match fields[0].as_str() {
        "macro" => {
            let Some(name) = fields.get(1) else {
                tracing::error!(origin = %line.origin, "macro command without argument");
                return DrawCommand::new();
            };
            cmd.insert(DrawKey::Macro, name.as_str());
            2
        }
        "loadmacro" => {
            if fields.len() > 2 {
                cmd.insert(DrawKey::Library, fields[1].as_str());
                cmd.insert(DrawKey::Macro, fields[2].as_str());
            } else {
                tracing::error!(
                    origin = %line.origin,
                    found = fields.len() - 1,
                    "not enough arguments for loadmacro command, expected 2"
                );
            }
            return cmd;
        }
        "loadlib" => {
            match fields.get(1) {
                Some(library) => cmd.insert(DrawKey::Library, library.as_str()),
                None => tracing::error!(origin = %line.origin, "loadlib command without argument"),
            }
            return cmd;
        }
        _ => 1,
    };

    let mut i = options_start;
    while i < fields.len() {
        let token = fields[i].as_str();
        let value = fields.get(i + 1);
        match (token, value) {
            ("-drawopt", Some(v)) => {
                cmd.insert(DrawKey::Drawopt, v.as_str());
                i += 1;
            }
            ("-title", Some(v)) => {
                cmd.insert(DrawKey::Title, v.as_str());
                i += 1;
            }
            ("-tree", Some(v)) => {
                cmd.insert(DrawKey::Tree, v.as_str());
                i += 1;
            }
            ("-grid", _) => cmd.insert(DrawKey::Grid, "grid"),
            ("-logx", _) => cmd.insert(DrawKey::Logx, "logx"),
            ("-logy", _) => cmd.insert(DrawKey::Logy, "logy"),
            ("-logz", _) => cmd.insert(DrawKey::Logz, "logz"),
            ("-nostat", _) => cmd.insert(DrawKey::Nostat, "nostat"),
            ("-noshowgolden", _) => cmd.insert(DrawKey::Noshowgolden, "noshowgolden"),
            _ => cmd.insert(DrawKey::Cut, token),
        }
        i += 1;
    }

    tracing::trace!(origin = %line.origin, command = ?cmd, "decoded draw line");
    cmd
}

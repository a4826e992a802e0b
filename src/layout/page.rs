//! Page records produced by segmentation.

use serde::Serialize;

/// Log-scale axes requested for a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogFlags {
    pub logx: bool,
    pub logy: bool,
    pub logz: bool,
}

impl LogFlags {
    pub const NONE: LogFlags = LogFlags {
        logx: false,
        logy: false,
        logz: false,
    };

    /// Parse a `newpage` log option (`logx`, `logy`, `logz`, `logxy`).
    pub fn from_option(option: &str) -> Option<LogFlags> {
        let flags = match option {
            "logx" => LogFlags { logx: true, ..Self::NONE },
            "logy" => LogFlags { logy: true, ..Self::NONE },
            "logz" => LogFlags { logz: true, ..Self::NONE },
            "logxy" => LogFlags {
                logx: true,
                logy: true,
                logz: false,
            },
            _ => return None,
        };
        Some(flags)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// One page of the configuration: a `newpage` line and the lines after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Zero-based page number.
    pub index: usize,
    /// Document offset of the `newpage` line.
    pub start_offset: usize,
    /// Lines in the page, not counting `newpage` itself.
    pub cmd_count: usize,
    /// Lines in the page that are not `title` lines.
    pub draw_count: usize,
    pub nx: u32,
    pub ny: u32,
    pub log_flags: LogFlags,
    pub title: String,
}

impl Page {
    pub fn dim(&self) -> (u32, u32) {
        (self.nx, self.ny)
    }

    /// Document range of the page body.
    pub fn body_range(&self) -> std::ops::Range<usize> {
        self.start_offset + 1..self.start_offset + 1 + self.cmd_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_options() {
        assert_eq!(
            LogFlags::from_option("logxy"),
            Some(LogFlags {
                logx: true,
                logy: true,
                logz: false
            })
        );
        assert!(LogFlags::from_option("logz").unwrap().logz);
        assert_eq!(LogFlags::from_option("log"), None);
        assert!(LogFlags::default().is_empty());
    }
}

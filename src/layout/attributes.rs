//! Parsing of `newpage` and `title` lines.
//!
//! `newpage` accepts an optional layout and an optional log-axis option:
//!
//! ```text
//! newpage              approximately square layout from the plot count
//! newpage n            n by n
//! newpage x y          x by y
//! newpage ... logy     any of the above, with logx/logy/logz/logxy last
//! ```

use super::page::LogFlags;

/// Exclusive upper bound for layout dimensions.
pub const MAX_DIM: i64 = 50;

/// The layout requested by a `newpage` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Auto,
    Grid { nx: u32, ny: u32 },
}

impl Layout {
    /// Resolve to concrete dimensions once the page's plot count is known.
    pub fn resolve(self, draw_count: usize) -> (u32, u32) {
        match self {
            Layout::Auto => {
                let dim = auto_dim(draw_count);
                (dim, dim)
            }
            Layout::Grid { nx, ny } => (nx, ny),
        }
    }
}

/// Parsed `newpage` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewpageSpec {
    pub layout: Layout,
    pub log_flags: LogFlags,
    /// Why a requested layout was rejected, if it was.
    pub warning: Option<String>,
}

/// Square side for `draw_count` plots: `round(sqrt(draw_count + 1))`.
pub fn auto_dim(draw_count: usize) -> u32 {
    ((draw_count + 1) as f64).sqrt().round() as u32
}

/// Parse the arguments following `newpage` for the page numbered `page`
/// (zero-based).
pub fn parse_newpage(args: &[String], page: usize) -> NewpageSpec {
    let mut args = args;
    let mut log_flags = LogFlags::NONE;

    if let Some(flags) = args.last().and_then(|last| LogFlags::from_option(last)) {
        log_flags = flags;
        args = &args[..args.len() - 1];
    }

    let (layout, warning) = match args {
        [] => (Layout::Auto, None),
        [n] => match parse_dimension(n) {
            Ok(n) => (Layout::Grid { nx: n, ny: n }, None),
            Err(reason) => (Layout::Auto, Some(invalid_argument(n, page, reason))),
        },
        [x, y] => match (parse_dimension(x), parse_dimension(y)) {
            (Ok(nx), Ok(ny)) => (Layout::Grid { nx, ny }, None),
            (Err(reason), _) => (Layout::Auto, Some(invalid_argument(x, page, reason))),
            (_, Err(reason)) => (Layout::Auto, Some(invalid_argument(y, page, reason))),
        },
        _ => (
            Layout::Auto,
            Some(format!(
                "newpage command for page {} has too many arguments. \
                 Will automatically determine dimensions of page.",
                page + 1
            )),
        ),
    };

    NewpageSpec {
        layout,
        log_flags,
        warning,
    }
}

fn invalid_argument(arg: &str, page: usize, reason: &str) -> String {
    format!(
        "Invalid argument \"{}\" following newpage command for page {}: {}. \
         Will automatically determine dimensions of page.",
        arg,
        page + 1,
        reason
    )
}

/// Parse one layout dimension, which must satisfy `0 < n < 50`.
fn parse_dimension(arg: &str) -> Result<u32, &'static str> {
    let (value, consumed) = leading_int(arg)?;
    if consumed == arg.len() && value > 0 && value < MAX_DIM {
        return Ok(value as u32);
    }
    if value <= 0 {
        Err("Number must be > 0")
    } else if value >= MAX_DIM {
        Err("Number must be < 50")
    } else {
        Err("Garbage following number")
    }
}

/// Parse a leading (optionally signed) integer, returning it with the
/// number of bytes it occupied.
fn leading_int(arg: &str) -> Result<(i64, usize), &'static str> {
    let bytes = arg.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return Err("Expected a number");
    }
    let value = arg[..end]
        .parse::<i32>()
        .map_err(|_| "Number out of range")?;
    Ok((value as i64, end))
}

/// Build a page title from the arguments of a `title` line.
///
/// Arguments are joined with single spaces so that old unquoted multi-word
/// titles keep working. An empty result gives the default title.
pub fn parse_title(args: &[String], page: usize) -> String {
    let title = args.join(" ");
    if title.is_empty() {
        default_title(page)
    } else {
        title
    }
}

/// `Page <n>` with a 1-based page number.
pub fn default_title(page: usize) -> String {
    format!("Page {}", page + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_dim() {
        assert_eq!(auto_dim(0), 1);
        assert_eq!(auto_dim(2), 2);
        assert_eq!(auto_dim(3), 2);
        assert_eq!(auto_dim(5), 2);
        assert_eq!(auto_dim(6), 3);
        assert_eq!(auto_dim(15), 4);
    }

    #[test]
    fn test_no_arguments_is_auto() {
        let spec = parse_newpage(&[], 0);
        assert_eq!(spec.layout, Layout::Auto);
        assert_eq!(spec.layout.resolve(3), (2, 2));
        assert!(spec.warning.is_none());
    }

    #[test]
    fn test_square_layout() {
        let spec = parse_newpage(&args(&["3"]), 0);
        assert_eq!(spec.layout.resolve(1), (3, 3));
    }

    #[test]
    fn test_grid_layout() {
        let spec = parse_newpage(&args(&["2", "5"]), 0);
        assert_eq!(spec.layout.resolve(1), (2, 5));
    }

    #[test]
    fn test_zero_falls_back_to_auto() {
        let spec = parse_newpage(&args(&["0"]), 4);
        assert_eq!(spec.layout, Layout::Auto);
        let warning = spec.warning.unwrap();
        assert!(warning.contains("page 5"));
        assert!(warning.contains("Number must be > 0"));
    }

    #[test]
    fn test_invalid_dimension_reasons() {
        let reason = |a: &str| parse_dimension(a).unwrap_err();
        assert_eq!(reason("50"), "Number must be < 50");
        assert_eq!(reason("-2"), "Number must be > 0");
        assert_eq!(reason("3x"), "Garbage following number");
        assert_eq!(reason("abc"), "Expected a number");
        assert_eq!(reason("99999999999"), "Number out of range");
        assert_eq!(parse_dimension("49"), Ok(49));
    }

    #[test]
    fn test_log_option_stripped() {
        let spec = parse_newpage(&args(&["2", "3", "logxy"]), 0);
        assert_eq!(spec.layout, Layout::Grid { nx: 2, ny: 3 });
        assert!(spec.log_flags.logx && spec.log_flags.logy && !spec.log_flags.logz);

        let spec = parse_newpage(&args(&["logz"]), 0);
        assert_eq!(spec.layout, Layout::Auto);
        assert!(spec.log_flags.logz);
    }

    #[test]
    fn test_too_many_arguments() {
        let spec = parse_newpage(&args(&["1", "2", "3"]), 1);
        assert_eq!(spec.layout, Layout::Auto);
        assert!(spec.warning.unwrap().contains("too many arguments"));
    }

    #[test]
    fn test_bad_second_dimension() {
        let spec = parse_newpage(&args(&["2", "x"]), 0);
        assert_eq!(spec.layout, Layout::Auto);
        assert!(spec.warning.unwrap().contains("\"x\""));
    }

    #[test]
    fn test_titles() {
        assert_eq!(parse_title(&args(&["Beam", "current"]), 0), "Beam current");
        assert_eq!(parse_title(&args(&["Quoted title"]), 0), "Quoted title");
        assert_eq!(parse_title(&[], 2), "Page 3");
        assert_eq!(parse_title(&args(&[""]), 0), "Page 1");
    }
}

//! Integer arguments shared by directives and multiplot lines.

use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, Result};

/// Parse an integer argument. Anything that is not a whole integer aborts
/// the load.
pub fn parse_int(what: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidNumber {
            what: what.to_string(),
            value: value.to_string(),
        })
}

/// Clamp `value` into `[lo, hi]`, recording a warning when it had to move.
pub fn clamp_range(value: i64, lo: i64, hi: i64, name: &str, diagnostics: &mut Diagnostics) -> i64 {
    if value < lo {
        diagnostics.warning(
            "plotcfg::range",
            format!("{} = {} too small, setting to {}", name, value, lo),
        );
        lo
    } else if value > hi {
        diagnostics.warning(
            "plotcfg::range",
            format!("{} = {} too large, setting to {}", name, value, hi),
        );
        hi
    } else {
        value
    }
}

/// Parse and clamp in one step.
pub fn parse_in_range(
    value: &str,
    lo: i64,
    hi: i64,
    name: &str,
    diagnostics: &mut Diagnostics,
) -> Result<i64> {
    let parsed = parse_int(name, value)?;
    Ok(clamp_range(parsed, lo, hi, name, diagnostics))
}

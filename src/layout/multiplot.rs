//! Expansion of `multiplot <lo> <hi> <template...>` lines.
//!
//! Each multiplot line becomes one draw line per index in `[lo, hi]`, with
//! every `XXXXX` in the template replaced by the index.

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::numeric::parse_in_range;
use crate::parser::{ConfigDocument, ConfigLine};

pub const MULTIPLOT: &str = "multiplot";

/// Text replaced by the index in each expanded line.
pub const PLACEHOLDER: &str = "XXXXX";

/// Maximum number of lines a single multiplot line may produce.
pub const MAX_MULTI: i64 = 64;

const MAX_INDEX: i64 = 65535;

/// Expand every multiplot line at or after `from` into concrete lines.
///
/// Returns `None` when there is nothing to expand. Otherwise returns a new
/// document; `doc` itself is left untouched and its page layout must be
/// recomputed from the result.
pub fn expand_multiplots(
    doc: &ConfigDocument,
    from: usize,
    diagnostics: &mut Diagnostics,
) -> Result<Option<ConfigDocument>> {
    let lines = doc.lines();
    let first = match lines
        .iter()
        .skip(from)
        .position(|l| l.is(MULTIPLOT))
    {
        Some(i) => from + i,
        None => return Ok(None),
    };

    let mut expanded = Vec::with_capacity(lines.len() * 2);
    expanded.extend_from_slice(&lines[..first]);

    for line in &lines[first..] {
        if line.is(MULTIPLOT) {
            expand_line(line, &mut expanded, diagnostics)?;
        } else {
            expanded.push(line.clone());
        }
    }

    Ok(Some(ConfigDocument::new(expanded)))
}

fn expand_line(
    line: &ConfigLine,
    out: &mut Vec<ConfigLine>,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    let args = line.args();
    if args.len() < 3 {
        diagnostics.warning(
            "plotcfg::args",
            format!(
                "not enough arguments for multiplot command at {}, needs at least 3, found {}. Command skipped.",
                line.origin,
                args.len()
            ),
        );
        return Ok(());
    }

    let mut lo = parse_in_range(&args[0], 0, MAX_INDEX, "multiplot lolimit", diagnostics)?;
    let mut hi = parse_in_range(&args[1], 0, MAX_INDEX, "multiplot hilimit", diagnostics)?;

    if hi < lo {
        diagnostics.warning(
            "plotcfg::multiplot",
            format!(
                "multiplot lolimit = {} > hilimit = {}. Swapping values.",
                lo, hi
            ),
        );
        std::mem::swap(&mut lo, &mut hi);
    }
    if hi - lo + 1 > MAX_MULTI {
        diagnostics.warning(
            "plotcfg::multiplot",
            format!(
                "multiplot range too large: {}-{}. Max {}. Truncating range.",
                lo, hi, MAX_MULTI
            ),
        );
        hi = lo + MAX_MULTI - 1;
    }

    let template = &args[2..];
    for index in lo..=hi {
        let repl = index.to_string();
        let fields = template
            .iter()
            .map(|field| field.replace(PLACEHOLDER, &repl))
            .collect();
        out.push(ConfigLine::new(fields, line.origin.clone()));
    }
    Ok(())
}

//! Line tokenizer.
//!
//! Splits a line into whitespace-separated fields. Quoted fields are taken
//! verbatim up to the matching quote, and unquoted fields may carry a
//! call-like argument list such as `macro.C("x", "y")`, which is copied
//! through whole, whitespace and quotes included.

use crate::error::SyntaxErrorKind;

const COMMENT: char = '#';
const DQUOTE: u8 = b'"';
const SQUOTE: u8 = b'\'';
const OPEN_PAREN: u8 = b'(';
const CLOSE_PAREN: u8 = b')';

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Strip a trailing comment. Quotes are not considered.
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split one raw line into fields.
///
/// Comments are stripped first. A blank or comment-only line yields an
/// empty vector.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, SyntaxErrorKind> {
    let line = strip_comment(line);
    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut fields = Vec::new();
    let mut pos = 0;

    loop {
        while pos < len && is_blank(bytes[pos]) {
            pos += 1;
        }
        if pos >= len {
            break;
        }

        let c = bytes[pos];
        if c == DQUOTE || c == SQUOTE {
            let start = pos + 1;
            let end = line[start..]
                .as_bytes()
                .iter()
                .position(|&b| b == c)
                .map(|i| start + i)
                .ok_or(SyntaxErrorKind::UnbalancedQuotes)?;
            fields.push(line[start..end].to_string());
            pos = end + 1;
        } else {
            let end = scan_unquoted(bytes, pos)?;
            fields.push(line[pos..end].to_string());
            pos = end;
        }
    }

    Ok(fields)
}

/// Find the end of an unquoted field starting at `start`.
fn scan_unquoted(bytes: &[u8], start: usize) -> Result<usize, SyntaxErrorKind> {
    let mut in_arg = false;
    let mut in_quote = false;
    let mut end = start;

    while end < bytes.len() {
        let c = bytes[end];
        if !in_arg && !in_quote && is_blank(c) {
            break;
        }
        match c {
            OPEN_PAREN if !in_quote => {
                if in_arg {
                    return Err(SyntaxErrorKind::NestedParen);
                }
                in_arg = true;
            }
            CLOSE_PAREN if !in_quote => {
                if !in_arg {
                    return Err(SyntaxErrorKind::UnmatchedParen);
                }
                in_arg = false;
            }
            DQUOTE => in_quote = !in_quote,
            _ => {}
        }
        end += 1;
    }

    if in_arg {
        return Err(SyntaxErrorKind::UnbalancedParens);
    }
    if in_quote {
        return Err(SyntaxErrorKind::UnbalancedQuotes);
    }
    Ok(end)
}

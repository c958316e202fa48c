//! Formula preprocessing
//!
//! Strips whitespace and rewrites each contextually-unary `-` to the
//! [`UNARY_MINUS`] marker so the compiler can treat the two minuses as
//! distinct operators.

use crate::operators::{self, UNARY_MINUS};

/// Rewrite unary minuses and drop whitespace.
///
/// A `-` is unary when it starts the formula or directly follows an operator
/// or an open parenthesis. The check runs left to right against the output
/// built so far, so consecutive minuses resolve independently: `--W` becomes
/// `##W` (the second `-` sees the already-rewritten `#` before it).
pub fn rewrite_unary_minus(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len());
    for c in formula.chars() {
        if c.is_whitespace() {
            continue;
        }
        if c == '-' {
            let unary = match out.chars().last() {
                None => true,
                Some(prev) => operators::lookup(prev).is_some() || prev == '(',
            };
            out.push(if unary { UNARY_MINUS } else { '-' });
        } else {
            out.push(c);
        }
    }
    out
}

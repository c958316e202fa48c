//! Formula tokenizer
//!
//! Splits a preprocessed (whitespace-free, unary-minus-rewritten) formula
//! into raw tokens: numeric literals, parentheses, the argument separator,
//! operator symbols, and alphabetic identifiers.

use lazy_regex::regex;

/// Tokenize a preprocessed formula string.
///
/// Characters that match no token class are skipped rather than rejected, so
/// stray punctuation simply never reaches the compiler. A formula made of
/// nothing but such characters yields an empty token stream, which the
/// compiler rejects as a malformed program.
pub fn tokenize(input: &str) -> Vec<&str> {
    // number | paren/separator | operator symbol | identifier
    regex!(r"\d+(?:\.\d+)?(?:[eE]\d+)?|[(),]|[-+*/^#]|[A-Za-z]+")
        .find_iter(input)
        .map(|m| m.as_str())
        .collect()
}

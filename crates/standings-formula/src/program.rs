//! Compiled program types
//!
//! A compiled formula is a flat postfix token sequence, directly executable
//! by the stack machine in [`crate::evaluator`] without further parsing.

use crate::evaluator::Bindings;
use crate::operators::Operator;

/// One element of a postfix program
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixToken {
    /// Numeric literal
    Number(f64),
    /// Reference to a recognized variable
    Variable(String),
    /// Operator from the static table
    Operator(&'static Operator),
}

/// A validated postfix program, immutable once built.
///
/// Construct via [`crate::compile_formula`]; evaluate via
/// [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFormula {
    tokens: Vec<PostfixToken>,
}

impl CompiledFormula {
    pub(crate) fn new(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }

    /// The postfix program, in execution order
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }
}

/// The closed set of variable names a formula may reference.
///
/// Supplied by the caller at compile time; the compiler itself has no
/// built-in vocabulary. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSet {
    // sorted for binary search and deterministic probe bindings
    names: Vec<String>,
}

impl VariableSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    /// Case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Bindings with a distinct finite value per variable, used by the
    /// compile-time self-check to exercise every token of a new program.
    pub(crate) fn probe_bindings(&self) -> Bindings {
        let mut bindings = Bindings::new();
        for (i, name) in self.names.iter().enumerate() {
            bindings.insert(name, (i + 1) as f64);
        }
        bindings
    }
}

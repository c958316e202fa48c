//! # standings-formula
//!
//! Compiler and evaluator for user-configurable points formulas.
//!
//! This crate provides:
//! - Formula compilation (infix text → postfix program)
//! - Program evaluation (postfix program + variable bindings → number)
//! - A compiled-formula cache keyed by verbatim source text
//!
//! Formulas are arithmetic expressions over a caller-supplied vocabulary of
//! variable names, with `+ - * / ^`, unary minus, numeric literals, and
//! parentheses. Compilation runs an eager self-check, so any formula that
//! compiles is guaranteed to evaluate cleanly against complete bindings.
//!
//! ## Example
//!
//! ```rust
//! use standings_formula::{compile_formula, evaluate, Bindings, VariableSet};
//!
//! let variables = VariableSet::new(["W", "L"]);
//! let program = compile_formula("2*W-L", &variables).unwrap();
//!
//! let mut bindings = Bindings::new();
//! bindings.insert("W", 10.0);
//! bindings.insert("L", 4.0);
//! assert_eq!(evaluate(&program, &bindings).unwrap(), 16.0);
//! ```

pub mod cache;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod operators;
pub mod preprocess;
pub mod program;
pub mod tokenizer;

pub use cache::FormulaCache;
pub use compiler::compile_formula;
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, Bindings};
pub use program::{CompiledFormula, PostfixToken, VariableSet};

//! Formula evaluator
//!
//! A numeric stack machine over compiled postfix programs.

use ahash::AHashMap;

use crate::error::{FormulaError, FormulaResult};
use crate::operators::Arity;
use crate::program::{CompiledFormula, PostfixToken};

/// Per-evaluation variable values.
///
/// Built fresh for each call; must cover every variable the program
/// references. An incomplete binding set is a caller bug, not input error,
/// and evaluation panics on it.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: AHashMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

/// Evaluate a compiled program against a complete set of bindings.
///
/// Pure: the result depends only on the program and the bindings, with
/// ordinary IEEE float semantics (division by zero gives signed infinity).
/// A program that passed compilation cannot return `Err` here, but the
/// stack-arity checks remain for programs evaluated through other paths.
///
/// # Panics
/// Panics if the program references a variable absent from `bindings`.
pub fn evaluate(program: &CompiledFormula, bindings: &Bindings) -> FormulaResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in program.tokens() {
        match token {
            PostfixToken::Number(value) => stack.push(*value),
            PostfixToken::Variable(name) => {
                let value = bindings
                    .get(name)
                    .unwrap_or_else(|| panic!("no binding supplied for variable \"{name}\""));
                stack.push(value);
            }
            PostfixToken::Operator(op) => {
                let insufficient = FormulaError::InsufficientOperands { symbol: op.symbol };
                let result = match op.arity {
                    Arity::Unary(func) => {
                        let a = stack.pop().ok_or(insufficient)?;
                        func(a)
                    }
                    Arity::Binary(func) => {
                        // operands pop in reverse push order
                        let b = stack.pop().ok_or(insufficient.clone())?;
                        let a = stack.pop().ok_or(insufficient)?;
                        func(a, b)
                    }
                };
                stack.push(result);
            }
        }
    }

    if stack.len() == 1 {
        Ok(stack[0])
    } else {
        Err(FormulaError::MalformedProgram {
            remaining: stack.len(),
        })
    }
}

//! Formula compiler
//!
//! Turns infix formula text into a validated postfix program:
//! preprocess → tokenize → shunting-yard reorder → token classification →
//! compile-time self-check.

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::evaluate;
use crate::operators::{self, Associativity};
use crate::preprocess::rewrite_unary_minus;
use crate::program::{CompiledFormula, PostfixToken, VariableSet};
use crate::tokenizer::tokenize;

/// Compile a formula string against a variable vocabulary.
///
/// Structural errors (mismatched parentheses, misplaced separators, unknown
/// variables) and stack-arity defects are all surfaced here; a formula that
/// compiles cannot fail when later evaluated with complete bindings.
///
/// # Example
/// ```rust
/// use standings_formula::{compile_formula, VariableSet};
///
/// let variables = VariableSet::new(["W", "L", "T", "OTL"]);
/// let program = compile_formula("2*W+OTL+T", &variables).unwrap();
/// assert!(compile_formula("(W+L", &variables).is_err());
/// ```
pub fn compile_formula(formula: &str, variables: &VariableSet) -> FormulaResult<CompiledFormula> {
    let rewritten = rewrite_unary_minus(formula);
    let raw = tokenize(&rewritten);
    let postfix = to_postfix(&raw)?;
    let program = CompiledFormula::new(classify(&postfix, variables)?);

    // Run the program once with throwaway bindings. A postfix program has no
    // branches, so every token is visited and any arity or stack-balance
    // defect surfaces now instead of at first real use.
    evaluate(&program, &variables.probe_bindings())?;

    Ok(program)
}

/// Reorder raw infix tokens into postfix via the shunting-yard algorithm
fn to_postfix<'a>(tokens: &[&'a str]) -> FormulaResult<Vec<&'a str>> {
    let mut output: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&str> = Vec::new();

    for &token in tokens {
        if token == "," {
            while let Some(&top) = stack.last() {
                if top == "(" {
                    break;
                }
                stack.pop();
                output.push(top);
            }
            if stack.is_empty() {
                return Err(FormulaError::MisplacedSeparator);
            }
        } else if let Some(op) = operators::for_token(token) {
            while let Some(&top) = stack.last() {
                let Some(top_op) = operators::for_token(top) else {
                    break;
                };
                let pops = match op.associativity {
                    Associativity::Left => op.precedence <= top_op.precedence,
                    Associativity::Right => op.precedence < top_op.precedence,
                };
                if !pops {
                    break;
                }
                stack.pop();
                output.push(top);
            }
            stack.push(token);
        } else if token == "(" {
            stack.push(token);
        } else if token == ")" {
            loop {
                match stack.pop() {
                    Some("(") => break,
                    Some(top) => output.push(top),
                    None => return Err(FormulaError::MismatchedParentheses),
                }
            }
        } else {
            // literal or identifier
            output.push(token);
        }
    }

    while let Some(top) = stack.pop() {
        if top == "(" || top == ")" {
            return Err(FormulaError::MismatchedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

/// Classify postfix raw tokens into typed program tokens.
///
/// This is where a formula is proven well-formed with respect to the
/// variable vocabulary; the shunting-yard pass only proves bracket and
/// precedence structure.
fn classify(postfix: &[&str], variables: &VariableSet) -> FormulaResult<Vec<PostfixToken>> {
    postfix
        .iter()
        .map(|&token| {
            if let Some(op) = operators::for_token(token) {
                return Ok(PostfixToken::Operator(op));
            }
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(PostfixToken::Number(value)),
                _ if variables.contains(token) => Ok(PostfixToken::Variable(token.to_string())),
                _ => Err(FormulaError::UnknownVariable(token.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn standings() -> VariableSet {
        VariableSet::new(["W", "L", "T", "OTL"])
    }

    #[test]
    fn test_postfix_precedence() {
        let postfix = to_postfix(&["W", "+", "L", "*", "2"]).unwrap();
        assert_eq!(postfix, vec!["W", "L", "2", "*", "+"]);
    }

    #[test]
    fn test_postfix_left_associativity() {
        let postfix = to_postfix(&["W", "-", "L", "-", "T"]).unwrap();
        assert_eq!(postfix, vec!["W", "L", "-", "T", "-"]);
    }

    #[test]
    fn test_postfix_right_associativity_of_power() {
        let postfix = to_postfix(&["2", "^", "3", "^", "2"]).unwrap();
        assert_eq!(postfix, vec!["2", "3", "2", "^", "^"]);
    }

    #[test]
    fn test_postfix_parentheses() {
        let postfix = to_postfix(&["(", "W", "+", "L", ")", "*", "2"]).unwrap();
        assert_eq!(postfix, vec!["W", "L", "+", "2", "*"]);
    }

    #[test]
    fn test_unclosed_paren_rejected_at_drain() {
        assert_eq!(
            to_postfix(&["(", "W", "+", "L"]),
            Err(FormulaError::MismatchedParentheses)
        );
    }

    #[test]
    fn test_extra_close_paren_rejected() {
        assert_eq!(
            to_postfix(&["W", "+", "L", ")"]),
            Err(FormulaError::MismatchedParentheses)
        );
    }

    #[test]
    fn test_separator_outside_parens_rejected() {
        assert_eq!(
            to_postfix(&["W", ",", "L"]),
            Err(FormulaError::MisplacedSeparator)
        );
    }

    #[test]
    fn test_separator_inside_parens_flushes_to_open_paren() {
        let postfix = to_postfix(&["(", "W", "+", "L", ",", "T", ")"]).unwrap();
        assert_eq!(postfix, vec!["W", "L", "+", "T"]);
    }

    #[test]
    fn test_classify() {
        let tokens = classify(&["W", "2.5", "*"], &standings()).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], PostfixToken::Variable("W".into()));
        assert_eq!(tokens[1], PostfixToken::Number(2.5));
        assert!(matches!(tokens[2], PostfixToken::Operator(op) if op.symbol == '*'));
    }

    #[test]
    fn test_classify_rejects_unknown_variable() {
        assert_eq!(
            classify(&["W", "Q", "+"], &standings()),
            Err(FormulaError::UnknownVariable("Q".into()))
        );
    }

    #[test]
    fn test_classify_rejects_non_finite_literal() {
        // 1e999 overflows f64; it must not silently become a Number
        assert_eq!(
            classify(&["1e999"], &standings()),
            Err(FormulaError::UnknownVariable("1e999".into()))
        );
    }

    #[test]
    fn test_compile_rejects_dangling_operator_at_self_check() {
        assert_eq!(
            compile_formula("W+", &standings()),
            Err(FormulaError::InsufficientOperands { symbol: '+' })
        );
    }

    #[test]
    fn test_compile_rejects_disjoint_operands_at_self_check() {
        // two complete operands with no operator joining them
        assert_eq!(
            compile_formula("(W)(L)", &standings()),
            Err(FormulaError::MalformedProgram { remaining: 2 })
        );
    }

    #[test]
    fn test_compile_rejects_empty_formula() {
        assert_eq!(
            compile_formula("", &standings()),
            Err(FormulaError::MalformedProgram { remaining: 0 })
        );
        // all-garbage input degenerates to an empty token stream
        assert_eq!(
            compile_formula("!?", &standings()),
            Err(FormulaError::MalformedProgram { remaining: 0 })
        );
    }

    #[test]
    fn test_compile_accepts_default_style_formula() {
        let program = compile_formula("2*W+OTL+T", &standings()).unwrap();
        assert_eq!(program.tokens().len(), 7);
    }
}

//! Operator table
//!
//! Static metadata for every operator the formula language supports. Each
//! operator is a single non-alphanumeric character, distinct from parentheses
//! and the argument separator, so the tokenizer can match them unambiguously.

/// Marker the preprocessor substitutes for a contextually-unary `-`.
///
/// Never typed by users; it only exists so unary and binary minus can carry
/// different precedence and arity through the compiler.
pub const UNARY_MINUS: char = '#';

/// Operator associativity for equal-precedence chains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Operand count, tagged with the matching numeric function.
///
/// No current operator takes more than two operands; a variadic operator
/// would get a new variant here rather than a redesign of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arity {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl Arity {
    /// Number of operands the operator pops
    pub fn operands(&self) -> usize {
        match self {
            Arity::Unary(_) => 1,
            Arity::Binary(_) => 2,
        }
    }
}

/// A single operator descriptor
#[derive(Debug, PartialEq)]
pub struct Operator {
    pub symbol: char,
    /// Higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
    pub arity: Arity,
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    // IEEE semantics: division by zero yields signed infinity
    a / b
}

fn negate(a: f64) -> f64 {
    -a
}

fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

static OPERATORS: [Operator; 6] = [
    Operator {
        symbol: '+',
        precedence: 1,
        associativity: Associativity::Left,
        arity: Arity::Binary(add),
    },
    Operator {
        symbol: '-',
        precedence: 1,
        associativity: Associativity::Left,
        arity: Arity::Binary(subtract),
    },
    Operator {
        symbol: '*',
        precedence: 2,
        associativity: Associativity::Left,
        arity: Arity::Binary(multiply),
    },
    Operator {
        symbol: '/',
        precedence: 2,
        associativity: Associativity::Left,
        arity: Arity::Binary(divide),
    },
    Operator {
        symbol: UNARY_MINUS,
        precedence: 3,
        associativity: Associativity::Right,
        arity: Arity::Unary(negate),
    },
    Operator {
        symbol: '^',
        precedence: 4,
        associativity: Associativity::Right,
        arity: Arity::Binary(power),
    },
];

/// Look up an operator by its symbol character
pub fn lookup(symbol: char) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| op.symbol == symbol)
}

/// Look up an operator for a raw token (operators are single characters)
pub fn for_token(token: &str) -> Option<&'static Operator> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => lookup(symbol),
        _ => None,
    }
}

/// All operator symbols, for table-invariant checks
pub fn symbols() -> impl Iterator<Item = char> {
    OPERATORS.iter().map(|op| op.symbol)
}

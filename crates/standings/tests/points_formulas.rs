//! End-to-end tests for points formula compilation and evaluation

use standings::{
    compile_formula, evaluate, FormulaError, PointsSystem, TeamRecord, VariableSet,
};

fn standings_vars() -> VariableSet {
    VariableSet::new(["W", "L", "T", "OTL"])
}

/// Multiplication binds tighter than addition
#[test]
fn test_precedence() {
    let points = PointsSystem::new();
    let record = TeamRecord::new(3, 4, 0, 0);
    assert_eq!(points.evaluate(&record, Some("W+L*2")).unwrap(), 11.0);
    assert_eq!(points.evaluate(&record, Some("(W+L)*2")).unwrap(), 14.0);
}

/// Exponentiation groups right to left
#[test]
fn test_power_right_associativity() {
    let points = PointsSystem::new();
    let record = TeamRecord::default();
    assert_eq!(points.evaluate(&record, Some("2^3^2")).unwrap(), 512.0);
}

/// A minus is unary by position, not by a separate spelling
#[test]
fn test_unary_minus_context() {
    let points = PointsSystem::new();
    let record = TeamRecord::new(2, 5, 0, 0);
    assert_eq!(points.evaluate(&record, Some("-W+L")).unwrap(), 3.0);
    assert_eq!(points.evaluate(&record, Some("W--L")).unwrap(), 7.0);
}

#[test]
fn test_division_by_zero_yields_infinity() {
    let points = PointsSystem::new();
    let record = TeamRecord::new(1, 0, 0, 0);
    assert_eq!(
        points.evaluate(&record, Some("W/L")).unwrap(),
        f64::INFINITY
    );
}

/// Malformed formulas are rejected at compile time, before any scoring
#[test]
fn test_malformed_formulas_rejected() {
    let points = PointsSystem::new();
    let record = TeamRecord::new(1, 1, 0, 0);
    assert_eq!(
        points.evaluate(&record, Some("(W+L")),
        Err(FormulaError::MismatchedParentheses)
    );
    assert_eq!(
        points.evaluate(&record, Some("W+")),
        Err(FormulaError::InsufficientOperands { symbol: '+' })
    );
    assert_eq!(
        points.evaluate(&record, Some("W+Q")),
        Err(FormulaError::UnknownVariable("Q".into()))
    );
}

/// A cache hit evaluates identically to the original compile
#[test]
fn test_cache_consistency() {
    let variables = standings_vars();
    let first = compile_formula("W^2-L/(T+1)", &variables).unwrap();
    let second = compile_formula("W^2-L/(T+1)", &variables).unwrap();

    let points = PointsSystem::new();
    for (w, l, t) in [(0, 0, 0), (10, 4, 2), (82, 0, 1), (3, 79, 0)] {
        let record = TeamRecord::new(w, l, t, 0);
        let direct_first = evaluate(&first, &record.bindings()).unwrap();
        let direct_second = evaluate(&second, &record.bindings()).unwrap();
        assert_eq!(direct_first.to_bits(), direct_second.to_bits());

        // the second call here is a cache hit
        let miss = points.evaluate(&record, Some("W^2-L/(T+1)")).unwrap();
        let hit = points.evaluate(&record, Some("W^2-L/(T+1)")).unwrap();
        assert_eq!(miss.to_bits(), hit.to_bits());
        assert_eq!(miss.to_bits(), direct_first.to_bits());
    }
}

/// Repeated evaluation is bit-identical
#[test]
fn test_determinism() {
    let points = PointsSystem::new();
    let record = TeamRecord::new(37, 21, 6, 4);
    let first = points.evaluate(&record, Some("(W+T/2)/(W+L+T+OTL)")).unwrap();
    for _ in 0..10 {
        let again = points
            .evaluate(&record, Some("(W+T/2)/(W+L+T+OTL)"))
            .unwrap();
        assert_eq!(first.to_bits(), again.to_bits());
    }
}

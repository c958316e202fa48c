//! Points calculation
//!
//! Applies a league's points formula to team records, caching compiled
//! formulas so each distinct formula string is compiled once.

use standings_formula::{evaluate, FormulaCache, FormulaResult, VariableSet};

use crate::record::TeamRecord;

/// The variable vocabulary points formulas may reference
pub const STANDINGS_VARIABLES: [&str; 4] = ["W", "L", "T", "OTL"];

/// Hockey-style default: two points per win, one per tie or overtime loss.
///
/// Used whenever a league has no formula configured, so points columns can
/// still be displayed for leagues that sort by win percentage.
pub const DEFAULT_POINTS_FORMULA: &str = "2*W+OTL+T";

/// A league's points configuration: a formula cache over the standings
/// vocabulary. Owned by the league/season context and shared by reference.
#[derive(Debug)]
pub struct PointsSystem {
    cache: FormulaCache,
}

impl PointsSystem {
    pub fn new() -> Self {
        Self {
            cache: FormulaCache::new(VariableSet::new(STANDINGS_VARIABLES)),
        }
    }

    /// Points for `record` under `formula`, falling back to
    /// [`DEFAULT_POINTS_FORMULA`] when the formula is absent or empty.
    ///
    /// # Example
    /// ```rust
    /// use standings::{PointsSystem, TeamRecord};
    ///
    /// let points = PointsSystem::new();
    /// let record = TeamRecord::new(10, 5, 3, 2);
    /// assert_eq!(points.evaluate(&record, None).unwrap(), 25.0);
    /// assert_eq!(points.evaluate(&record, Some("W-L")).unwrap(), 5.0);
    /// ```
    pub fn evaluate(&self, record: &TeamRecord, formula: Option<&str>) -> FormulaResult<f64> {
        let formula = match formula {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_POINTS_FORMULA,
        };
        let program = self.cache.get_or_compile(formula)?;
        evaluate(&program, &record.bindings())
    }

    /// Compile-only check, for validating a user-entered formula before it
    /// is stored in league settings.
    pub fn validate(&self, formula: &str) -> FormulaResult<()> {
        self.cache.get_or_compile(formula).map(|_| ())
    }
}

impl Default for PointsSystem {
    fn default() -> Self {
        Self::new()
    }
}

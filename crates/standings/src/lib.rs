//! # standings
//!
//! League standings points calculation with user-configurable formulas.
//!
//! Leagues can define how standings points are computed from a team's
//! win/loss record as an arithmetic formula over `W`, `L`, `T`, and `OTL`
//! (wins, losses, ties, overtime losses). This crate pairs that vocabulary
//! with the [`standings_formula`] engine and a built-in default formula.
//!
//! ## Example
//!
//! ```rust
//! use standings::{PointsSystem, TeamRecord};
//!
//! let points = PointsSystem::new();
//! let record = TeamRecord::new(41, 30, 0, 11);
//!
//! // Default: 2 points per win, 1 per tie or overtime loss
//! assert_eq!(points.evaluate(&record, None).unwrap(), 93.0);
//!
//! // Leagues can configure their own formula
//! assert_eq!(points.evaluate(&record, Some("W-L")).unwrap(), 11.0);
//! ```

pub mod points;
pub mod record;

pub use points::{PointsSystem, DEFAULT_POINTS_FORMULA, STANDINGS_VARIABLES};
pub use record::TeamRecord;

// Re-export the engine surface for callers that compile formulas directly
pub use standings_formula::{
    compile_formula, evaluate, Bindings, CompiledFormula, FormulaCache, FormulaError,
    FormulaResult, VariableSet,
};

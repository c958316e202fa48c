//! Compiled-formula cache
//!
//! Memoizes compilation per verbatim formula string. The cache is an
//! explicitly owned object injected by the caller, so its lifetime follows
//! the league or season context that uses it rather than the whole process.

use std::sync::{Arc, Mutex};

use ahash::AHashMap;
use log::debug;

use crate::compiler::compile_formula;
use crate::error::FormulaResult;
use crate::program::{CompiledFormula, VariableSet};

/// Cache from formula source text to its compiled program.
///
/// Keys are the exact strings handed in, with no trimming or normalization:
/// two textually different spellings of the same formula are independent
/// entries. Entries live as long as the cache and are never evicted.
#[derive(Debug)]
pub struct FormulaCache {
    variables: VariableSet,
    // lock covers only the lookup-or-insert pair; compilation is pure, so a
    // racing recompile would be merely wasted work, never a correctness issue
    programs: Mutex<AHashMap<String, Arc<CompiledFormula>>>,
}

impl FormulaCache {
    /// A cache that compiles against the given variable vocabulary
    pub fn new(variables: VariableSet) -> Self {
        Self {
            variables,
            programs: Mutex::new(AHashMap::new()),
        }
    }

    /// The vocabulary this cache compiles against
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Return the compiled program for `formula`, compiling on first miss.
    ///
    /// Compilation failures are returned as-is and not cached; a bad formula
    /// is recompiled (and re-rejected) on every call.
    pub fn get_or_compile(&self, formula: &str) -> FormulaResult<Arc<CompiledFormula>> {
        let mut programs = self.programs.lock().expect("formula cache mutex poisoned");
        if let Some(program) = programs.get(formula) {
            return Ok(Arc::clone(program));
        }

        debug!("compiling formula {formula:?}");
        let program = Arc::new(compile_formula(formula, &self.variables)?);
        programs.insert(formula.to_string(), Arc::clone(&program));
        Ok(program)
    }

    /// Number of cached programs
    pub fn len(&self) -> usize {
        self.programs.lock().expect("formula cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

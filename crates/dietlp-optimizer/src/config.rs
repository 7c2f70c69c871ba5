use std::time::Duration;

use crate::error::{OptimizeError, Result};
use crate::targets::MacroNutrients;

/// Grams in one pound, the default reference package for prices
pub const POUND_GRAMS: f64 = 453.6;

pub const DEFAULT_MATERIALITY_GRAMS: f64 = 0.1;
pub const DEFAULT_MAX_QUANTITY_GRAMS: f64 = 1000.0;
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Policy shared by every solve of one optimizer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Label used in log output
    pub problem_name: String,
    /// Mass of the package a listed price refers to
    pub reference_mass_grams: f64,
    /// Solved quantities at or below this are reported as not selected
    pub materiality_threshold_grams: f64,
    /// Pivot tolerance handed to the simplex solver
    pub solver_tolerance: f64,
    pub max_iterations: usize,
    pub macro_nutrients: MacroNutrients,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            problem_name: "Nutritional Arbitrage".to_string(),
            reference_mass_grams: POUND_GRAMS,
            materiality_threshold_grams: DEFAULT_MATERIALITY_GRAMS,
            solver_tolerance: 1e-9,
            max_iterations: 10000,
            macro_nutrients: MacroNutrients::default(),
        }
    }
}

impl OptimizerConfig {
    pub fn with_problem_name(mut self, name: impl Into<String>) -> Self {
        self.problem_name = name.into();
        self
    }

    pub fn with_reference_mass(mut self, grams: f64) -> Self {
        self.reference_mass_grams = grams;
        self
    }

    pub fn with_materiality_threshold(mut self, grams: f64) -> Self {
        self.materiality_threshold_grams = grams;
        self
    }

    pub fn with_solver_tolerance(mut self, tol: f64) -> Self {
        self.solver_tolerance = tol;
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_macro_nutrients(mut self, names: MacroNutrients) -> Self {
        self.macro_nutrients = names;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.reference_mass_grams.is_finite() && self.reference_mass_grams > 0.0) {
            return Err(OptimizeError::InvalidConfig(format!(
                "reference mass must be positive, got {}",
                self.reference_mass_grams
            )));
        }
        if !(self.materiality_threshold_grams.is_finite() && self.materiality_threshold_grams >= 0.0) {
            return Err(OptimizeError::InvalidConfig(format!(
                "materiality threshold must be non-negative, got {}",
                self.materiality_threshold_grams
            )));
        }
        if !(self.solver_tolerance.is_finite() && self.solver_tolerance > 0.0) {
            return Err(OptimizeError::InvalidConfig(format!(
                "solver tolerance must be positive, got {}",
                self.solver_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(OptimizeError::InvalidConfig("max_iterations must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Per-call limits of a single solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Upper bound on every decision variable, in grams
    pub max_quantity_per_food: f64,
    /// Wall-clock budget; on expiry the solve reports no solution
    pub time_limit: Duration,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_quantity_per_food: DEFAULT_MAX_QUANTITY_GRAMS,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl SolveOptions {
    pub fn with_max_quantity_per_food(mut self, grams: f64) -> Self {
        self.max_quantity_per_food = grams;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }
}

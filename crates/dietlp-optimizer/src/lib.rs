//! Least-cost diet selection: choose grams of each food so that nutrient
//! totals land inside target ranges at minimum grocery cost.

mod config;
mod error;
mod food;
mod optimizer;
mod report;
mod result;
mod targets;

pub use config::{
    DEFAULT_MATERIALITY_GRAMS, DEFAULT_MAX_QUANTITY_GRAMS, DEFAULT_TIME_LIMIT, OptimizerConfig, POUND_GRAMS,
    SolveOptions,
};
pub use dietlp_solver::{ConstraintViolation, ShadowPrice, SolutionStatus};
pub use error::{OptimizeError, Result};
pub use food::{Food, FoodCatalog, NutrientAmount, PriceList};
pub use optimizer::{CompiledDiet, DietOptimizer};
pub use result::{OptimizationResult, Outcome, SelectedFood};
pub use targets::{MacroNutrients, MacroTargets, NutrientRange, NutrientStatus, NutritionTargets, macro_targets};

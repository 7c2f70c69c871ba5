use std::collections::BTreeMap;

use dietlp_solver::{ConstraintViolation, ShadowPrice, SolutionStatus};

use crate::food::Food;
use crate::targets::{NutrientStatus, NutritionTargets};

/// A food chosen by the optimizer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedFood {
    pub quantity_grams: f64,
    pub food: Food,
    /// Price prorated to the selected quantity; 0 for unpriced foods
    pub price: f64,
}

/// The minimum-cost selection for one solve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// Objective value at the optimum
    pub total_cost: f64,
    /// Foods with a quantity above the materiality threshold
    pub selected_foods: BTreeMap<String, SelectedFood>,
    /// Achieved total of every target nutrient over the selected foods
    pub total_nutrients: BTreeMap<String, f64>,
    /// The targets exactly as passed in
    pub targets: NutritionTargets,
    pub num_foods: usize,
    /// Nutrient constraints with a non-zero shadow price ("Min_Protein", ...)
    pub binding_constraints: Vec<String>,
    /// Change in total cost per unit increase of each constraint's bound
    pub shadow_prices: Vec<ShadowPrice>,
    /// Unselected foods: how far the price per reference package must drop
    /// before the food enters the diet
    pub reduced_costs: BTreeMap<String, f64>,
}

impl OptimizationResult {
    pub fn nutrient_status(&self, nutrient: &str, eps: f64) -> Option<NutrientStatus> {
        let range = self.targets.get(nutrient)?;
        let total = self.total_nutrients.get(nutrient).copied().unwrap_or(0.0);
        Some(range.status(total, eps))
    }

    /// True when every achieved total lies inside its target range (± `eps`)
    pub fn meets_targets(&self, eps: f64) -> bool {
        self.targets
            .keys()
            .all(|name| self.nutrient_status(name, eps) == Some(NutrientStatus::Within))
    }

    pub fn shadow_price(&self, constraint: &str) -> Option<f64> {
        self.shadow_prices
            .iter()
            .find(|sp| sp.constraint == constraint)
            .map(|sp| sp.value)
    }

    pub fn quantity(&self, food_key: &str) -> f64 {
        self.selected_foods
            .get(food_key)
            .map(|s| s.quantity_grams)
            .unwrap_or(0.0)
    }
}

/// What one solve produced, including the raw solver status when there is
/// no solution
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Optimal(OptimizationResult),
    NoSolution {
        status: SolutionStatus,
        /// Constraints a best-effort relaxation could not meet (worst first)
        violations: Vec<ConstraintViolation>,
    },
}

impl Outcome {
    pub fn status(&self) -> SolutionStatus {
        match self {
            Outcome::Optimal(_) => SolutionStatus::Optimal,
            Outcome::NoSolution { status, .. } => *status,
        }
    }

    pub fn into_result(self) -> Option<OptimizationResult> {
        match self {
            Outcome::Optimal(result) => Some(result),
            Outcome::NoSolution { .. } => None,
        }
    }
}

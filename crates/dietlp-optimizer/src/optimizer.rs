use std::collections::BTreeMap;

use dietlp_solver::{ConstraintOp, LpProblem, Solution, SolutionStatus, Solver};
use tracing::{debug, info, warn};

use crate::config::{OptimizerConfig, SolveOptions};
use crate::error::{OptimizeError, Result};
use crate::food::{FoodCatalog, PriceList};
use crate::result::{OptimizationResult, Outcome, SelectedFood};
use crate::targets::{MacroTargets, NutritionTargets, macro_targets};

/// A diet problem translated into LP form, ready for solving
#[derive(Debug, Clone)]
pub struct CompiledDiet {
    /// Food keys in variable order
    pub food_keys: Vec<String>,
    /// Objective coefficient of each variable (currency per gram)
    pub costs_per_gram: Vec<f64>,
    /// Foods that enter the LP at zero cost because they have no price
    pub unpriced: Vec<String>,
    pub lp_problem: LpProblem,
}

/// Minimum-cost food selection subject to nutrient ranges.
///
/// Holds configuration only. Each call builds a fresh LP and solver, so one
/// optimizer can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct DietOptimizer {
    config: OptimizerConfig,
}

impl DietOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        info!(problem = %config.problem_name, "diet optimizer initialized");
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Cheapest selection meeting `targets`, or `None` when the targets cannot
    /// be met (infeasible, or the solver ran out of time or iterations)
    pub fn optimize(
        &self,
        foods: &FoodCatalog,
        prices: &PriceList,
        targets: &NutritionTargets,
        options: SolveOptions,
    ) -> Result<Option<OptimizationResult>> {
        Ok(self.solve(foods, prices, targets, options)?.into_result())
    }

    /// Derive ±`tolerance` ranges around the four macro targets and optimize
    /// against them with default limits
    pub fn optimize_for_macros(
        &self,
        foods: &FoodCatalog,
        prices: &PriceList,
        macros: &MacroTargets,
        tolerance: f64,
    ) -> Result<Option<OptimizationResult>> {
        let targets = macro_targets(&self.config.macro_nutrients, macros, tolerance);
        self.optimize(foods, prices, &targets, SolveOptions::default())
    }

    /// Like [`DietOptimizer::optimize`] but keeps the solver status and
    /// infeasibility diagnostics when there is no solution
    pub fn solve(
        &self,
        foods: &FoodCatalog,
        prices: &PriceList,
        targets: &NutritionTargets,
        options: SolveOptions,
    ) -> Result<Outcome> {
        let compiled = self.compile(foods, prices, targets, options)?;

        info!(
            problem = %self.config.problem_name,
            foods = foods.len(),
            targets = targets.len(),
            "starting optimization"
        );

        let solver = Solver::new()
            .with_tolerance(self.config.solver_tolerance)
            .with_max_iterations(self.config.max_iterations)
            .with_time_limit(options.time_limit);
        let solution = solver.solve(&compiled.lp_problem);

        info!(status = %solution.status, iterations = solution.iterations, "optimization status");

        match solution.status {
            SolutionStatus::Optimal => {
                let result = self.extract_result(&compiled, &solution, foods, prices, targets);
                info!(
                    cost = result.total_cost,
                    foods = result.num_foods,
                    "optimization complete"
                );
                Ok(Outcome::Optimal(result))
            }
            SolutionStatus::Error => Err(OptimizeError::SolverFault(
                "solver rejected the LP formulation".to_string(),
            )),
            status => {
                warn!(%status, violations = solution.violations.len(), "no optimal solution found");
                for violation in solution.violations.iter().take(5) {
                    debug!(constraint = %violation.constraint, "{}", violation.description);
                }
                Ok(Outcome::NoSolution {
                    status,
                    violations: solution.violations,
                })
            }
        }
    }

    /// Validate the inputs and build the LP without solving it
    pub fn compile(
        &self,
        foods: &FoodCatalog,
        prices: &PriceList,
        targets: &NutritionTargets,
        options: SolveOptions,
    ) -> Result<CompiledDiet> {
        self.validate(foods, prices, targets, options)?;

        // Sorted keys keep variable order, and so tie-breaking, stable
        let mut food_keys: Vec<String> = foods.keys().cloned().collect();
        food_keys.sort();

        let mut lp = LpProblem::new(food_keys.clone());

        let mut unpriced = Vec::new();
        let costs_per_gram: Vec<f64> = food_keys
            .iter()
            .map(|key| match prices.get(key) {
                Some(price) => price / self.config.reference_mass_grams,
                None => {
                    unpriced.push(key.clone());
                    0.0
                }
            })
            .collect();
        if !unpriced.is_empty() {
            warn!(count = unpriced.len(), foods = ?unpriced, "foods without a price enter at zero cost");
        }

        lp.set_objective(costs_per_gram.clone(), true);

        for (nutrient, range) in targets {
            // Nutrient amounts are per 100 g, variables are grams
            let coefficients: Vec<f64> = food_keys
                .iter()
                .map(|key| foods[key].nutrient_or_zero(nutrient) / 100.0)
                .collect();

            if let Some(min) = range.min {
                lp.add_constraint(format!("Min_{}", nutrient), coefficients.clone(), ConstraintOp::Ge, min);
            }
            if let Some(max) = range.max {
                lp.add_constraint(format!("Max_{}", nutrient), coefficients, ConstraintOp::Le, max);
            }
        }

        for j in 0..food_keys.len() {
            lp.set_upper_bound(j, options.max_quantity_per_food);
        }

        debug!(
            variables = lp.num_variables(),
            constraints = lp.num_constraints(),
            "built diet LP"
        );

        Ok(CompiledDiet {
            food_keys,
            costs_per_gram,
            unpriced,
            lp_problem: lp,
        })
    }

    /// Fail fast on inputs that make the formulation meaningless
    pub fn validate(
        &self,
        foods: &FoodCatalog,
        prices: &PriceList,
        targets: &NutritionTargets,
        options: SolveOptions,
    ) -> Result<()> {
        self.config.validate()?;

        if foods.is_empty() {
            return Err(OptimizeError::EmptyCatalog);
        }

        let cap = options.max_quantity_per_food;
        if !(cap.is_finite() && cap > 0.0) {
            return Err(OptimizeError::InvalidQuantityCap(cap));
        }

        for (nutrient, range) in targets {
            let bounds = [range.min, range.max];
            if bounds.iter().flatten().any(|b| !b.is_finite()) {
                return Err(OptimizeError::NonFiniteTarget(nutrient.clone()));
            }
            if let (Some(min), Some(max)) = (range.min, range.max) {
                if min > max {
                    return Err(OptimizeError::InvertedRange {
                        nutrient: nutrient.clone(),
                        min,
                        max,
                    });
                }
            }
        }

        for (food, &price) in prices {
            if !price.is_finite() {
                return Err(OptimizeError::NonFinitePrice(food.clone()));
            }
            if price < 0.0 {
                return Err(OptimizeError::NegativePrice {
                    food: food.clone(),
                    price,
                });
            }
        }

        // Only targeted nutrients enter the LP
        for (key, food) in foods {
            for nutrient in targets.keys() {
                if let Some(amount) = food.nutrient(nutrient) {
                    if !(amount.is_finite() && amount >= 0.0) {
                        return Err(OptimizeError::InvalidNutrient {
                            food: key.clone(),
                            nutrient: nutrient.clone(),
                            amount,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn extract_result(
        &self,
        compiled: &CompiledDiet,
        solution: &Solution,
        foods: &FoodCatalog,
        prices: &PriceList,
        targets: &NutritionTargets,
    ) -> OptimizationResult {
        let reference_mass = self.config.reference_mass_grams;
        let threshold = self.config.materiality_threshold_grams;

        let mut selected_foods = BTreeMap::new();
        let mut total_nutrients: BTreeMap<String, f64> =
            targets.keys().map(|name| (name.clone(), 0.0)).collect();

        for (key, &quantity) in compiled.food_keys.iter().zip(&solution.values) {
            if quantity <= threshold {
                continue;
            }
            let food = &foods[key];
            let price = prices
                .get(key)
                .map(|p| p * quantity / reference_mass)
                .unwrap_or(0.0);

            for (nutrient, total) in total_nutrients.iter_mut() {
                *total += food.nutrient_or_zero(nutrient) * quantity / 100.0;
            }

            selected_foods.insert(
                key.clone(),
                SelectedFood {
                    quantity_grams: quantity,
                    food: food.clone(),
                    price,
                },
            );
        }

        // Solver reduced costs are per gram
        let reduced_costs = solution
            .analysis
            .reduced_costs
            .iter()
            .filter(|rc| !rc.is_basic && rc.reduced_cost > 0.0)
            .map(|rc| (rc.variable.clone(), rc.reduced_cost * reference_mass))
            .collect();

        OptimizationResult {
            total_cost: solution.objective_value,
            num_foods: selected_foods.len(),
            selected_foods,
            total_nutrients,
            targets: targets.clone(),
            binding_constraints: solution.analysis.binding_constraints.clone(),
            shadow_prices: solution.analysis.shadow_prices.clone(),
            reduced_costs,
        }
    }
}

use std::fmt;

use crate::config::POUND_GRAMS;
use crate::result::OptimizationResult;
use crate::targets::{NutrientRange, NutrientStatus};

/// Slack allowed before a total is flagged as outside its range
const REPORT_EPSILON: f64 = 1e-6;

impl fmt::Display for OptimizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        let thin = "-".repeat(70);

        writeln!(f, "{}", rule)?;
        writeln!(f, "OPTIMIZATION RESULTS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        writeln!(f, "Total Cost: ${:.2}", self.total_cost)?;
        writeln!(f, "Foods Selected: {}", self.num_foods)?;
        writeln!(f)?;
        writeln!(f, "Shopping List:")?;
        writeln!(f, "{}", thin)?;

        for (key, selected) in &self.selected_foods {
            writeln!(f)?;
            writeln!(f, "{} [{}]", selected.food.description, key)?;
            writeln!(
                f,
                "   Quantity: {:.0}g ({:.2} lbs)",
                selected.quantity_grams,
                selected.quantity_grams / POUND_GRAMS
            )?;
            writeln!(f, "   Cost: ${:.2}", selected.price)?;
        }

        writeln!(f)?;
        writeln!(f, "Nutritional Profile:")?;
        writeln!(f, "{}", thin)?;

        for (nutrient, range) in &self.targets {
            let total = self.total_nutrients.get(nutrient).copied().unwrap_or(0.0);
            let marker = match range.status(total, REPORT_EPSILON) {
                NutrientStatus::Within => "✓",
                NutrientStatus::BelowMin => "✗",
                NutrientStatus::AboveMax => "!",
            };
            writeln!(f, "{} {:30} {:>8.1} {}", marker, nutrient, total, describe_range(range))?;
        }

        Ok(())
    }
}

fn describe_range(range: &NutrientRange) -> String {
    match (range.min, range.max) {
        (Some(min), Some(max)) => format!("(target: {:.0}-{:.0})", min, max),
        (Some(min), None) => format!("(min: {:.0})", min),
        (None, Some(max)) => format!("(max: {:.0})", max),
        (None, None) => String::new(),
    }
}

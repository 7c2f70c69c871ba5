use std::path::Path;

use dietlp_optimizer::{FoodCatalog, NutritionTargets, OptimizerConfig, PriceList};
use serde::Deserialize;

/// On-disk problem description
#[derive(Debug, Deserialize)]
pub struct ProblemFile {
    pub foods: FoodCatalog,
    #[serde(default)]
    pub prices: PriceList,
    #[serde(default)]
    pub targets: NutritionTargets,
}

impl ProblemFile {
    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let source = std::fs::read_to_string(path).map_err(|e| format!("Error reading {}: {}", path.display(), e))?;
        Self::parse(&source).map_err(|e| format!("Error parsing {}: {}", path.display(), e))
    }

    /// Catalog foods that have no price entry, sorted
    pub fn unpriced_foods(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .foods
            .keys()
            .filter(|k| !self.prices.contains_key(*k))
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Price entries that match no food, sorted
    pub fn orphan_prices(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .prices
            .keys()
            .filter(|k| !self.foods.contains_key(*k))
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }
}

pub fn load_config(path: Option<&Path>) -> Result<OptimizerConfig, String> {
    let Some(path) = path else {
        return Ok(OptimizerConfig::default());
    };
    let source = std::fs::read_to_string(path).map_err(|e| format!("Error reading {}: {}", path.display(), e))?;
    serde_json::from_str(&source).map_err(|e| format!("Error parsing {}: {}", path.display(), e))
}

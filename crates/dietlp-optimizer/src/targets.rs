use std::collections::BTreeMap;

/// Nutrient name -> allowed range of the daily total
pub type NutritionTargets = BTreeMap<String, NutrientRange>;

/// Closed interval on a nutrient total; a missing side is unconstrained
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutrientRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Where an achieved total falls relative to its range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NutrientStatus {
    Within,
    BelowMin,
    AboveMax,
}

impl NutrientRange {
    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    pub fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// Classify `value`, allowing `eps` of slack on either side
    pub fn status(&self, value: f64, eps: f64) -> NutrientStatus {
        match (self.min, self.max) {
            (Some(min), _) if value < min - eps => NutrientStatus::BelowMin,
            (_, Some(max)) if value > max + eps => NutrientStatus::AboveMax,
            _ => NutrientStatus::Within,
        }
    }

    pub fn contains(&self, value: f64, eps: f64) -> bool {
        self.status(value, eps) == NutrientStatus::Within
    }
}

/// Catalog keys of the four macro nutrients.
///
/// Constraint matching is an exact key lookup, so these must match the
/// nutrient names the food catalog actually uses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MacroNutrients {
    pub energy: String,
    pub protein: String,
    pub carbohydrate: String,
    pub fat: String,
}

impl Default for MacroNutrients {
    /// FoodData Central nutrient names
    fn default() -> Self {
        Self {
            energy: "Energy".to_string(),
            protein: "Protein".to_string(),
            carbohydrate: "Carbohydrate, by difference".to_string(),
            fat: "Total lipid (fat)".to_string(),
        }
    }
}

/// Daily point targets for the macro nutrients
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroTargets {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein_g: 150.0,
            carbs_g: 200.0,
            fat_g: 65.0,
        }
    }
}

/// Widen each macro point target into `[t * (1 - tolerance), t * (1 + tolerance)]`.
///
/// No clamping: a tolerance of 0 yields point ranges and a tolerance of 1 or
/// more pushes the minimum to zero or below.
pub fn macro_targets(names: &MacroNutrients, macros: &MacroTargets, tolerance: f64) -> NutritionTargets {
    let widen = |target: f64| NutrientRange::between(target * (1.0 - tolerance), target * (1.0 + tolerance));

    BTreeMap::from([
        (names.energy.clone(), widen(macros.calories)),
        (names.protein.clone(), widen(macros.protein_g)),
        (names.carbohydrate.clone(), widen(macros.carbs_g)),
        (names.fat.clone(), widen(macros.fat_g)),
    ])
}

use std::collections::{BTreeMap, HashMap};

/// Foods keyed by a stable food key
pub type FoodCatalog = HashMap<String, Food>;

/// Price of one reference package, keyed by food key
pub type PriceList = HashMap<String, f64>;

/// Amount of one nutrient per 100 g of food
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutrientAmount {
    pub amount: f64,
    pub unit: String,
}

/// A food record with its per-100 g nutrient profile
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Food {
    pub description: String,
    pub category: Option<String>,
    /// FoodData Central identifier, when the record came from there
    pub fdc_id: Option<u64>,
    /// Nutrient name -> amount per 100 g. Names are matched exactly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nutrients: BTreeMap<String, NutrientAmount>,
}

impl Food {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category: None,
            fdc_id: None,
            nutrients: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_fdc_id(mut self, fdc_id: u64) -> Self {
        self.fdc_id = Some(fdc_id);
        self
    }

    pub fn with_nutrient(mut self, name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        self.nutrients.insert(
            name.into(),
            NutrientAmount {
                amount,
                unit: unit.into(),
            },
        );
        self
    }

    /// Amount per 100 g of `name`, if the profile lists it
    pub fn nutrient(&self, name: &str) -> Option<f64> {
        self.nutrients.get(name).map(|n| n.amount)
    }

    /// Amount per 100 g of `name`; missing nutrients contribute nothing
    pub fn nutrient_or_zero(&self, name: &str) -> f64 {
        self.nutrient(name).unwrap_or(0.0)
    }

    pub fn nutrient_unit(&self, name: &str) -> Option<&str> {
        self.nutrients.get(name).map(|n| n.unit.as_str())
    }
}

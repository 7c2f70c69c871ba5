use thiserror::Error;

/// Caller misuse detected before a solve, or a fault inside the solver.
///
/// An unsatisfiable but well-formed problem is not an error; it is reported
/// as an empty result instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizeError {
    #[error("Food catalog is empty")]
    EmptyCatalog,
    #[error("Target for {nutrient} has min {min} above max {max}")]
    InvertedRange { nutrient: String, min: f64, max: f64 },
    #[error("Target for {0} is not a finite number")]
    NonFiniteTarget(String),
    #[error("Price for {food} is negative: {price}")]
    NegativePrice { food: String, price: f64 },
    #[error("Price for {0} is not a finite number")]
    NonFinitePrice(String),
    #[error("Food {food} has invalid amount {amount} for nutrient {nutrient}")]
    InvalidNutrient {
        food: String,
        nutrient: String,
        amount: f64,
    },
    #[error("Maximum quantity per food must be positive, got {0}")]
    InvalidQuantityCap(f64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Solver fault: {0}")]
    SolverFault(String),
}

pub type Result<T> = std::result::Result<T, OptimizeError>;

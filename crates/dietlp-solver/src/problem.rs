use thiserror::Error;

/// Represents a linear programming problem over non-negative variables
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpProblem {
    /// Variable names
    pub variables: Vec<String>,
    /// Objective function coefficients (costs)
    pub objective: Objective,
    /// Constraints
    pub constraints: Vec<Constraint>,
    /// Optional upper bound per variable (lower bound is always zero)
    pub upper_bounds: Vec<Option<f64>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    /// Coefficients for each variable
    pub coefficients: Vec<f64>,
    /// Whether to minimize or maximize
    pub minimize: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Name/label for the constraint (for diagnostics)
    pub name: String,
    /// Coefficients for each variable
    pub coefficients: Vec<f64>,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl ConstraintOp {
    /// The operator obtained by multiplying both sides by -1
    pub fn flipped(self) -> Self {
        match self {
            ConstraintOp::Le => ConstraintOp::Ge,
            ConstraintOp::Ge => ConstraintOp::Le,
            ConstraintOp::Eq => ConstraintOp::Eq,
        }
    }
}

/// Structural problems detected before a solve is attempted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("Objective has {found} coefficients but the problem has {expected} variables")]
    ObjectiveLength { expected: usize, found: usize },
    #[error("Constraint {name} has {found} coefficients but the problem has {expected} variables")]
    ConstraintLength {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Non-finite value in {0}")]
    NonFinite(String),
    #[error("Upper bound of {variable} is negative: {bound}")]
    NegativeUpperBound { variable: String, bound: f64 },
}

impl LpProblem {
    pub fn new(variables: Vec<String>) -> Self {
        let n = variables.len();
        Self {
            variables,
            objective: Objective {
                coefficients: vec![0.0; n],
                minimize: true,
            },
            constraints: Vec::new(),
            upper_bounds: vec![None; n],
        }
    }

    pub fn set_objective(&mut self, coefficients: Vec<f64>, minimize: bool) {
        self.objective = Objective { coefficients, minimize };
    }

    pub fn add_constraint(&mut self, name: impl Into<String>, coefficients: Vec<f64>, op: ConstraintOp, rhs: f64) {
        self.constraints.push(Constraint {
            name: name.into(),
            coefficients,
            op,
            rhs,
        });
    }

    /// Cap variable `index` at `bound`. Out-of-range indices are ignored.
    pub fn set_upper_bound(&mut self, index: usize, bound: f64) {
        if let Some(slot) = self.upper_bounds.get_mut(index) {
            *slot = Some(bound);
        }
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluate the left-hand side of a constraint at `values`
    pub fn lhs(constraint: &Constraint, values: &[f64]) -> f64 {
        constraint
            .coefficients
            .iter()
            .zip(values)
            .map(|(coef, value)| coef * value)
            .sum()
    }

    /// Check dimensions and finiteness of every coefficient
    pub fn validate(&self) -> Result<(), ProblemError> {
        let n = self.num_variables();
        if self.objective.coefficients.len() != n {
            return Err(ProblemError::ObjectiveLength {
                expected: n,
                found: self.objective.coefficients.len(),
            });
        }
        if self.objective.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ProblemError::NonFinite("objective".to_string()));
        }
        for c in &self.constraints {
            if c.coefficients.len() != n {
                return Err(ProblemError::ConstraintLength {
                    name: c.name.clone(),
                    expected: n,
                    found: c.coefficients.len(),
                });
            }
            if !c.rhs.is_finite() || c.coefficients.iter().any(|x| !x.is_finite()) {
                return Err(ProblemError::NonFinite(c.name.clone()));
            }
        }
        for (name, bound) in self.variables.iter().zip(&self.upper_bounds) {
            match bound {
                Some(b) if !b.is_finite() => {
                    return Err(ProblemError::NonFinite(format!("upper bound of {}", name)));
                }
                Some(b) if *b < 0.0 => {
                    return Err(ProblemError::NegativeUpperBound {
                        variable: name.clone(),
                        bound: *b,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        let mut problem = LpProblem::new(vec!["x".to_string(), "y".to_string()]);
        problem.set_objective(vec![1.0, 1.0], true);
        assert!(problem.validate().is_ok());

        problem.add_constraint("short", vec![1.0], ConstraintOp::Le, 1.0);
        assert!(matches!(
            problem.validate(),
            Err(ProblemError::ConstraintLength { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_validate_bounds() {
        let mut problem = LpProblem::new(vec!["x".to_string()]);
        problem.set_objective(vec![1.0], true);
        problem.set_upper_bound(0, -1.0);
        assert!(matches!(problem.validate(), Err(ProblemError::NegativeUpperBound { .. })));

        problem.set_upper_bound(0, f64::NAN);
        assert!(matches!(problem.validate(), Err(ProblemError::NonFinite(_))));

        // ignored
        problem.set_upper_bound(5, 1.0);
        assert_eq!(problem.upper_bounds.len(), 1);
    }

    #[test]
    fn test_lhs() {
        let c = Constraint {
            name: "c".to_string(),
            coefficients: vec![2.0, 3.0],
            op: ConstraintOp::Ge,
            rhs: 1.0,
        };
        assert!((LpProblem::lhs(&c, &[1.0, 2.0]) - 8.0).abs() < 1e-12);
        assert_eq!(ConstraintOp::Ge.flipped(), ConstraintOp::Le);
        assert_eq!(ConstraintOp::Eq.flipped(), ConstraintOp::Eq);
    }
}

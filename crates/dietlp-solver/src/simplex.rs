use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::problem::{ConstraintOp, LpProblem};
use crate::solution::{Analysis, ConstraintViolation, ReducedCost, ShadowPrice, Solution, SolutionStatus};

/// Consecutive degenerate pivots tolerated before switching to Bland's rule
const DEGENERATE_RUN_LIMIT: usize = 50;

/// Simplex solver for linear programming problems
///
/// The solver itself is immutable configuration; every call to [`Solver::solve`]
/// builds its own tableau, so a single instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Maximum iterations before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    tolerance: f64,
    /// Wall-clock budget for a single solve
    time_limit: Option<Duration>,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
            time_limit: None,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Solve the LP problem using the two-phase simplex method
    pub fn solve(&self, problem: &LpProblem) -> Solution {
        if let Err(err) = problem.validate() {
            warn!(error = %err, "rejecting malformed LP problem");
            return Solution::error();
        }

        let mut budget = Budget::new(self.time_limit);
        let rows = Row::expand(problem);

        let mut solution = match self.solve_rows(problem, &rows, &mut budget) {
            solution if solution.status == SolutionStatus::Infeasible => {
                self.solve_with_relaxation(problem, &rows, &mut budget)
            }
            solution => solution,
        };
        solution.iterations = budget.iterations;

        debug!(
            status = %solution.status,
            iterations = budget.iterations,
            elapsed_ms = budget.started.elapsed().as_millis() as u64,
            "simplex finished"
        );
        solution
    }

    /// When the full problem is infeasible, try to find a "best effort" solution
    /// by relaxing constraints and reporting which ones are violated
    fn solve_with_relaxation(&self, problem: &LpProblem, rows: &[Row], budget: &mut Budget) -> Solution {
        // Drop the >= rows (minimum requirements). Upper limits, bounds and
        // equalities define the structure and are kept.
        let relaxed: Vec<Row> = rows
            .iter()
            .filter(|r| r.op != ConstraintOp::Ge)
            .cloned()
            .collect();

        let relaxed_solution = self.solve_rows(problem, &relaxed, budget);

        match relaxed_solution.status {
            SolutionStatus::Optimal => {}
            // Infeasibility is already proven; the diagnostics just ran out of budget
            SolutionStatus::TimeLimit | SolutionStatus::IterationLimit => return Solution::infeasible(),
            _ => return self.analyze_conflicts(rows),
        }

        let violations = self.find_violations(rows, &relaxed_solution.values);

        if violations.is_empty() {
            // No violations means the full problem was feasible after all
            return relaxed_solution;
        }

        Solution::infeasible_with_relaxed(
            relaxed_solution.values,
            relaxed_solution.objective_value,
            violations,
        )
    }

    /// Run both phases over an explicit row set, without infeasibility recovery
    fn solve_rows(&self, problem: &LpProblem, rows: &[Row], budget: &mut Budget) -> Solution {
        // Variable caps live in the ratio test, not in the tableau
        let rows: Vec<&Row> = rows.iter().filter(|r| !r.is_bound).collect();
        let mut tableau = self.build_tableau(problem, &rows);

        debug!(
            variables = tableau.n_vars,
            rows = rows.len(),
            columns = tableau.width(),
            "built simplex tableau"
        );

        if tableau.n_artificial > 0 {
            match self.phase1(&mut tableau, budget) {
                Phase1Result::Feasible => {}
                Phase1Result::Infeasible => return Solution::infeasible(),
                Phase1Result::Stopped(Step::TimeLimit) => return Solution::time_limit(),
                Phase1Result::Stopped(_) => return Solution::iteration_limit(),
            }
        }

        match self.phase2(&mut tableau, budget) {
            Step::Optimal => {}
            Step::Unbounded => return Solution::unbounded(),
            Step::TimeLimit => return Solution::time_limit(),
            Step::IterationLimit => return Solution::iteration_limit(),
        }

        self.extract_solution(&tableau, problem, &rows)
    }

    /// Find which constraints are violated by a given solution
    fn find_violations(&self, rows: &[Row], values: &[f64]) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();

        for row in rows {
            let lhs = row.lhs(values);
            let slack_tol = self.tolerance * (1.0 + row.rhs.abs());

            let (is_violated, violation_amount, description) = match row.op {
                ConstraintOp::Le => {
                    if lhs > row.rhs + slack_tol {
                        let amt = lhs - row.rhs;
                        (true, amt, format!("{} exceeds maximum of {:.2} by {:.2}", row.name, row.rhs, amt))
                    } else {
                        (false, 0.0, String::new())
                    }
                }
                ConstraintOp::Ge => {
                    if lhs < row.rhs - slack_tol {
                        let amt = row.rhs - lhs;
                        (true, amt, format!("{} is below minimum of {:.2} by {:.2}", row.name, row.rhs, amt))
                    } else {
                        (false, 0.0, String::new())
                    }
                }
                ConstraintOp::Eq => {
                    let diff = (lhs - row.rhs).abs();
                    if diff > slack_tol {
                        (true, diff, format!("{} requires exactly {:.2} but got {:.2}", row.name, row.rhs, lhs))
                    } else {
                        (false, 0.0, String::new())
                    }
                }
            };

            if is_violated {
                violations.push(ConstraintViolation {
                    constraint: row.name.clone(),
                    required: row.rhs,
                    actual: lhs,
                    violation_amount,
                    description,
                });
            }
        }

        // Worst first
        violations.sort_by(|a, b| b.violation_amount.total_cmp(&a.violation_amount));

        violations
    }

    /// Analyze direct constraint conflicts when even relaxed solve fails
    fn analyze_conflicts(&self, rows: &[Row]) -> Solution {
        let mut violations = Vec::new();

        // Rows over the same coefficient sign pattern are treated as bounds on
        // one expression; a lower bound above an upper bound is a direct conflict.
        let mut groups: HashMap<Vec<i8>, Vec<&Row>> = HashMap::new();
        for row in rows {
            let key: Vec<i8> = row
                .coefficients
                .iter()
                .map(|&x| {
                    if x.abs() < self.tolerance {
                        0
                    } else if x > 0.0 {
                        1
                    } else {
                        -1
                    }
                })
                .collect();
            groups.entry(key).or_default().push(row);
        }

        for group in groups.values() {
            let mut min_bound: Option<(f64, &str)> = None;
            let mut max_bound: Option<(f64, &str)> = None;

            for row in group {
                match row.op {
                    ConstraintOp::Ge => {
                        if min_bound.is_none_or(|(v, _)| row.rhs > v) {
                            min_bound = Some((row.rhs, &row.name));
                        }
                    }
                    ConstraintOp::Le => {
                        if max_bound.is_none_or(|(v, _)| row.rhs < v) {
                            max_bound = Some((row.rhs, &row.name));
                        }
                    }
                    ConstraintOp::Eq => {
                        min_bound = Some((row.rhs, &row.name));
                        max_bound = Some((row.rhs, &row.name));
                    }
                }
            }

            if let (Some((min_val, min_name)), Some((max_val, max_name))) = (min_bound, max_bound) {
                if min_val > max_val + self.tolerance {
                    violations.push(ConstraintViolation {
                        constraint: format!("{} vs {}", min_name, max_name),
                        required: min_val,
                        actual: max_val,
                        violation_amount: min_val - max_val,
                        description: format!(
                            "Conflict: {} requires >= {:.2} but {} requires <= {:.2}",
                            min_name, min_val, max_name, max_val
                        ),
                    });
                }
            }
        }

        violations.sort_by(|a, b| b.violation_amount.total_cmp(&a.violation_amount));
        Solution::infeasible_with_violations(violations)
    }

    fn build_tableau(&self, problem: &LpProblem, rows: &[&Row]) -> Tableau {
        let n_vars = problem.num_variables();
        let n_rows = rows.len();

        // Rows with a negative RHS are negated so every RHS starts non-negative,
        // which flips the sense of the inequality
        let oriented: Vec<(f64, ConstraintOp)> = rows
            .iter()
            .map(|r| if r.rhs < 0.0 { (-1.0, r.op.flipped()) } else { (1.0, r.op) })
            .collect();

        let mut n_slack = 0;
        let mut n_artificial = 0;
        for (_, op) in &oriented {
            match op {
                ConstraintOp::Le => n_slack += 1,
                ConstraintOp::Ge => {
                    n_slack += 1; // surplus
                    n_artificial += 1;
                }
                ConstraintOp::Eq => n_artificial += 1,
            }
        }

        let total_cols = n_vars + n_slack + n_artificial + 1; // +1 for RHS

        let mut upper = problem.upper_bounds.clone();
        upper.resize(total_cols - 1, None);

        let mut tableau = Tableau {
            data: vec![vec![0.0; total_cols]; n_rows + 1],
            basic_vars: vec![0; n_rows],
            dual_cols: vec![0; n_rows],
            row_signs: vec![1.0; n_rows],
            upper,
            at_upper: vec![false; total_cols - 1],
            n_vars,
            n_slack,
            n_artificial,
        };

        let mut slack_idx = n_vars;
        let mut artificial_idx = n_vars + n_slack;
        let rhs_col = total_cols - 1;

        for (i, (row, &(sign, op))) in rows.iter().zip(&oriented).enumerate() {
            for (j, &coef) in row.coefficients.iter().enumerate() {
                tableau.data[i][j] = sign * coef;
            }
            tableau.data[i][rhs_col] = sign * row.rhs;
            tableau.row_signs[i] = sign;

            // The column whose objective entry yields this row's dual value
            // is always a +1 unit column: the slack for <=, the artificial otherwise
            match op {
                ConstraintOp::Le => {
                    tableau.data[i][slack_idx] = 1.0;
                    tableau.basic_vars[i] = slack_idx;
                    tableau.dual_cols[i] = slack_idx;
                    slack_idx += 1;
                }
                ConstraintOp::Ge => {
                    tableau.data[i][slack_idx] = -1.0; // surplus
                    slack_idx += 1;
                    tableau.data[i][artificial_idx] = 1.0;
                    tableau.basic_vars[i] = artificial_idx;
                    tableau.dual_cols[i] = artificial_idx;
                    artificial_idx += 1;
                }
                ConstraintOp::Eq => {
                    tableau.data[i][artificial_idx] = 1.0;
                    tableau.basic_vars[i] = artificial_idx;
                    tableau.dual_cols[i] = artificial_idx;
                    artificial_idx += 1;
                }
            }
        }

        // Objective row (last row). The tableau always maximizes; a positive
        // entry marks a column whose entry would improve the objective.
        for (j, &coef) in problem.objective.coefficients.iter().enumerate() {
            tableau.data[n_rows][j] = if problem.objective.minimize { -coef } else { coef };
        }

        tableau
    }

    fn phase1(&self, tableau: &mut Tableau, budget: &mut Budget) -> Phase1Result {
        let n_rows = tableau.n_rows();
        let n_cols = tableau.width();
        let rhs_col = n_cols - 1;
        let art_start = tableau.art_start();

        let orig_obj = tableau.data[n_rows].clone();

        // Maximize -sum(artificials)
        tableau.data[n_rows].iter_mut().for_each(|x| *x = 0.0);
        for j in art_start..(art_start + tableau.n_artificial) {
            tableau.data[n_rows][j] = -1.0;
        }
        // Price out the basic artificials
        for i in 0..n_rows {
            if tableau.basic_vars[i] >= art_start {
                for j in 0..n_cols {
                    tableau.data[n_rows][j] += tableau.data[i][j];
                }
            }
        }

        match self.iterate(tableau, rhs_col, budget) {
            Step::Optimal => {}
            // Phase 1 is bounded below by zero, so this only happens numerically
            Step::Unbounded => return Phase1Result::Infeasible,
            step => return Phase1Result::Stopped(step),
        }

        let scale = 1.0 + (0..n_rows).map(|i| tableau.data[i][rhs_col].abs()).fold(0.0, f64::max);
        let infeasible = (0..n_rows)
            .any(|i| tableau.basic_vars[i] >= art_start && tableau.data[i][rhs_col].abs() > self.tolerance * scale);
        if infeasible {
            debug!("phase 1 ended with positive artificials");
            return Phase1Result::Infeasible;
        }

        // Artificials still basic sit at zero; swap them for any structural or
        // slack column with a usable entry so phase 2 cannot move them
        for i in 0..n_rows {
            if tableau.basic_vars[i] < art_start {
                continue;
            }
            let replacement = (0..art_start).find(|&j| tableau.data[i][j].abs() > self.tolerance);
            if let Some(j) = replacement {
                self.pivot(tableau, i, j);
            }
            // Otherwise the row is redundant: it has no entries outside the
            // artificial block and never takes part in a ratio test
        }

        // Restore the real objective under the cap substitutions made in
        // phase 1, then price out the basic variables
        tableau.data[n_rows] = orig_obj;
        tableau.apply_flips(n_rows);
        for i in 0..n_rows {
            let basic = tableau.basic_vars[i];
            let ratio = tableau.data[n_rows][basic];
            if ratio != 0.0 {
                for j in 0..n_cols {
                    tableau.data[n_rows][j] -= ratio * tableau.data[i][j];
                }
            }
        }

        Phase1Result::Feasible
    }

    fn phase2(&self, tableau: &mut Tableau, budget: &mut Budget) -> Step {
        // Artificial columns never re-enter
        let limit = tableau.art_start();
        self.iterate(tableau, limit, budget)
    }

    /// Pivot until no column below `limit` can improve the objective
    fn iterate(&self, tableau: &mut Tableau, limit: usize, budget: &mut Budget) -> Step {
        let mut degenerate_run = 0;

        loop {
            let bland = degenerate_run >= DEGENERATE_RUN_LIMIT;
            let Some(pivot_col) = self.find_pivot_column(tableau, limit, bland) else {
                return Step::Optimal;
            };
            if budget.expired() {
                return Step::TimeLimit;
            }
            if budget.iterations >= self.max_iterations {
                return Step::IterationLimit;
            }
            let step = match self.ratio_test(tableau, pivot_col, bland) {
                Ratio::Unbounded => return Step::Unbounded,
                Ratio::BoundFlip(step) => {
                    tableau.flip_column(pivot_col);
                    step
                }
                Ratio::Pivot { row, step, to_upper } => {
                    if to_upper {
                        tableau.flip_basic(row);
                    }
                    self.pivot(tableau, row, pivot_col);
                    step
                }
            };

            if step <= self.tolerance {
                degenerate_run += 1;
            } else {
                degenerate_run = 0;
            }
            budget.iterations += 1;
        }
    }

    fn find_pivot_column(&self, tableau: &Tableau, limit: usize, bland: bool) -> Option<usize> {
        let obj_row = &tableau.data[tableau.n_rows()];

        if bland {
            // Lowest index with an improving entry
            return (0..limit).find(|&j| obj_row[j] > self.tolerance);
        }

        // Most positive reduced cost (Dantzig)
        let mut max_val = self.tolerance;
        let mut max_col = None;
        for (j, &val) in obj_row.iter().enumerate().take(limit) {
            if val > max_val {
                max_val = val;
                max_col = Some(j);
            }
        }
        max_col
    }

    /// Bounded ratio test. The entering column stops at the first basic
    /// variable to reach zero or its cap, or at its own cap.
    fn ratio_test(&self, tableau: &Tableau, col: usize, bland: bool) -> Ratio {
        let rhs_col = tableau.width() - 1;
        let mut best: Option<(usize, f64, bool)> = None;

        for i in 0..tableau.n_rows() {
            let entry = tableau.data[i][col];
            let value = tableau.data[i][rhs_col].max(0.0);
            let basic = tableau.basic_vars[i];
            let (ratio, to_upper) = if entry > self.tolerance {
                (value / entry, false)
            } else if entry < -self.tolerance {
                match tableau.upper[basic] {
                    Some(ub) => ((ub - value).max(0.0) / -entry, true),
                    None => continue,
                }
            } else {
                continue;
            };

            let better = match best {
                None => true,
                Some((current, min_ratio, _)) => {
                    ratio < min_ratio - self.tolerance
                        || (bland
                            && ratio <= min_ratio + self.tolerance
                            && basic < tableau.basic_vars[current])
                }
            };
            if better {
                best = Some((i, ratio, to_upper));
            }
        }

        match (best, tableau.upper[col]) {
            (Some((_, ratio, _)), Some(ub)) if ub <= ratio => Ratio::BoundFlip(ub),
            (None, Some(ub)) => Ratio::BoundFlip(ub),
            (Some((row, step, to_upper)), _) => Ratio::Pivot { row, step, to_upper },
            (None, None) => Ratio::Unbounded,
        }
    }

    fn pivot(&self, tableau: &mut Tableau, row: usize, col: usize) {
        tableau.basic_vars[row] = col;

        let pivot_val = tableau.data[row][col];
        for x in tableau.data[row].iter_mut() {
            *x /= pivot_val;
        }

        let pivot_row = tableau.data[row].clone();
        for (i, other) in tableau.data.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[col];
            if factor == 0.0 {
                continue;
            }
            for (x, p) in other.iter_mut().zip(&pivot_row) {
                *x -= factor * p;
            }
            // Keep the pivot column exact
            other[col] = 0.0;
        }
    }

    fn extract_solution(&self, tableau: &Tableau, problem: &LpProblem, rows: &[&Row]) -> Solution {
        let n_vars = problem.num_variables();
        let rhs_col = tableau.width() - 1;

        let mut values = vec![0.0; n_vars];
        for (i, &basic) in tableau.basic_vars.iter().enumerate() {
            if basic < n_vars {
                values[basic] = tableau.data[i][rhs_col];
            }
        }
        // A flipped column holds the distance below its cap
        for (j, value) in values.iter_mut().enumerate() {
            if let (true, Some(ub)) = (tableau.at_upper[j], tableau.upper[j]) {
                *value = ub - *value;
            }
        }
        // Absorb round-off at the bounds
        for (value, bound) in values.iter_mut().zip(&problem.upper_bounds) {
            *value = value.max(0.0);
            if let Some(ub) = bound {
                *value = value.min(*ub);
            }
        }

        let objective_value = problem
            .objective
            .coefficients
            .iter()
            .zip(&values)
            .map(|(c, x)| c * x)
            .sum();

        let analysis = self.analyze(tableau, problem, rows, &values);

        Solution {
            status: SolutionStatus::Optimal,
            values,
            objective_value,
            analysis,
            violations: Vec::new(),
            iterations: 0,
        }
    }

    fn analyze(&self, tableau: &Tableau, problem: &LpProblem, rows: &[&Row], values: &[f64]) -> Analysis {
        let obj_row = &tableau.data[tableau.n_rows()];

        // The tableau maximizes; its dual for row i is the negated entry of the
        // row's unit column, corrected for rows negated during construction
        let mut shadow_prices = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let dual = -obj_row[tableau.dual_cols[i]] * tableau.row_signs[i];
            let value = if problem.objective.minimize { -dual } else { dual };
            let value = if value.abs() < self.tolerance { 0.0 } else { value };
            let interpretation = if value == 0.0 {
                "Non-binding constraint".to_string()
            } else if value > 0.0 {
                format!("Increasing RHS by 1 unit would increase the objective by {:.4}", value)
            } else {
                format!("Increasing RHS by 1 unit would decrease the objective by {:.4}", -value)
            };
            shadow_prices.push(ShadowPrice {
                constraint: row.name.clone(),
                value,
                interpretation,
            });
        }

        let reduced_costs = problem
            .variables
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let is_basic = tableau.basic_vars.contains(&j);
                // Columns resting at their cap are already in the solution
                let reduced_cost = if is_basic || tableau.at_upper[j] {
                    0.0
                } else {
                    (-obj_row[j]).max(0.0)
                };
                ReducedCost {
                    variable: name.clone(),
                    value: values[j],
                    reduced_cost,
                    is_basic,
                }
            })
            .collect();

        let binding_constraints = shadow_prices
            .iter()
            .filter(|sp| sp.value != 0.0)
            .map(|sp| sp.constraint.clone())
            .collect();

        Analysis {
            shadow_prices,
            reduced_costs,
            binding_constraints,
        }
    }
}

/// A user constraint, or a variable cap written as a row. Cap rows are only
/// used by the infeasibility diagnostics.
#[derive(Debug, Clone)]
struct Row {
    name: String,
    coefficients: Vec<f64>,
    op: ConstraintOp,
    rhs: f64,
    is_bound: bool,
}

impl Row {
    fn expand(problem: &LpProblem) -> Vec<Row> {
        let n = problem.num_variables();
        let mut rows: Vec<Row> = problem
            .constraints
            .iter()
            .map(|c| Row {
                name: c.name.clone(),
                coefficients: c.coefficients.clone(),
                op: c.op,
                rhs: c.rhs,
                is_bound: false,
            })
            .collect();

        for (j, (name, bound)) in problem.variables.iter().zip(&problem.upper_bounds).enumerate() {
            if let Some(ub) = bound {
                let mut coefficients = vec![0.0; n];
                coefficients[j] = 1.0;
                rows.push(Row {
                    name: format!("{} <= {}", name, ub),
                    coefficients,
                    op: ConstraintOp::Le,
                    rhs: *ub,
                    is_bound: true,
                });
            }
        }
        rows
    }

    fn lhs(&self, values: &[f64]) -> f64 {
        self.coefficients.iter().zip(values).map(|(c, v)| c * v).sum()
    }
}

struct Tableau {
    data: Vec<Vec<f64>>,
    basic_vars: Vec<usize>,
    /// Unit column used to read each row's dual value
    dual_cols: Vec<usize>,
    /// -1.0 for rows negated to make the RHS non-negative
    row_signs: Vec<f64>,
    /// Cap of each column (RHS excluded); only structural columns have one
    upper: Vec<Option<f64>>,
    /// Columns substituted by `cap - x`
    at_upper: Vec<bool>,
    n_vars: usize,
    n_slack: usize,
    n_artificial: usize,
}

impl Tableau {
    fn n_rows(&self) -> usize {
        self.basic_vars.len()
    }

    fn width(&self) -> usize {
        self.data[0].len()
    }

    fn art_start(&self) -> usize {
        self.n_vars + self.n_slack
    }

    /// Move a nonbasic column to its other bound by substituting `x = cap - x'`
    fn flip_column(&mut self, col: usize) {
        let Some(ub) = self.upper[col] else {
            return;
        };
        let rhs_col = self.width() - 1;
        for row in self.data.iter_mut() {
            row[rhs_col] -= row[col] * ub;
            row[col] = -row[col];
        }
        self.at_upper[col] = !self.at_upper[col];
    }

    /// Substitute `x = cap - x'` for the basic variable of `row`, so that the
    /// next pivot can take it out at its cap
    fn flip_basic(&mut self, row: usize) {
        let basic = self.basic_vars[row];
        let Some(ub) = self.upper[basic] else {
            return;
        };
        let rhs_col = self.width() - 1;
        for x in self.data[row].iter_mut() {
            *x = -*x;
        }
        self.data[row][basic] = 1.0;
        self.data[row][rhs_col] += ub;
        self.at_upper[basic] = !self.at_upper[basic];
    }

    /// Apply every active substitution to a row loaded from outside the tableau
    fn apply_flips(&mut self, row: usize) {
        let rhs_col = self.width() - 1;
        for j in 0..rhs_col {
            if let (true, Some(ub)) = (self.at_upper[j], self.upper[j]) {
                self.data[row][rhs_col] -= self.data[row][j] * ub;
                self.data[row][j] = -self.data[row][j];
            }
        }
    }
}

/// Iteration and wall-clock accounting shared by every phase of one solve
struct Budget {
    started: Instant,
    deadline: Option<Instant>,
    iterations: usize,
}

impl Budget {
    fn new(time_limit: Option<Duration>) -> Self {
        let started = Instant::now();
        Self {
            started,
            deadline: time_limit.and_then(|limit| started.checked_add(limit)),
            iterations: 0,
        }
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

enum Step {
    Optimal,
    Unbounded,
    TimeLimit,
    IterationLimit,
}

enum Ratio {
    /// Pivot on `row`; `to_upper` when its basic variable leaves at its cap
    Pivot { row: usize, step: f64, to_upper: bool },
    /// The entering column reaches its own cap first
    BoundFlip(f64),
    Unbounded,
}

enum Phase1Result {
    Feasible,
    Infeasible,
    Stopped(Step),
}

//! Box-constrained local minimization behind a narrow capability interface.
//!
//! The tuner only ever needs "given an objective, a start vector and per-variable bounds,
//! return a locally optimal vector and its cost". Everything argmin-specific stays behind
//! [`Minimizer`] so any box-constrained local optimizer can be substituted.

use argmin::core::CostFunction;
use argmin::core::Error as ArgminError;
use argmin::core::Executor;
use argmin::core::State;
use argmin::core::TerminationReason;
use argmin::core::TerminationStatus;
use argmin::solver::neldermead::NelderMead;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// An objective function over a candidate vector.
pub type Objective<'a> = dyn Fn(&[f64]) -> f64 + 'a;

/// Per-variable box constraint. `None` means unbounded on that side.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bound {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Bound {
    pub fn at_least(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    fn clamp(self, value: f64) -> f64 {
        let value = match self.lower {
            Some(lower) => value.max(lower),
            None => value,
        };
        match self.upper {
            Some(upper) => value.min(upper),
            None => value,
        }
    }
}

/// The outcome of a minimization run.
#[derive(Clone, Debug)]
pub struct Minimum {
    /// The best candidate found, projected into the feasible box.
    pub solution: Vec<f64>,
    /// The objective value at [`Minimum::solution`].
    pub cost: f64,
    /// Whether the solver reported convergence. A `false` value is not an error; the
    /// best-effort solution is returned regardless.
    pub converged: bool,
}

/// A box-constrained local minimizer.
pub trait Minimizer {
    fn minimize(
        &self,
        objective: &Objective<'_>,
        initial: &[f64],
        bounds: &[Bound],
    ) -> Result<Minimum, MinimizeError>;
}

/// Derivative-free downhill-simplex minimizer backed by argmin's Nelder-Mead solver.
///
/// Box constraints are enforced by projection: every candidate is clamped into the feasible
/// box before evaluation and the returned solution is clamped as well. The initial point is
/// always a vertex of the starting simplex, so the best cost found never exceeds the cost
/// of the initial point.
#[derive(Copy, Clone, Debug)]
pub struct NelderMeadMinimizer {
    max_iters: u64,
    sd_tolerance: f64,
}

impl NelderMeadMinimizer {
    pub fn new() -> Self {
        Self {
            max_iters: 10_000,
            sd_tolerance: 1e-12,
        }
    }

    /// Replaces the iteration budget.
    pub fn with_max_iters(mut self, max_iters: u64) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Replaces the sample-standard-deviation termination tolerance.
    pub fn with_sd_tolerance(mut self, sd_tolerance: f64) -> Self {
        self.sd_tolerance = sd_tolerance;
        self
    }

    fn initial_simplex(initial: &[f64], bounds: &[Bound]) -> Vec<Vec<f64>> {
        // Classic axis-aligned simplex: scale each coordinate in turn, with an absolute
        // step for coordinates at zero.
        let origin: Vec<f64> = initial
            .iter()
            .zip(bounds)
            .map(|(&value, bound)| bound.clamp(value))
            .collect();

        let mut simplex = Vec::with_capacity(origin.len() + 1);
        simplex.push(origin.clone());
        for dimension in 0..origin.len() {
            let mut vertex = origin.clone();
            vertex[dimension] = if vertex[dimension] != 0.0 {
                vertex[dimension] * 1.05
            } else {
                0.00025
            };
            simplex.push(vertex);
        }
        simplex
    }
}

impl Default for NelderMeadMinimizer {
    fn default() -> Self {
        Self::new()
    }
}

struct Projected<'a> {
    objective: &'a Objective<'a>,
    bounds: &'a [Bound],
}

impl Projected<'_> {
    fn project(&self, candidate: &[f64]) -> Vec<f64> {
        candidate
            .iter()
            .zip(self.bounds)
            .map(|(&value, bound)| bound.clamp(value))
            .collect()
    }
}

impl CostFunction for Projected<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok((self.objective)(&self.project(param)))
    }
}

impl Minimizer for NelderMeadMinimizer {
    fn minimize(
        &self,
        objective: &Objective<'_>,
        initial: &[f64],
        bounds: &[Bound],
    ) -> Result<Minimum, MinimizeError> {
        if initial.is_empty() {
            return Err(MinimizeError::EmptyInitialPoint);
        }
        if initial.len() != bounds.len() {
            return Err(MinimizeError::DimensionMismatch {
                num_variables: initial.len(),
                num_bounds: bounds.len(),
            });
        }

        let problem = Projected { objective, bounds };
        let solver = NelderMead::new(Self::initial_simplex(initial, bounds))
            .with_sd_tolerance(self.sd_tolerance)
            .map_err(solver_error)?;

        let max_iters = self.max_iters;
        let result = Executor::new(problem, solver)
            .configure(|state| state.max_iters(max_iters))
            .run()
            .map_err(solver_error)?;

        let state = result.state();
        let best = state
            .get_best_param()
            .ok_or_else(|| MinimizeError::Solver("solver returned no candidate".to_owned()))?;

        Ok(Minimum {
            solution: best
                .iter()
                .zip(bounds)
                .map(|(&value, bound)| bound.clamp(value))
                .collect(),
            cost: state.get_best_cost(),
            converged: matches!(
                state.get_termination_status(),
                TerminationStatus::Terminated(TerminationReason::SolverConverged)
            ),
        })
    }
}

fn solver_error(error: ArgminError) -> MinimizeError {
    MinimizeError::Solver(error.to_string())
}

/// Minimization could not be started or aborted abnormally.
#[derive(Clone, Debug)]
pub enum MinimizeError {
    EmptyInitialPoint,
    DimensionMismatch {
        num_variables: usize,
        num_bounds: usize,
    },
    Solver(String),
}

impl Display for MinimizeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MinimizeError::EmptyInitialPoint => write!(f, "initial point must not be empty"),
            MinimizeError::DimensionMismatch {
                num_variables,
                num_bounds,
            } => write!(
                f,
                "got {} variables but {} bounds",
                num_variables, num_bounds
            ),
            MinimizeError::Solver(message) => write!(f, "solver error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn finds_an_unconstrained_quadratic_minimum() {
        let objective = |x: &[f64]| (x[0] - 3.0).powi(2) + (x[1] + 1.0).powi(2);
        let minimum = NelderMeadMinimizer::new()
            .minimize(&objective, &[0.0, 0.0], &[Bound::default(); 2])
            .unwrap();
        assert_approx_eq!(minimum.solution[0], 3.0, 1e-4);
        assert_approx_eq!(minimum.solution[1], -1.0, 1e-4);
        assert!(minimum.cost < 1e-6);
    }

    #[test]
    fn respects_lower_bounds() {
        // Unconstrained minimum at x = -2, feasible box starts at 1.
        let objective = |x: &[f64]| (x[0] + 2.0).powi(2);
        let minimum = NelderMeadMinimizer::new()
            .minimize(&objective, &[5.0], &[Bound::at_least(1.0)])
            .unwrap();
        assert!(minimum.solution[0] >= 1.0);
        assert_approx_eq!(minimum.solution[0], 1.0, 1e-3);
    }

    #[test]
    fn never_does_worse_than_the_initial_point() {
        let objective = |x: &[f64]| (x[0] * x[1] - 1.0).abs();
        let initial = [2.0, 0.5];
        let minimum = NelderMeadMinimizer::new()
            .with_max_iters(5)
            .minimize(&objective, &initial, &[Bound::default(); 2])
            .unwrap();
        assert!(minimum.cost <= objective(&initial));
    }

    #[test]
    fn rejects_mismatched_bounds() {
        let objective = |x: &[f64]| x[0];
        let result = NelderMeadMinimizer::new().minimize(&objective, &[1.0, 2.0], &[]);
        assert!(matches!(result, Err(MinimizeError::DimensionMismatch { .. })));
    }

    #[test]
    fn rejects_an_empty_initial_point() {
        let objective = |_: &[f64]| 0.0;
        let result = NelderMeadMinimizer::new().minimize(&objective, &[], &[]);
        assert!(matches!(result, Err(MinimizeError::EmptyInitialPoint)));
    }
}

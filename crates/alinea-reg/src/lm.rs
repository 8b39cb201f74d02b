//! Two-parameter Levenberg-Marquardt solver.
//!
//! Minimizes the sum of squares of a residual vector over an unbounded
//! `(frequency shift, phase shift)` pair. The Jacobian is built by
//! forward differences and the damped normal equations
//! `(JᵀJ + λ·diag(JᵀJ))·δ = -Jᵀr` are solved as a 2×2 system. The
//! solver always terminates and always returns its best estimate: a
//! non-converged or poor-quality solve is reported through
//! [`LmOutcome::converged`], never as an error. A singular damped
//! system only raises λ and retries.

use nalgebra::{Matrix2, Vector2};

/// Tuning knobs for the solver. The defaults match the expected use:
/// smooth spectral residuals and seeds already near the optimum.
#[derive(Debug, Clone, Copy)]
pub struct LmOptions {
    /// Iteration budget. The solver stops here even without convergence.
    pub max_iterations: usize,
    /// Initial damping factor λ.
    pub lambda_init: f64,
    /// Multiplicative λ schedule (raise on rejection, lower on acceptance).
    pub lambda_scale: f64,
    /// Terminate when `max(|Jᵀr|)` falls below this.
    pub gradient_tol: f64,
    /// Terminate when an accepted step is this small relative to `x`.
    pub step_tol: f64,
}

impl Default for LmOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            lambda_init: 1e-3,
            lambda_scale: 10.0,
            gradient_tol: 1e-10,
            step_tol: 1e-10,
        }
    }
}

/// Result of a solve. `params` is the best point visited.
#[derive(Debug, Clone, Copy)]
pub struct LmOutcome {
    /// Best parameter pair found.
    pub params: Vector2<f64>,
    /// Sum of squared residuals at `params`.
    pub cost: f64,
    /// Iterations actually run.
    pub iterations: usize,
    /// Whether a gradient or step tolerance was met.
    pub converged: bool,
}

fn sum_sq(r: &[f64]) -> f64 {
    r.iter().map(|v| v * v).sum()
}

/// Minimize `Σ residual_fn(x)²` starting from `x0`.
///
/// `residual_fn` must return a vector of fixed length for any `x`.
pub fn minimize<F>(mut residual_fn: F, x0: Vector2<f64>, options: &LmOptions) -> LmOutcome
where
    F: FnMut(Vector2<f64>) -> Vec<f64>,
{
    let mut x = x0;
    let mut r = residual_fn(x);
    let mut cost = sum_sq(&r);
    let mut lambda = options.lambda_init;
    let mut converged = false;
    let mut iterations = 0;

    // Lambda past this means the surface rejects every damped step.
    const LAMBDA_MAX: f64 = 1e12;

    for iter in 0..options.max_iterations {
        iterations = iter + 1;

        // Forward-difference Jacobian, one column per parameter.
        let mut columns = [Vec::new(), Vec::new()];
        for (p, column) in columns.iter_mut().enumerate() {
            let h = f64::EPSILON.sqrt() * x[p].abs().max(1.0);
            let mut xh = x;
            xh[p] += h;
            let rh = residual_fn(xh);
            *column = r
                .iter()
                .zip(rh.iter())
                .map(|(&base, &bumped)| (bumped - base) / h)
                .collect();
        }

        let mut jtj = Matrix2::<f64>::zeros();
        let mut jtr = Vector2::<f64>::zeros();
        for i in 0..r.len() {
            let j0 = columns[0][i];
            let j1 = columns[1][i];
            jtj[(0, 0)] += j0 * j0;
            jtj[(0, 1)] += j0 * j1;
            jtj[(1, 1)] += j1 * j1;
            jtr[0] += j0 * r[i];
            jtr[1] += j1 * r[i];
        }
        jtj[(1, 0)] = jtj[(0, 1)];

        if jtr.amax() < options.gradient_tol {
            converged = true;
            break;
        }

        let mut accepted = false;
        while lambda <= LAMBDA_MAX {
            // Marquardt scaling: damp proportionally to the curvature,
            // with a floor so flat directions stay solvable.
            let mut damped = jtj;
            damped[(0, 0)] += lambda * jtj[(0, 0)].max(1e-12);
            damped[(1, 1)] += lambda * jtj[(1, 1)].max(1e-12);

            let Some(inverse) = damped.try_inverse() else {
                lambda *= options.lambda_scale;
                continue;
            };

            let step = -(inverse * jtr);
            let trial = x + step;
            let r_trial = residual_fn(trial);
            let cost_trial = sum_sq(&r_trial);

            if cost_trial < cost {
                let step_small = step.norm() < options.step_tol * (x.norm() + options.step_tol);
                x = trial;
                r = r_trial;
                cost = cost_trial;
                lambda = (lambda / options.lambda_scale).max(1e-12);
                accepted = true;
                if step_small {
                    converged = true;
                }
                break;
            }

            lambda *= options.lambda_scale;
        }

        if converged || !accepted {
            break;
        }
    }

    LmOutcome {
        params: x,
        cost,
        iterations,
        converged,
    }
}

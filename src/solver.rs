//! Fixed-Step Classical Runge-Kutta (RK4) Integrator
//!
//! A 4-stage explicit integrator over a fixed-size state vector,
//! parameterized by a caller-supplied right-hand side. One step of size `h`
//! computes
//!
//! ```text
//! k1 = f(t,       y)
//! k2 = f(t + h/2, y + h/2 k1)
//! k3 = f(t + h/2, y + h/2 k2)
//! k4 = f(t + h,   y + h   k3)
//! y' = y + h (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! giving O(h⁴) global accuracy. There is no step-size control and no error
//! estimation: the step size is whatever the caller picks, and integration
//! is deterministic. The integrator holds no per-run state beyond a stage
//! workspace and evaluation counters; the state vector is owned by the
//! caller and a new one is returned from every step.

use thiserror::Error;

/// Number of stage evaluations per RK4 step
pub const STAGES: usize = 4;

/// System of ordinary differential equations: dy/dt = f(t, y)
///
/// Implement this for anything that can produce a derivative from a time
/// and a state. Configuration (physical constants, force toggles) belongs
/// in the implementing value, so independent simulations never share
/// mutable state.
pub trait OdeSystem<const N: usize> {
    /// Evaluate the right-hand side of the ODE system
    ///
    /// # Arguments
    /// * `t` - Current time
    /// * `y` - Current state vector
    /// * `dydt` - Output: derivative dy/dt
    fn rhs(&self, t: f64, y: &[f64; N], dydt: &mut [f64; N]);
}

/// Predicate that ends a step-by-step integration run.
///
/// Evaluated after each step; the integrator stops at the first post-step
/// state for which this returns `true`. No root refinement is performed —
/// the returned state is the state at the end of the step that triggered
/// the condition.
pub trait StopCondition<const N: usize> {
    /// `true` once integration should stop at `(t, y)`.
    fn should_stop(&self, t: f64, y: &[f64; N]) -> bool;
}

impl<F, const N: usize> StopCondition<N> for F
where
    F: Fn(f64, &[f64; N]) -> bool,
{
    fn should_stop(&self, t: f64, y: &[f64; N]) -> bool {
        self(t, y)
    }
}

/// Integration statistics for diagnostics
#[derive(Debug, Clone, Default)]
pub struct Stats {
    /// Total number of right-hand-side evaluations
    pub fn_evals: u64,
    /// Number of steps taken
    pub steps: u64,
}

/// Outcome of [`Rk4::propagate_until`]
#[derive(Debug, Clone)]
pub enum PropagationResult<const N: usize> {
    /// The stop condition fired
    Stopped {
        /// Time at the end of the triggering step
        t: f64,
        /// State at the end of the triggering step
        y: [f64; N],
        /// Steps taken before stopping
        steps: u64,
    },
    /// The step budget ran out before the condition fired
    MaxStepsReached {
        /// Time after the last step
        t: f64,
        /// State after the last step
        y: [f64; N],
    },
}

/// Errors that can occur during integration
#[derive(Debug, Clone, Error)]
pub enum IntegrationError {
    /// Invalid input parameters
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the invalid input
        message: String,
    },
    /// The state picked up a NaN or infinity mid-run
    #[error("non-finite state detected at t = {t}")]
    NonFiniteState {
        /// Time at which the non-finite component appeared
        t: f64,
    },
    /// The step budget was exhausted before the run could finish
    #[error("maximum number of integration steps exceeded")]
    MaxStepsExceeded,
}

/// Classical 4th-order Runge-Kutta integrator
///
/// # Type Parameters
/// * `N` - Dimension of the state vector
///
/// # Example
/// ```rust
/// use freekick::{OdeSystem, Rk4};
///
/// /// Vertical free fall under gravity: state [z, vz]
/// struct FreeFall { g: f64 }
///
/// impl OdeSystem<2> for FreeFall {
///     fn rhs(&self, _t: f64, y: &[f64; 2], dydt: &mut [f64; 2]) {
///         dydt[0] = y[1];
///         dydt[1] = -self.g;
///     }
/// }
///
/// let mut solver = Rk4::new();
/// let (t, y) = solver
///     .propagate(&FreeFall { g: 9.812 }, 0.0, &[10.0, 0.0], 0.01, 100)
///     .unwrap();
/// // z(1) = 10 − g/2, exact for RK4 since the solution is quadratic in t
/// assert!((y[0] - (10.0 - 9.812 / 2.0)).abs() < 1e-10);
/// assert!((t - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Rk4<const N: usize> {
    /// Stage evaluations (pre-allocated workspace)
    k: [[f64; N]; STAGES],
    /// Integration statistics
    pub stats: Stats,
}

impl<const N: usize> Default for Rk4<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Rk4<N> {
    /// Create a new RK4 solver
    pub fn new() -> Self {
        Self {
            k: [[0.0; N]; STAGES],
            stats: Stats::default(),
        }
    }

    /// Perform a single RK4 step of size `h` from `(t, y)`.
    ///
    /// Returns the new time and state. Inputs are not validated here; use
    /// [`propagate`](Self::propagate) for a checked multi-step run.
    pub fn step<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t: f64,
        y: &[f64; N],
        h: f64,
    ) -> (f64, [f64; N]) {
        let mut y_temp = [0.0; N];

        sys.rhs(t, y, &mut self.k[0]);

        for n in 0..N {
            y_temp[n] = y[n] + 0.5 * h * self.k[0][n];
        }
        sys.rhs(t + 0.5 * h, &y_temp, &mut self.k[1]);

        for n in 0..N {
            y_temp[n] = y[n] + 0.5 * h * self.k[1][n];
        }
        sys.rhs(t + 0.5 * h, &y_temp, &mut self.k[2]);

        for n in 0..N {
            y_temp[n] = y[n] + h * self.k[2][n];
        }
        sys.rhs(t + h, &y_temp, &mut self.k[3]);

        let mut y_next = [0.0; N];
        for n in 0..N {
            let slope = self.k[0][n] + 2.0 * self.k[1][n] + 2.0 * self.k[2][n] + self.k[3][n];
            y_next[n] = y[n] + h * slope / 6.0;
        }

        self.stats.fn_evals += STAGES as u64;
        self.stats.steps += 1;

        (t + h, y_next)
    }

    /// Advance the state by `steps` RK4 steps of size `h`.
    ///
    /// Intermediate states are not retained; only the final time and state
    /// come back. Callers that need the trajectory should call with
    /// `steps = 1` repeatedly and collect each result themselves.
    ///
    /// # Errors
    /// * [`IntegrationError::InvalidInput`] for non-finite `t0`/`y0`, or a
    ///   zero or non-finite `h`
    /// * [`IntegrationError::NonFiniteState`] if a component stops being
    ///   finite mid-run
    pub fn propagate<S: OdeSystem<N>>(
        &mut self,
        sys: &S,
        t0: f64,
        y0: &[f64; N],
        h: f64,
        steps: u64,
    ) -> Result<(f64, [f64; N]), IntegrationError> {
        self.validate_inputs(t0, y0, h)?;

        let mut t = t0;
        let mut y = *y0;
        for _ in 0..steps {
            let (t_next, y_next) = self.step(sys, t, &y, h);
            t = t_next;
            y = y_next;
            if !y.iter().all(|v| v.is_finite()) {
                return Err(IntegrationError::NonFiniteState { t });
            }
        }
        Ok((t, y))
    }

    /// Step until `stop` fires, up to `max_steps` steps.
    ///
    /// The condition is evaluated on the initial state and then after every
    /// step; the run ends at the first state for which it holds. If the
    /// step budget runs out first, the final state comes back in
    /// [`PropagationResult::MaxStepsReached`] so the caller can branch
    /// rather than lose the run.
    pub fn propagate_until<S, C>(
        &mut self,
        sys: &S,
        stop: &C,
        t0: f64,
        y0: &[f64; N],
        h: f64,
        max_steps: u64,
    ) -> Result<PropagationResult<N>, IntegrationError>
    where
        S: OdeSystem<N>,
        C: StopCondition<N>,
    {
        self.validate_inputs(t0, y0, h)?;

        let mut t = t0;
        let mut y = *y0;

        if stop.should_stop(t, &y) {
            return Ok(PropagationResult::Stopped { t, y, steps: 0 });
        }

        for step in 1..=max_steps {
            let (t_next, y_next) = self.step(sys, t, &y, h);
            t = t_next;
            y = y_next;
            if !y.iter().all(|v| v.is_finite()) {
                return Err(IntegrationError::NonFiniteState { t });
            }
            if stop.should_stop(t, &y) {
                return Ok(PropagationResult::Stopped { t, y, steps: step });
            }
        }

        Ok(PropagationResult::MaxStepsReached { t, y })
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    fn validate_inputs(&self, t0: f64, y0: &[f64; N], h: f64) -> Result<(), IntegrationError> {
        if !t0.is_finite() || !h.is_finite() {
            return Err(IntegrationError::InvalidInput {
                message: "t0 and h must be finite".to_string(),
            });
        }
        if h == 0.0 {
            return Err(IntegrationError::InvalidInput {
                message: "h must be non-zero".to_string(),
            });
        }
        for (i, &val) in y0.iter().enumerate() {
            if !val.is_finite() {
                return Err(IntegrationError::InvalidInput {
                    message: format!("y0[{}] is not finite", i),
                });
            }
        }
        Ok(())
    }
}

//! Football Flight Dynamics
//!
//! The projectile right-hand-side model and the free-kick simulation
//! driver. The state vector is `[x, y, z, vx, vy, vz]`: `x` points from the
//! pitch center toward the goal, `y` across the pitch, `z` up. Forces on
//! the ball are constant gravity, an optional quadratic drag deceleration,
//! and an optional Magnus term that couples the horizontal velocity
//! components when the ball spins about the vertical axis.
//!
//! All configuration — force toggles and the spin vector — lives in an
//! immutable [`BallFlight`] value bound before integration starts, so any
//! number of independent simulations can run without shared state.
//!
//! # Example
//!
//! ```rust
//! use freekick::ballistics::{simulate, BallFlight, FreeKick, ShotOutcome};
//!
//! let flight = BallFlight::new()
//!     .with_drag(true)
//!     .with_magnus(true)
//!     .with_spin([0.0, 0.0, 10.0]);
//!
//! let record = simulate(&flight, &FreeKick::default(), 0.01, 10_000).unwrap();
//! assert!(matches!(
//!     record.outcome,
//!     ShotOutcome::Goal | ShotOutcome::OverBar | ShotOutcome::Short
//! ));
//! ```

use std::f64::consts::PI;

use crate::solver::{IntegrationError, OdeSystem, Rk4};

/// Football pitch length in meters
pub const PITCH_LENGTH: f64 = 100.0;
/// Football pitch width in meters
pub const PITCH_WIDTH: f64 = 64.0;
/// Goal width in meters (between the inner sides of the posts)
pub const GOAL_WIDTH: f64 = 7.32;
/// Goal height in meters (ground to the lower side of the crossbar)
pub const GOAL_HEIGHT: f64 = 2.44;
/// Gravitational acceleration in m/s²
pub const GRAVITY: f64 = 9.812;
/// Ball radius in meters
pub const BALL_RADIUS: f64 = 0.111;
/// Ball mass in kg
pub const BALL_MASS: f64 = 0.436;
/// Dimensionless drag coefficient
pub const DRAG_COEFF: f64 = 0.473;
/// Dimensionless Magnus coefficient
pub const MAGNUS_COEFF: f64 = 0.002;
/// Air density in kg/m³
pub const AIR_DENSITY: f64 = 1.22;

/// The goal line's x coordinate (pitch coordinates are centered)
pub const GOAL_LINE: f64 = 0.5 * PITCH_LENGTH;

/// Force model for a football in flight.
///
/// Gravity always acts; drag and the Magnus effect are opt-in. The spin
/// vector is read once at construction — only its z component enters the
/// horizontal Magnus coupling.
#[derive(Debug, Clone, PartialEq)]
pub struct BallFlight {
    drag: bool,
    magnus: bool,
    spin: [f64; 3],
}

impl BallFlight {
    /// Gravity-only model: drag and Magnus disabled, no spin.
    pub fn new() -> Self {
        Self {
            drag: false,
            magnus: false,
            spin: [0.0; 3],
        }
    }

    /// Enable or disable quadratic air drag.
    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag = enabled;
        self
    }

    /// Enable or disable the Magnus (spin-curving) force.
    pub fn with_magnus(mut self, enabled: bool) -> Self {
        self.magnus = enabled;
        self
    }

    /// Set the ball's angular velocity in rad/s.
    pub fn with_spin(mut self, spin: [f64; 3]) -> Self {
        self.spin = spin;
        self
    }

    /// Drag deceleration factor `d = ½ C_d ρ π r² / m`, or 0 when drag is
    /// disabled.
    fn drag_factor(&self) -> f64 {
        if self.drag {
            0.5 * DRAG_COEFF * AIR_DENSITY * PI * BALL_RADIUS * BALL_RADIUS / BALL_MASS
        } else {
            0.0
        }
    }

    /// Magnus coupling `μ = S ω_z / m`, or 0 when the effect is disabled.
    fn magnus_factor(&self) -> f64 {
        if self.magnus {
            MAGNUS_COEFF * self.spin[2] / BALL_MASS
        } else {
            0.0
        }
    }
}

impl Default for BallFlight {
    fn default() -> Self {
        Self::new()
    }
}

impl OdeSystem<6> for BallFlight {
    fn rhs(&self, _t: f64, y: &[f64; 6], dydt: &mut [f64; 6]) {
        // Position derivatives are the velocity components
        dydt[0] = y[3];
        dydt[1] = y[4];
        dydt[2] = y[5];

        let d = self.drag_factor();
        let magnus = self.magnus_factor();
        let vmag = (y[3] * y[3] + y[4] * y[4] + y[5] * y[5]).sqrt();

        dydt[3] = -d * vmag * y[3] - magnus * y[4];
        dydt[4] = -d * vmag * y[4] + magnus * y[3];
        dydt[5] = -GRAVITY - d * vmag * y[5];
    }
}

/// Launch configuration for a free kick.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeKick {
    /// Launch position `[x, y, z]` in pitch coordinates (m)
    pub position: [f64; 3],
    /// Launch speed in m/s
    pub speed: f64,
    /// Elevation angle above the horizontal, in radians
    pub elevation: f64,
}

impl FreeKick {
    /// The 6-component initial state. The kick is aimed straight down the
    /// pitch: no initial sideways velocity.
    pub fn initial_state(&self) -> [f64; 6] {
        [
            self.position[0],
            self.position[1],
            self.position[2],
            self.speed * self.elevation.cos(),
            0.0,
            self.speed * self.elevation.sin(),
        ]
    }
}

impl Default for FreeKick {
    /// 20 m in front of the goal line, 3 m left of the goal center, ball
    /// resting on the ground, struck at 25 m/s and 20° elevation.
    fn default() -> Self {
        Self {
            position: [GOAL_LINE - 20.0, 3.0, BALL_RADIUS],
            speed: 25.0,
            elevation: 20.0 * PI / 180.0,
        }
    }
}

/// How a simulated kick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Crossed the goal line with the top of the ball below the crossbar
    Goal,
    /// Crossed the goal line above the crossbar
    OverBar,
    /// Touched the ground before reaching the goal line
    Short,
}

/// A completed kick: the full trajectory and how it ended.
#[derive(Debug, Clone)]
pub struct KickRecord {
    /// `(t, state)` at the launch point and after every step
    pub trajectory: Vec<(f64, [f64; 6])>,
    /// Classification of the final state
    pub outcome: ShotOutcome,
}

impl KickRecord {
    /// Time and state at the end of the flight.
    pub fn final_state(&self) -> (f64, [f64; 6]) {
        // trajectory always holds at least the launch state
        *self.trajectory.last().unwrap()
    }

    /// Flight duration in seconds.
    pub fn flight_time(&self) -> f64 {
        self.final_state().0
    }
}

/// Simulate a free kick with fixed step `dt` until the ball crosses the
/// goal line or touches the ground.
///
/// The solver is driven one step at a time so the whole trajectory can be
/// recorded; the stopping predicates are evaluated after each step. The
/// flight ends when `x` reaches the goal line or the ball center drops to
/// ball radius (touchdown), and the outcome is classified from the final
/// height.
///
/// # Errors
/// * [`IntegrationError::InvalidInput`] for a non-positive or non-finite
///   `dt`, or a non-finite launch state
/// * [`IntegrationError::NonFiniteState`] if the state diverges
/// * [`IntegrationError::MaxStepsExceeded`] if neither stopping condition
///   fires within `max_steps`
pub fn simulate(
    flight: &BallFlight,
    kick: &FreeKick,
    dt: f64,
    max_steps: u64,
) -> Result<KickRecord, IntegrationError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(IntegrationError::InvalidInput {
            message: format!("dt must be positive and finite, got {}", dt),
        });
    }

    let mut solver = Rk4::new();
    let mut t = 0.0;
    let mut y = kick.initial_state();
    if !y.iter().all(|v| v.is_finite()) {
        return Err(IntegrationError::InvalidInput {
            message: "launch state is not finite".to_string(),
        });
    }

    let mut trajectory = vec![(t, y)];

    for _ in 0..max_steps {
        let (t_next, y_next) = solver.step(flight, t, &y, dt);
        t = t_next;
        y = y_next;
        if !y.iter().all(|v| v.is_finite()) {
            return Err(IntegrationError::NonFiniteState { t });
        }
        trajectory.push((t, y));

        if y[0] >= GOAL_LINE || y[2] <= BALL_RADIUS {
            let outcome = classify(&y);
            return Ok(KickRecord {
                trajectory,
                outcome,
            });
        }
    }

    Err(IntegrationError::MaxStepsExceeded)
}

/// Classify a terminal state: reached the goal line and under the bar is a
/// goal; grounded short of the line is a weak shot.
fn classify(y: &[f64; 6]) -> ShotOutcome {
    if y[0] >= GOAL_LINE {
        let ball_top = y[2] + BALL_RADIUS;
        if ball_top < GOAL_HEIGHT {
            ShotOutcome::Goal
        } else {
            ShotOutcome::OverBar
        }
    } else {
        ShotOutcome::Short
    }
}

//! # Freekick: Numerical Methods for Football Flight Analysis
//!
//! A small, dependency-light toolkit for analyzing and simulating the
//! flight of a football:
//!
//! - **Polynomial interpolation** — Lagrange form and Newton
//!   divided-difference form ([`interp`])
//! - **Composite Newton-Cotes quadrature** — trapezoid, Simpson 1/3, and
//!   Simpson 3/8 weight generation with a weighted-sum driver
//!   ([`quadrature`])
//! - **Fixed-step RK4 integration** — a classical 4th-order Runge-Kutta
//!   stepper over a generic state vector, with stop-condition support
//!   ([`solver`])
//! - **Projectile dynamics** — gravity, quadratic drag, and the Magnus
//!   spin-curving force, plus a free-kick simulation driver
//!   ([`ballistics`])
//! - **Tracking-data analysis** — ingestion, coordinate transforms,
//!   centered finite differences, and the power-to-energy pipeline
//!   ([`tracking`])
//!
//! Everything is single-threaded, deterministic, and pure computation over
//! in-memory buffers; only [`tracking::TrackingData::from_path`] touches
//! the filesystem.
//!
//! ## Interpolate and integrate
//!
//! ```rust
//! use freekick::{kick_energy, NewtonCotes, NewtonPoly};
//!
//! // Kicking power (W) calibrated at four run-up speeds (m/s)
//! let power_curve = NewtonPoly::fit(&[0.0, 3.0, 5.0, 8.0], &[100.0, 700.0, 1100.0, 2000.0])?;
//!
//! // Recorded speed samples at 0.2 s spacing -> power series -> joules
//! let speeds = [2.0, 3.5, 5.0, 6.0, 5.5, 4.0, 2.5];
//! let power: Vec<f64> = speeds.iter().map(|&v| power_curve.eval(v)).collect();
//! let energy = kick_energy(&power, 0.2, NewtonCotes::Trapezoid)?;
//! assert!(energy > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Simulate a free kick
//!
//! ```rust
//! use freekick::{simulate, BallFlight, FreeKick, ShotOutcome};
//!
//! // Curl the ball with 10 rad/s of z-spin, drag on
//! let flight = BallFlight::new()
//!     .with_drag(true)
//!     .with_magnus(true)
//!     .with_spin([0.0, 0.0, 10.0]);
//!
//! let record = simulate(&flight, &FreeKick::default(), 0.01, 10_000)?;
//! println!("{:?} after {:.2} s", record.outcome, record.flight_time());
//! # Ok::<(), freekick::IntegrationError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod ballistics;
pub mod interp;
pub mod quadrature;
pub mod solver;
pub mod tracking;

pub use ballistics::{simulate, BallFlight, FreeKick, KickRecord, ShotOutcome};
pub use interp::{
    divided_differences, lagrange_basis, lagrange_eval, newton_eval, InterpError, NewtonPoly,
};
pub use quadrature::{
    integrate_fn, integrate_samples, simpson38_weights, simpson_weights, trapezoid_weights,
    NewtonCotes, QuadratureError,
};
pub use solver::{
    IntegrationError, OdeSystem, PropagationResult, Rk4, Stats, StopCondition, STAGES,
};
pub use tracking::{kick_energy, TrackingData, TrackingError};

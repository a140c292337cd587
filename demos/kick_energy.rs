//! Run-up energy analysis from tracking data.
//!
//! Builds a synthetic `t x y` tracking series for a player's run-up,
//! differentiates it with centered finite differences, maps the speed
//! profile through an interpolated power-vs-speed curve, and integrates
//! power over time with two quadrature rules to estimate the energy spent.
//!
//! Run with:
//!   RUST_LOG=warn cargo run --example kick_energy

use freekick::tracking::{central_velocity, kick_energy, magnitude, to_pitch_coords, TrackingData};
use freekick::{lagrange_eval, NewtonCotes, NewtonPoly};

fn main() {
    env_logger::init();

    // Power (W) measured at four run-up speeds (m/s)
    let speed_nodes = [0.0, 3.0, 5.0, 8.0];
    let power_nodes = [100.0, 700.0, 1100.0, 2000.0];

    // Cross-check the two interpolation paths at v = 5.8 m/s
    let poly = NewtonPoly::fit(&speed_nodes, &power_nodes).expect("distinct calibration speeds");
    let v_eval = 5.8;
    let p_lagrange = lagrange_eval(&speed_nodes, &power_nodes, v_eval).unwrap();
    println!("P({v_eval}) = {p_lagrange:.3} W (Lagrange)");
    println!("P({v_eval}) = {:.3} W (Newton nested form)", poly.eval(v_eval));

    // Synthetic tracking data: a player accelerating down the pitch,
    // sampled at 5 Hz in normalized coordinates.
    let dt = 0.2;
    let rows: String = (0..40)
        .map(|i| {
            let t = i as f64 * dt;
            // Speed ramps linearly to 6 m/s over 3 s, then holds
            let x_m = if t < 3.0 { t * t } else { 9.0 + 6.0 * (t - 3.0) };
            let x_norm = 0.2 + x_m / 100.0;
            let y_norm = 0.5 + 0.001 * t;
            format!("{t:.1} {x_norm:.6} {y_norm:.6}\n")
        })
        .collect();
    let data = TrackingData::parse(rows.as_bytes()).expect("well-formed synthetic rows");

    let (x, y) = to_pitch_coords(&data.x, &data.y);
    let vx = central_velocity(&x, dt);
    let vy = central_velocity(&y, dt);
    let speed = magnitude(&vx, &vy);
    println!(
        "max run-up speed = {:.3} m/s over {} samples",
        speed.iter().cloned().fold(0.0, f64::max),
        speed.len()
    );

    // Power series along the run, then energy by two rules. The sample
    // count is even (odd segment count), so Simpson 3/8 patches its tail
    // and logs a warning.
    let power: Vec<f64> = speed.iter().map(|&v| poly.eval(v)).collect();

    let e_trapz = kick_energy(&power, dt, NewtonCotes::Trapezoid).unwrap();
    println!("Energy (trapezoid)   = {e_trapz:.2} J");

    let e_sim38 = kick_energy(&power, dt, NewtonCotes::Simpson38).unwrap();
    println!("Energy (Simpson 3/8) = {e_sim38:.2} J");
}

//! Free-kick simulation — trajectory and verdict.
//!
//! Steps a kicked ball forward with RK4 until it crosses the goal line or
//! touches the ground, printing one `t x y z vx vy vz` row per step.
//!
//! Run with:
//!   cargo run --example free_kick [launch_speed_m_per_s]

use freekick::{simulate, BallFlight, FreeKick, ShotOutcome};

fn main() {
    env_logger::init();

    // Launch speed can be overridden from the command line
    let mut kick = FreeKick::default();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse() {
            Ok(speed) => kick.speed = speed,
            Err(_) => {
                eprintln!("invalid launch speed {:?}, using {} m/s", arg, kick.speed);
            }
        }
    }

    // Spinning ball, no drag: the classic curling free kick
    let flight = BallFlight::new()
        .with_magnus(true)
        .with_spin([0.0, 0.0, 10.0]);

    let record = match simulate(&flight, &kick, 0.01, 100_000) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("simulation failed: {e}");
            std::process::exit(1);
        }
    };

    for (t, y) in &record.trajectory {
        println!(
            "{:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
            t, y[0], y[1], y[2], y[3], y[4], y[5]
        );
    }

    match record.outcome {
        ShotOutcome::Goal => eprintln!("GOOD SHOT!"),
        ShotOutcome::OverBar => eprintln!("The ball went over the crossbar"),
        ShotOutcome::Short => eprintln!("WEAK SHOT!"),
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freekick::{
    integrate_samples, simulate, BallFlight, FreeKick, NewtonCotes, NewtonPoly, OdeSystem, Rk4,
};

fn bench_free_kick_full_flight(c: &mut Criterion) {
    let flight = BallFlight::new()
        .with_drag(true)
        .with_magnus(true)
        .with_spin([0.0, 0.0, 10.0]);
    let kick = FreeKick::default();

    c.bench_function("free_kick_full_flight", |b| {
        b.iter(|| simulate(black_box(&flight), black_box(&kick), 0.01, 100_000).unwrap())
    });
}

fn bench_rk4_1000_steps(c: &mut Criterion) {
    let flight = BallFlight::new().with_drag(true);
    let y0 = FreeKick::default().initial_state();

    c.bench_function("rk4_1000_steps", |b| {
        b.iter(|| {
            let mut solver = Rk4::new();
            let mut t = 0.0;
            let mut y = y0;
            for _ in 0..1000 {
                let (tn, yn) = solver.step(&flight, t, black_box(&y), 1e-4);
                t = tn;
                y = yn;
            }
            y
        })
    });
}

fn bench_newton_poly_fit_and_eval(c: &mut Criterion) {
    let xi: Vec<f64> = (0..20).map(|i| i as f64 * 0.5).collect();
    let yi: Vec<f64> = xi.iter().map(|&x| (0.3 * x).sin() + 0.01 * x * x).collect();

    c.bench_function("newton_poly_fit_20_nodes", |b| {
        b.iter(|| NewtonPoly::fit(black_box(&xi), black_box(&yi)).unwrap())
    });

    let poly = NewtonPoly::fit(&xi, &yi).unwrap();
    c.bench_function("newton_poly_eval", |b| {
        b.iter(|| poly.eval(black_box(4.37)))
    });
}

fn bench_simpson38_1000_samples(c: &mut Criterion) {
    let h = 1e-3;
    let samples: Vec<f64> = (0..=999).map(|i| (i as f64 * h).sin()).collect();

    c.bench_function("simpson38_1000_samples", |b| {
        b.iter(|| integrate_samples(black_box(&samples), h, NewtonCotes::Simpson38).unwrap())
    });
}

// Keep the RHS itself visible in profiles: a single force evaluation
fn bench_rhs_eval(c: &mut Criterion) {
    let flight = BallFlight::new()
        .with_drag(true)
        .with_magnus(true)
        .with_spin([0.0, 0.0, 10.0]);
    let y = FreeKick::default().initial_state();

    c.bench_function("ball_flight_rhs", |b| {
        b.iter(|| {
            let mut dydt = [0.0; 6];
            flight.rhs(0.0, black_box(&y), &mut dydt);
            dydt
        })
    });
}

criterion_group!(
    benches,
    bench_free_kick_full_flight,
    bench_rk4_1000_steps,
    bench_newton_poly_fit_and_eval,
    bench_simpson38_1000_samples,
    bench_rhs_eval
);
criterion_main!(benches);

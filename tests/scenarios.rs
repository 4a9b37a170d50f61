//! End-to-end checks of the documented classroom scenarios.

use approx::assert_abs_diff_eq;
use std::f64::consts::TAU;
use wavelab::{
    OperationSpec, Sampling, Session, SignalSpec, TimeGrid, WaveParams, apply, evaluate,
};

fn unit(amplitude: f64) -> WaveParams {
    WaveParams::with_amplitude(amplitude)
}

#[test]
fn test_ramp_over_five_point_grid() {
    let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
    let ramp = SignalSpec::Ramp(unit(2.0)).samples(&grid);
    assert_eq!(ramp, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn test_impulse_lands_on_zero() {
    let grid = TimeGrid::from_samples(vec![-0.5, -0.1, 0.0, 0.2, 0.4]).unwrap();
    let impulse = SignalSpec::Impulse(unit(3.0)).samples(&grid);
    assert_eq!(impulse, vec![0.0, 0.0, 3.0, 0.0, 0.0]);
}

#[test]
fn test_step_boundary() {
    let grid = TimeGrid::linspace(-1.0, 1.0, 21).unwrap();
    let step = SignalSpec::Step(unit(1.5)).samples(&grid);
    for (&t, &y) in grid.iter().zip(&step) {
        let expected = if t >= 0.0 { 1.5 } else { 0.0 };
        assert_eq!(y, expected, "t = {t}");
    }
}

#[test]
fn test_unit_sine() {
    let grid = TimeGrid::continuous();
    let sine = SignalSpec::Sine(WaveParams::default()).samples(&grid);
    for (&t, &y) in grid.iter().zip(&sine) {
        assert_abs_diff_eq!(y, (TAU * t).sin(), epsilon = 1e-9);
    }
}

#[test]
fn test_time_reversal_is_involutive() {
    let grid = TimeGrid::discrete(40).unwrap();
    let signal = SignalSpec::Sawtooth(WaveParams::new(1.0, 3.0, 0.0)).generate(&grid);

    let once = apply(&OperationSpec::TimeReversal, &signal, None);
    assert_eq!(once.samples, signal.samples());
    assert_eq!(wavelab::combinators::reverse(&once.grid), grid);
}

#[test]
fn test_time_shift_round_trip() {
    let grid = TimeGrid::linspace(0.0, 1.0, 9).unwrap();
    let signal = SignalSpec::Ramp(unit(1.0)).generate(&grid);
    let shifted = apply(&OperationSpec::TimeShifting(0.5), &signal, None);
    let back = shifted.grid.map_axis(|t| t - 0.5);
    assert_eq!(back, grid);
}

#[test]
fn test_degenerate_scaling_is_constant() {
    let grid = TimeGrid::continuous();
    let spec = SignalSpec::Sine(WaveParams::new(1.0, 2.0, 45.0));
    let signal = spec.generate(&grid);
    let out = apply(&OperationSpec::TimeScaling(1e-12), &signal, None);

    let expected = spec.samples(&TimeGrid::origin())[0];
    assert_eq!(out.samples, vec![expected; grid.len()]);
    assert_eq!(out.grid, grid);
}

#[test]
fn test_binary_ops_commute() {
    let grid = TimeGrid::continuous();
    let a_spec = SignalSpec::Square(WaveParams::new(2.0, 3.0, 30.0));
    let b_spec = SignalSpec::Custom("exp(-t) * cos(10*t)".to_string());
    let a = a_spec.generate(&grid);
    let b = b_spec.generate(&grid);

    for (ab_op, ba_op) in [
        (
            OperationSpec::SignalAddition(b_spec.clone()),
            OperationSpec::SignalAddition(a_spec.clone()),
        ),
        (
            OperationSpec::SignalMultiplication(b_spec.clone()),
            OperationSpec::SignalMultiplication(a_spec.clone()),
        ),
    ] {
        let ab = apply(&ab_op, &a, Some(&b));
        let ba = apply(&ba_op, &b, Some(&a));
        assert_eq!(ab.grid, ba.grid);
        assert_eq!(ab.samples, ba.samples);
    }
}

#[test]
fn test_sandbox_rejects_host_access() {
    let grid = TimeGrid::discrete(10).unwrap();
    for source in [
        "__import__('os')",
        "__import__('os').system('ls')",
        "open('/etc/passwd').read()",
        "globals()",
        "().__class__.__bases__",
    ] {
        assert_eq!(evaluate(source, &grid), vec![0.0; 10], "{source}");
    }
}

#[test]
fn test_session_pipeline() {
    let mut session = Session::default();
    session.sampling = Sampling::Discrete { samples: 11 };
    session.set_custom_expression("heaviside(t - 0.5, 1)");

    let op = OperationSpec::SignalMultiplication(SignalSpec::Ramp(unit(2.0)));
    let out = session.compute(&session.custom_signal(), &op).unwrap();

    let expected: Vec<f64> = out
        .primary
        .grid()
        .iter()
        .map(|&t| if t >= 0.5 { 2.0 * t } else { 0.0 })
        .collect();
    for (y, e) in out.result.samples.iter().zip(&expected) {
        assert_abs_diff_eq!(*y, *e, epsilon = 1e-12);
    }
    assert_eq!(out.secondary.map(|s| s.len()), Some(11));
}

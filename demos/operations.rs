use wavelab::{
    OperationKind, OperationSpec, Sampling, Session, SignalKind, SignalSpec, TransformResult,
    WaveParams,
};

fn print_samples(label: &str, grid: &[f64], samples: &[f64]) {
    println!("{label}");
    for (t, y) in grid.iter().zip(samples).step_by(3).take(6) {
        print!("({t:+.2}, {y:+.3}) ");
    }
    println!("\n");
}

fn print_result(kind: OperationKind, result: &TransformResult) {
    let title = match result.parameter {
        Some(p) => format!("{} {} with {p}", kind, kind.notation()),
        None => format!("{} {}", kind, kind.notation()),
    };
    print_samples(&title, result.grid.as_slice(), &result.samples);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut session = Session::default();
    session.sampling = Sampling::Discrete { samples: 20 };

    // Example 1: Every built-in signal on the same grid
    println!("Example 1: Signal gallery\n");
    let grid = session.grid()?;
    let params = WaveParams::new(1.5, 2.0, 30.0);
    for kind in SignalKind::ALL {
        let spec = SignalSpec::from_kind(kind, params, &session.custom_expression);
        print_samples(kind.label(), grid.as_slice(), &spec.samples(&grid));
    }

    // Example 2: Each operation applied to a sine
    println!("Example 2: Operations on a sine\n");
    let sine = SignalSpec::Sine(params);
    let ramp = SignalSpec::Ramp(WaveParams::with_amplitude(2.0));
    let ops = [
        OperationSpec::TimeScaling(2.0),
        OperationSpec::AmplitudeScaling(0.5),
        OperationSpec::TimeShifting(-1.0),
        OperationSpec::TimeReversal,
        OperationSpec::SignalAddition(ramp.clone()),
        OperationSpec::SignalMultiplication(ramp),
    ];
    for op in &ops {
        let out = session.compute(&sine, op)?;
        print_result(op.kind(), &out.result);
    }

    // Example 3: A custom formula, then an invalid one
    println!("Example 3: Custom formulas\n");
    session.set_custom_expression("t**2 * heaviside(t - 0.5, 1)");
    let out = session.compute(&session.custom_signal(), &OperationSpec::TimeReversal)?;
    print_result(OperationKind::TimeReversal, &out.result);

    session.set_custom_expression("__import__('os').system('ls')");
    let preview = session.preview(&grid);
    print_samples("Rejected formula evaluates to zeros", grid.as_slice(), &preview);

    // Example 4: Degenerate time scaling
    println!("Example 4: Time scaling by a vanishing factor\n");
    let out = session.compute(&sine, &OperationSpec::TimeScaling(0.0))?;
    print_result(OperationKind::TimeScaling, &out.result);

    println!("{}", OperationKind::SignalMultiplication.theory());
    Ok(())
}

//! Basic usage example for bspline-eval

use bspline_eval::prelude::*;

fn main() -> Result<(), SplineError> {
    println!("=== Basic B-spline Evaluation Example ===\n");

    // Example 1: Open spline, n = m - p - 1 control points.
    println!("Open cubic spline:");
    let knots = [0.1, 1.3, 2.2, 2.2, 4.9, 6.3, 6.3, 6.3, 13.2];
    let control_points = [0.1, 1.3, 2.2, 4.9, 13.2];
    let open = BSpline::new(&knots, &control_points, 3, Boundary::Open)?;

    let (lower, upper) = open.domain();
    println!("  domain = [{lower}, {upper})");
    for x in [3.0, 3.4, 5.1, 6.2] {
        println!("  evaluate({:.2}) = {:.6}", x, open.evaluate(x)?);
    }

    // Example 2: Clamped spline, n = m + p - 1 control points.
    println!("\nClamped cubic spline:");
    let knots = [0.0, 1.0, 2.0, 2.5, 3.0];
    let clamped = BSpline::new(
        &knots,
        &[1.0, 4.0, -2.0, 3.0, 5.0, 0.0, 2.0],
        3,
        Boundary::Clamped,
    )?;
    for x in [0.0, 0.5, 1.75, 3.0] {
        println!("  evaluate({:.2}) = {:.6}", x, clamped.evaluate(x)?);
    }

    // Example 3: Periodic spline, n = m - 1 control points.
    println!("\nPeriodic cubic spline:");
    let periodic =
        BSpline::new(&knots, &[1.0, 4.0, -2.0, 3.0], 3, Boundary::Periodic)?;
    println!("  period = {}", periodic.period()?);
    for x in [0.5, 3.5, -2.5, 300.5] {
        println!("  evaluate({:.2}) = {:.6}", x, periodic.evaluate(x)?);
    }

    // Example 4: Batch evaluation.
    println!("\nBatch evaluation:");
    let xs: Vec<f64> = (0..=6).map(|i| 0.5 * i as f64).collect();
    for (x, y) in xs.iter().zip(clamped.evaluate_many(&xs)?) {
        println!("  {x:.2} -> {y:.6}");
    }

    // Example 5: Error handling
    println!("\nError handling:");
    match open.evaluate(10.0) {
        Ok(y) => println!("  Result: {}", y),
        Err(e) => println!("  Error: {}", e),
    }
    match BSpline::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0], 1, Boundary::Open) {
        Ok(_) => println!("  Built"),
        Err(e) => println!("  Error: {}", e),
    }
    match open.period() {
        Ok(period) => println!("  Period: {}", period),
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}

//! Vector-valued control points.
//!
//! Any type that can be added to itself and scaled by the parameter type can
//! be used as a control point; the recursion then runs per component.

use bspline_eval::prelude::*;
use std::ops::{Add, Mul};

#[derive(Clone, Copy, Debug)]
struct Point2D {
    x: f64,
    y: f64,
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point2D {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Point2D {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

fn main() -> Result<(), SplineError> {
    // A closed loop through four points.
    let knots = [0.0, 1.0, 2.0, 3.0, 4.0];
    let control_points = [
        Point2D { x: 1.0, y: 0.0 },
        Point2D { x: 0.0, y: 1.0 },
        Point2D { x: -1.0, y: 0.0 },
        Point2D { x: 0.0, y: -1.0 },
    ];

    let spline = BSpline::new(&knots, &control_points, 3, Boundary::Periodic)?;

    println!("=== Periodic 2D B-spline ===\n");
    println!("uniform knots: {}", spline.is_uniform());
    for i in 0..=16 {
        let t = 0.25 * i as f64;
        let p = spline.evaluate(t)?;
        println!("  t = {:5.2}: ({:+.4}, {:+.4})", t, p.x, p.y);
    }

    Ok(())
}

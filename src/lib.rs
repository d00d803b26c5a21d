#![no_std]
//! B-spline curve evaluation with de Boor's algorithm.
//!
//! Build a [`BSpline`] from a knot vector, control points, a degree and one
//! of three [`Boundary`] treatments, then evaluate it anywhere in its domain:
//!
//! - [`Boundary::Open`]: the knots are used as given; the curve is defined
//!   on `[t[p], t[m - p - 1])` only.
//! - [`Boundary::Clamped`]: the end knots are repeated so the curve starts
//!   at the first and ends at the last control point.
//! - [`Boundary::Periodic`]: knots and control points wrap around; any
//!   parameter is shifted back into the fundamental period.
//!
//! Spans are found by binary search or, if the knots covering the domain are
//! uniformly spaced, by direct indexing. The choice is made once when the
//! spline is built.
//!
//! Control points can be any type that can be linearly blended, e.g. `f64`
//! or a vector type.
//!
//! # Examples
//! ```
//! use bspline_eval::prelude::*;
//!
//! let knots: [f64; 5] = [0.0, 1.0, 2.0, 2.5, 3.0];
//!
//! // Clamped: m + p - 1 control points.
//! let control_points: [f64; 7] = [1.0, 4.0, -2.0, 3.0, 5.0, 0.0, 2.0];
//! let clamped =
//!     BSpline::new(&knots, &control_points, 3, Boundary::Clamped)?;
//! let start: f64 = clamped.evaluate(0.0)?;
//! let end: f64 = clamped.evaluate(3.0)?;
//! assert!((start - 1.0).abs() < 1e-12);
//! assert!((end - 2.0).abs() < 1e-12);
//!
//! // Periodic: m - 1 control points.
//! let control_points: [f64; 4] = [1.0, 4.0, -2.0, 3.0];
//! let periodic =
//!     BSpline::new(&knots, &control_points, 3, Boundary::Periodic)?;
//! assert_eq!(periodic.period()?, 3.0);
//! let y: f64 = periodic.evaluate(0.5)?;
//! assert!((y - periodic.evaluate(30.5)?).abs() < 1e-9);
//! # Ok::<(), SplineError>(())
//! ```
//!
//! # Cargo Features
#![doc = document_features::document_features!()]

extern crate alloc;

pub mod boundary;
pub mod deboor;
pub mod domain;
mod error;
pub mod knots;
mod options;
mod spline;

pub use boundary::{Boundary, ParseBoundaryError};
pub use domain::Domain;
pub use error::{SplineError, SplineResult};
pub use knots::{KnotVector, Spacing};
pub use options::{BuildOptions, Locator};
pub use spline::BSpline;

pub mod prelude {
    pub use crate::{
        BSpline, Boundary, BuildOptions, Locator, SplineError, SplineResult,
    };
}

//! Error types for spline construction and evaluation.

use crate::Boundary;
use thiserror::Error;

/// Errors that can occur during spline operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Fewer knots than any spline of this kind can be built from.
    #[error("{boundary} spline of degree {degree} must have at least {min_knots} knots. Found: {actual}")]
    TooFewKnots {
        boundary: Boundary,
        degree: usize,
        min_knots: usize,
        actual: usize,
    },

    /// Fewer than two control points.
    #[error("a spline must have at least 2 control points. Found: {actual}")]
    TooFewControlPoints { actual: usize },

    /// A knot is `NaN` or infinite.
    #[error("knot {index} is not finite")]
    NonFiniteKnot { index: usize },

    /// The knot vector decreases somewhere.
    #[error("the knot vector is not non-decreasing at index {index}")]
    NonMonotonicKnots { index: usize },

    /// The number of control points does not match the knot count for the
    /// chosen boundary and degree.
    #[error("{boundary} spline of degree {degree} with {knots} knots needs {expected} control points. Found: {actual}")]
    ControlPointCount {
        boundary: Boundary,
        degree: usize,
        knots: usize,
        expected: usize,
        actual: usize,
    },

    /// `t[p] == t[m - p - 1]`; there is nothing to evaluate.
    #[error("the spline domain [{lower}, {upper}] is empty")]
    EmptyDomain { lower: f64, upper: f64 },

    /// The parameter lies outside the support of an open or clamped spline.
    #[error("parameter {x} is outside the spline domain [{lower}, {upper}]")]
    OutOfDomain { x: f64, lower: f64, upper: f64 },

    /// Periodic-only metadata was queried on a non-periodic spline.
    #[error("{boundary} spline has no period")]
    NotPeriodic { boundary: Boundary },
}

impl SplineError {
    /// Returns `true` for errors caused by malformed construction input.
    ///
    /// These are only ever returned when building a spline, never from
    /// evaluation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SplineError::TooFewKnots { .. }
                | SplineError::TooFewControlPoints { .. }
                | SplineError::NonFiniteKnot { .. }
                | SplineError::NonMonotonicKnots { .. }
                | SplineError::ControlPointCount { .. }
                | SplineError::EmptyDomain { .. }
        )
    }
}

/// Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;

//! The [`BSpline`] type.
//!
//! A spline is built once from caller supplied knots, control points, a
//! degree and a [`Boundary`]. Construction validates the input, pads knots
//! and control points for the boundary and picks the span locator. The
//! result is immutable; changing the control points means building a new
//! spline with [`BSpline::with_control_points()`].
use crate::{
    deboor::{basis_functions, de_boor},
    knots::KnotVector,
    Boundary, BuildOptions, SplineError, SplineResult,
};
use alloc::vec::Vec;
use lerp::Lerp;
use log::debug;
use num_traits::Float;

/// A B-spline curve of arbitrary degree.
///
/// `T` is the parameter type (`f32`, `f64`). `C` is the control point type;
/// anything that can be linearly blended with a `T` works, e.g. scalars or
/// vectors.
///
/// # Examples
/// ```
/// use bspline_eval::{BSpline, Boundary};
///
/// let knots: [f64; 9] = [0.1, 1.3, 2.2, 2.2, 4.9, 6.3, 6.3, 6.3, 13.2];
/// let control_points: [f64; 5] = [0.1, 1.3, 2.2, 4.9, 13.2];
///
/// let spline = BSpline::new(&knots, &control_points, 3, Boundary::Open)?;
///
/// assert_eq!(spline.domain(), (2.2, 6.3));
/// let y: f64 = spline.evaluate(3.0)?;
/// assert!((y - 1.147_359_920_051_072_5).abs() < 1e-9);
/// assert!(spline.evaluate(6.3).is_err());
/// # Ok::<(), bspline_eval::SplineError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BSpline<T, C = T> {
    knots: KnotVector<T>,
    control_points: Vec<C>,
}

impl<T, C> BSpline<T, C>
where
    T: Float,
    C: Clone + Lerp<T>,
{
    /// Builds a spline with default [`BuildOptions`].
    ///
    /// The number of control points depends on the boundary (`m` knots,
    /// degree `p`):
    ///
    /// - [`Open`](Boundary::Open): `m - p - 1`
    /// - [`Clamped`](Boundary::Clamped): `m + p - 1`
    /// - [`Periodic`](Boundary::Periodic): `m - 1`
    pub fn new(
        knots: &[T],
        control_points: &[C],
        degree: usize,
        boundary: Boundary,
    ) -> SplineResult<Self> {
        Self::with_options(
            knots,
            control_points,
            degree,
            boundary,
            &BuildOptions::default(),
        )
    }

    /// Builds a spline with explicit [`BuildOptions`].
    pub fn with_options(
        knots: &[T],
        control_points: &[C],
        degree: usize,
        boundary: Boundary,
        options: &BuildOptions<T>,
    ) -> SplineResult<Self> {
        let knots = KnotVector::new(
            knots,
            control_points.len(),
            degree,
            boundary,
            options,
        )
        .inspect_err(|error| debug!("rejected {boundary} spline: {error}"))?;
        let control_points =
            boundary.expand_control_points(control_points, degree);

        debug!(
            "built {boundary} spline: degree {degree}, {} knots, \
             {} control points, uniform: {}",
            knots.len(),
            control_points.len(),
            matches!(knots.spacing(), crate::Spacing::Uniform { .. }),
        );

        Ok(Self {
            knots,
            control_points,
        })
    }

    /// Builds a new spline over the same knots, degree and boundary with
    /// different control points.
    pub fn with_control_points(
        &self,
        control_points: &[C],
    ) -> SplineResult<Self> {
        let boundary = self.boundary();
        let degree = self.degree();
        let base = self.knots.base().len();

        let expected = boundary.control_points_len(base, degree);
        if expected != Some(control_points.len()) {
            return Err(SplineError::ControlPointCount {
                boundary,
                degree,
                knots: base,
                expected: expected.unwrap_or(0),
                actual: control_points.len(),
            });
        }

        Ok(Self {
            knots: self.knots.clone(),
            control_points: boundary
                .expand_control_points(control_points, degree),
        })
    }

    /// Evaluates the spline at `x`.
    ///
    /// - Open splines are defined on `[lower, upper)`.
    /// - Clamped splines are defined on `[lower, upper]`.
    /// - Periodic splines accept any finite `x`; it is shifted into the
    ///   domain by whole periods first.
    ///
    /// Anything else fails with [`SplineError::OutOfDomain`].
    #[inline]
    pub fn evaluate(&self, x: T) -> SplineResult<C> {
        let x = self.parameter(x)?;
        let k = self.knots.find_span(x);
        Ok(de_boor(
            k,
            x,
            self.knots.as_slice(),
            &self.control_points,
            self.degree(),
        ))
    }

    /// Evaluates the spline at every parameter in `xs`.
    ///
    /// Fails on the first parameter outside the domain.
    pub fn evaluate_many(&self, xs: &[T]) -> SplineResult<Vec<C>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Parallel [`evaluate_many()`](Self::evaluate_many).
    #[cfg(feature = "rayon")]
    pub fn par_evaluate_many(&self, xs: &[T]) -> SplineResult<Vec<C>>
    where
        T: Send + Sync,
        C: Send + Sync,
    {
        use rayon::prelude::*;

        xs.par_iter().map(|&x| self.evaluate(x)).collect()
    }

    /// The `p + 1` basis functions that are non-zero at `x`.
    ///
    /// Returns the index of the first affected control point in
    /// [`control_points()`](Self::control_points) together with the values
    /// `N[i, p](x)..=N[i + p, p](x)`.
    pub fn basis(&self, x: T) -> SplineResult<(usize, Vec<T>)> {
        let x = self.parameter(x)?;
        let degree = self.degree();
        let k = self.knots.find_span(x);

        let mut values = alloc::vec![T::zero(); degree + 1];
        basis_functions(k, x, self.knots.as_slice(), degree, &mut values);

        Ok((k - degree, values))
    }

    /// Maps `x` to the parameter actually evaluated, or rejects it.
    #[inline]
    fn parameter(&self, x: T) -> SplineResult<T> {
        let domain = self.knots.domain();
        let inside = match self.boundary() {
            Boundary::Open => domain.contains(x),
            Boundary::Clamped => domain.contains_closed(x),
            Boundary::Periodic if x.is_finite() => {
                return Ok(domain.wrap(x, domain.width()));
            }
            Boundary::Periodic => false,
        };

        if inside {
            Ok(x)
        } else {
            let (lower, upper) = domain.to_f64();
            Err(SplineError::OutOfDomain {
                x: x.to_f64().unwrap_or(f64::NAN),
                lower,
                upper,
            })
        }
    }
}

impl<T: Float, C> BSpline<T, C> {
    /// `(lower, upper)` = `(t[p], t[m - p - 1])` of the augmented knots.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        self.knots.domain().into()
    }

    /// Width of one period.
    ///
    /// Fails with [`SplineError::NotPeriodic`] for open and clamped splines.
    pub fn period(&self) -> SplineResult<T> {
        self.knots.period().ok_or(SplineError::NotPeriodic {
            boundary: self.boundary(),
        })
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.knots.degree()
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.knots.boundary()
    }

    /// The augmented knot vector the spline is evaluated on.
    pub fn knots(&self) -> &KnotVector<T> {
        &self.knots
    }

    /// The augmented control points. For periodic splines the first `p`
    /// control points are repeated at the end.
    pub fn control_points(&self) -> &[C] {
        &self.control_points
    }

    /// `true` if spans are located by direct indexing.
    pub fn is_uniform(&self) -> bool {
        matches!(self.knots.spacing(), crate::Spacing::Uniform { .. })
    }
}

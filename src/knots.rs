//! Knot vectors, their validation and the knot span locators.
//!
//! Naming convention:
//! - `m` → number of knots
//! - `n` → number of control points
//! - `p` → degree of the curve
//! - `t` → knot vector
//!
//! A spline of degree `p` over `m` knots is evaluated on the domain
//! `[t[p], t[m - p - 1]]`. Span `k` is the half-open interval
//! `[t[k], t[k + 1])`; the last span of the domain also owns the upper edge.
use crate::{
    BuildOptions, Boundary, Domain, Locator, SplineError, SplineResult,
};
use alloc::vec::Vec;
use num_traits::{Float, NumCast};

/// How the knots covering the domain are spaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing<T> {
    /// All domain spans have width `step`; spans are located in O(1).
    Uniform { step: T },
    /// Spans are located by binary search.
    NonUniform,
}

/// Checks caller supplied (base) knots against a control point count.
///
/// Fails with one of the invalid-argument variants of [`SplineError`] if
///
/// - there are fewer than 2 knots or control points, or fewer knots than
///   the boundary needs ([`Boundary::min_knots()`]);
/// - a knot is not finite or the knots decrease;
/// - `control_points` is not the count the boundary requires
///   ([`Boundary::control_points_len()`]). For [`Boundary::Open`] this is
///   the defining relation `m = n + p + 1`.
pub fn validate<T: Float>(
    knots: &[T],
    control_points: usize,
    degree: usize,
    boundary: Boundary,
) -> SplineResult<()> {
    let min_knots = boundary.min_knots(degree).max(2);
    if knots.len() < min_knots {
        return Err(SplineError::TooFewKnots {
            boundary,
            degree,
            min_knots,
            actual: knots.len(),
        });
    }

    if control_points < 2 {
        return Err(SplineError::TooFewControlPoints {
            actual: control_points,
        });
    }

    if let Some(index) = knots.iter().position(|t| !t.is_finite()) {
        return Err(SplineError::NonFiniteKnot { index });
    }

    if let Some(index) = knots.windows(2).position(|w| w[1] < w[0]) {
        return Err(SplineError::NonMonotonicKnots { index: index + 1 });
    }

    let expected = boundary.control_points_len(knots.len(), degree);
    if expected != Some(control_points) {
        return Err(SplineError::ControlPointCount {
            boundary,
            degree,
            knots: knots.len(),
            expected: expected.unwrap_or(0),
            actual: control_points,
        });
    }

    Ok(())
}

/// Returns `count` equally spaced knots from `begin` to `end` (inclusive).
///
/// The last knot is exactly `end`.
///
/// # Examples
/// ```
/// use bspline_eval::knots::uniform;
///
/// assert_eq!(uniform(0.0, 2.0, 5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
/// ```
pub fn uniform<T: Float>(begin: T, end: T, count: usize) -> Vec<T> {
    match count {
        0 => Vec::new(),
        1 => alloc::vec![begin],
        _ => {
            let intervals =
                <T as NumCast>::from(count - 1).unwrap_or_else(T::one);
            let step = (end - begin) / intervals;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        let i =
                            <T as NumCast>::from(i).unwrap_or_else(T::zero);
                        begin + step * i
                    }
                })
                .collect()
        }
    }
}

/// Returns the span `k` with `t[k] <= x < t[k + 1]`, searching the spans
/// of the domain only.
///
/// `x == t[m - p - 1]` yields the last span `m - p - 2`. Values outside the
/// domain are clamped to the first/last span; callers check the domain
/// first.
///
/// O(log m). Works for any knot multiplicity.
#[inline]
pub fn find_span<T: Float>(x: T, knots: &[T], degree: usize) -> usize {
    let last = knots.len() - degree - 1;
    // Rightmost insertion point minus one.
    let inserted = knots[degree..last].partition_point(|&t| t <= x);
    degree + inserted.saturating_sub(1)
}

/// [`find_span()`] for knots with (nearly) constant spacing `step` across
/// the domain.
///
/// The candidate `p + ⌊(x - t[p]) / step⌋` is walked against the actual
/// knots until `t[k] <= x < t[k + 1]`, so the result always equals
/// [`find_span()`]. For knots within the default tolerance of an exact
/// grid the walk is at most one span, i.e. O(1).
#[inline]
pub fn find_span_uniform<T: Float>(
    x: T,
    knots: &[T],
    degree: usize,
    step: T,
) -> usize {
    let last = knots.len() - degree - 2;
    let offset = ((x - knots[degree]) / step)
        .floor()
        .to_usize()
        .unwrap_or(0);

    let mut k = degree.saturating_add(offset).min(last);
    while k > degree && x < knots[k] {
        k -= 1;
    }
    while k < last && knots[k + 1] <= x {
        k += 1;
    }
    k
}

/// Detects constant spacing of `knots`, which are the domain knots
/// `t[p..=m - p - 1]`.
fn detect_spacing<T: Float>(knots: &[T], tolerance: T) -> Spacing<T> {
    let spans = knots.len() - 1;
    let count = match <T as NumCast>::from(spans) {
        Some(count) if spans > 0 => count,
        _ => return Spacing::NonUniform,
    };

    let step = (knots[spans] - knots[0]) / count;
    if !(step > T::zero()) {
        return Spacing::NonUniform;
    }

    let limit = tolerance * step;
    if knots
        .windows(2)
        .all(|w| ((w[1] - w[0]) - step).abs() <= limit)
    {
        Spacing::Uniform { step }
    } else {
        Spacing::NonUniform
    }
}

/// A validated, boundary-augmented knot vector.
///
/// Immutable once built. The stored knots are the augmented ones (see
/// [`Boundary`]); [`base()`](KnotVector::base) returns the caller's knots.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector<T> {
    knots: Vec<T>,
    degree: usize,
    boundary: Boundary,
    domain: Domain<T>,
    spacing: Spacing<T>,
}

impl<T: Float> KnotVector<T> {
    /// Validates `knots` for `control_points` control points and builds the
    /// augmented vector.
    pub fn new(
        knots: &[T],
        control_points: usize,
        degree: usize,
        boundary: Boundary,
        options: &BuildOptions<T>,
    ) -> SplineResult<Self> {
        validate(knots, control_points, degree, boundary)?;

        let expanded = boundary.expand_knots(knots, degree);
        debug_assert_eq!(
            boundary.expanded_control_points_len(control_points, degree),
            expanded.len() - degree - 1
        );

        let m = expanded.len();
        let domain = Domain::new(expanded[degree], expanded[m - degree - 1]);
        if !(domain.lower < domain.upper) {
            let (lower, upper) = domain.to_f64();
            return Err(SplineError::EmptyDomain { lower, upper });
        }

        let spacing = match options.locator {
            Locator::Auto => detect_spacing(
                &expanded[degree..m - degree],
                options.uniform_tolerance(),
            ),
            Locator::Binary => Spacing::NonUniform,
        };

        Ok(Self {
            knots: expanded,
            degree,
            boundary,
            domain,
            spacing,
        })
    }

    /// The augmented knots.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.knots
    }

    /// The knots as supplied by the caller, before padding.
    pub fn base(&self) -> &[T] {
        match self.boundary {
            Boundary::Open => &self.knots,
            Boundary::Clamped | Boundary::Periodic => {
                &self.knots[self.degree..self.knots.len() - self.degree]
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    #[inline]
    pub fn domain(&self) -> Domain<T> {
        self.domain
    }

    #[inline]
    pub fn spacing(&self) -> Spacing<T> {
        self.spacing
    }

    /// Width of one period. `None` unless the boundary is periodic.
    #[inline]
    pub fn period(&self) -> Option<T> {
        match self.boundary {
            Boundary::Periodic => Some(self.domain.width()),
            Boundary::Open | Boundary::Clamped => None,
        }
    }

    /// Span containing `x`, dispatching on the spacing detected at
    /// construction.
    #[inline]
    pub fn find_span(&self, x: T) -> usize {
        match self.spacing {
            Spacing::Uniform { step } => {
                find_span_uniform(x, &self.knots, self.degree, step)
            }
            Spacing::NonUniform => find_span(x, &self.knots, self.degree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const KNOTS: [f64; 9] = [0.1, 1.3, 2.2, 2.2, 4.9, 6.3, 6.3, 6.3, 13.2];

    #[test]
    fn validate_accepts_defining_relation() {
        assert!(validate(&KNOTS, 5, 3, Boundary::Open).is_ok());
        assert!(validate(&KNOTS, 9 + 3 - 1, 3, Boundary::Clamped).is_ok());
        assert!(validate(&KNOTS, 8, 3, Boundary::Periodic).is_ok());
    }

    #[test]
    fn validate_rejects_count_mismatch() {
        assert_eq!(
            validate(&KNOTS, 6, 3, Boundary::Open),
            Err(SplineError::ControlPointCount {
                boundary: Boundary::Open,
                degree: 3,
                knots: 9,
                expected: 5,
                actual: 6,
            })
        );
        assert!(validate(&KNOTS, 5, 3, Boundary::Periodic)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn validate_rejects_decreasing_knots() {
        let knots = [0.0, 1.0, 3.0, 2.0, 4.0, 5.0];
        assert_eq!(
            validate(&knots, 2, 3, Boundary::Open),
            Err(SplineError::NonMonotonicKnots { index: 3 })
        );
    }

    #[test]
    fn validate_rejects_short_input() {
        assert!(matches!(
            validate(&[1.0], 2, 0, Boundary::Clamped),
            Err(SplineError::TooFewKnots { actual: 1, .. })
        ));
        assert_eq!(
            validate(&[0.0, 1.0, 2.0], 1, 0, Boundary::Open),
            Err(SplineError::TooFewControlPoints { actual: 1 })
        );
        assert!(matches!(
            validate(&[0.0, 1.0, 2.0], 2, 3, Boundary::Periodic),
            Err(SplineError::TooFewKnots { min_knots: 4, .. })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let knots = [0.0, 1.0, f64::NAN, 3.0, 4.0];
        assert_eq!(
            validate(&knots, 2, 2, Boundary::Open),
            Err(SplineError::NonFiniteKnot { index: 2 })
        );
    }

    #[test]
    fn empty_domain_is_rejected() {
        let knots = [0.0, 1.0, 1.0, 1.0, 2.0];
        let options = BuildOptions::default();
        assert!(matches!(
            KnotVector::new(&knots, 2, 2, Boundary::Open, &options),
            Err(SplineError::EmptyDomain { .. })
        ));
    }

    #[test]
    fn span_containment() {
        let p = 3;
        let last = KNOTS.len() - p - 1;
        let mut x = KNOTS[p];
        while x < KNOTS[last] {
            let k = find_span(x, &KNOTS, p);
            assert!(KNOTS[k] <= x && x < KNOTS[k + 1], "x = {x}, k = {k}");
            x += 0.01;
        }
        assert_eq!(find_span(KNOTS[last], &KNOTS, p), last - 1);
    }

    #[test]
    fn span_skips_repeated_knots() {
        // Rightmost insertion point: x on a repeated knot lands in the span
        // to its right.
        assert_eq!(find_span(2.2, &KNOTS, 3), 3);
        assert_eq!(find_span(4.9, &KNOTS, 3), 4);
    }

    #[test]
    fn uniform_locator_matches_binary_search() {
        let knots = uniform(-1.2f64, 18.298, 25);
        let p = 3;
        let step = knots[1] - knots[0];
        let lower = knots[p];
        let upper = knots[knots.len() - p - 1];

        let samples = 10_000;
        for i in 0..=samples {
            let x = lower + (upper - lower) * i as f64 / samples as f64;
            assert_eq!(
                find_span_uniform(x, &knots, p, step),
                find_span(x, &knots, p),
                "x = {x}"
            );
        }
        // Exactly on every knot.
        for &x in &knots[p..=knots.len() - p - 1] {
            assert_eq!(
                find_span_uniform(x, &knots, p, step),
                find_span(x, &knots, p)
            );
        }
    }

    #[test]
    fn detects_uniform_spacing() {
        let options = BuildOptions::default();
        let knots = uniform(0.0, 1.0, 11);
        let kv =
            KnotVector::new(&knots, 7, 3, Boundary::Open, &options).unwrap();
        assert!(matches!(kv.spacing(), Spacing::Uniform { .. }));

        let kv =
            KnotVector::new(&KNOTS, 5, 3, Boundary::Open, &options).unwrap();
        assert_eq!(kv.spacing(), Spacing::NonUniform);

        // Clamped padding lies outside the domain and does not break
        // uniformity.
        let kv = KnotVector::new(&knots, 13, 3, Boundary::Clamped, &options)
            .unwrap();
        assert!(matches!(kv.spacing(), Spacing::Uniform { .. }));

        let binary = BuildOptions {
            locator: Locator::Binary,
            ..Default::default()
        };
        let kv =
            KnotVector::new(&knots, 7, 3, Boundary::Open, &binary).unwrap();
        assert_eq!(kv.spacing(), Spacing::NonUniform);
    }

    #[test]
    fn loose_uniform_tolerance_still_finds_the_right_span() {
        // Domain spans of 0.6 then 1.4: every span is within 50 % of the
        // mean step 1.0, but knot positions drift by up to two spans.
        let knots = [
            -1.0, 0.0, 0.6, 1.2, 1.8, 2.4, 3.0, 4.4, 5.8, 7.2, 8.6, 10.0, 11.0,
        ];
        let loose = BuildOptions {
            uniform_tolerance: Some(0.5),
            ..Default::default()
        };
        let strict = BuildOptions::default();

        let kv =
            KnotVector::new(&knots, 10, 1, Boundary::Open, &loose).unwrap();
        assert!(matches!(kv.spacing(), Spacing::Uniform { .. }));
        let kv_strict =
            KnotVector::new(&knots, 10, 1, Boundary::Open, &strict).unwrap();
        assert_eq!(kv_strict.spacing(), Spacing::NonUniform);

        assert_eq!(kv.find_span(2.9), 5);
        let mut x = 0.0;
        while x < 10.0 {
            let k = kv.find_span(x);
            assert_eq!(k, find_span(x, kv.as_slice(), 1), "x = {x}");
            assert!(knots[k] <= x && x < knots[k + 1], "x = {x}, k = {k}");
            x += 0.05;
        }
        assert_eq!(kv.find_span(10.0), find_span(10.0, &knots, 1));
    }

    #[test]
    fn base_knots_round_trip() {
        let options = BuildOptions::default();
        let base = [0.0, 1.0, 2.0, 2.5, 3.0];
        for (boundary, n) in [(Boundary::Clamped, 7), (Boundary::Periodic, 4)] {
            let kv = KnotVector::new(&base, n, 3, boundary, &options).unwrap();
            assert_eq!(kv.base(), &base);
            assert_eq!(kv.len(), base.len() + 6);
            assert_eq!(kv.domain(), Domain::new(0.0, 3.0));
        }
        let kv = KnotVector::new(&base, 4, 3, Boundary::Periodic, &options)
            .unwrap();
        assert_eq!(kv.period(), Some(3.0));
        assert_eq!(
            KnotVector::new(&base, 7, 3, Boundary::Clamped, &options)
                .unwrap()
                .period(),
            None
        );
    }

    #[test]
    fn uniform_knots() {
        assert_eq!(uniform(0.0, 2.0, 5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(uniform(1.0f32, 2.0, 1), vec![1.0]);
        assert!(uniform(1.0f32, 2.0, 0).is_empty());
    }
}

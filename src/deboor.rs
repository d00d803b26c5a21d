//! de Boor's algorithm and the B-spline basis functions.
//!
//! Both kernels take the augmented knot vector, a span index `k` from one of
//! the locators and a degree `p`. Knots `t[k - p + 1..=k + p]` and control
//! points `c[k - p..=k]` must exist.
//!
//! A zero-width knot interval in a denominator is treated as contributing no
//! weight (`alpha = 0`) instead of producing `NaN`.
use lerp::Lerp;
use num_traits::Float;
use smallvec::SmallVec;

/// Stack capacity of the work buffers. Higher degrees spill to the heap.
pub(crate) const INLINE_DEGREE: usize = 7;

type Buffer<C> = SmallVec<[C; INLINE_DEGREE + 1]>;

#[inline(always)]
fn ratio<T: Float>(numerator: T, denominator: T) -> T {
    if denominator == T::zero() {
        T::zero()
    } else {
        numerator / denominator
    }
}

/// Evaluates the spline at `x`, which must lie in span `k`.
///
/// Works on a single buffer of `p + 1` control points, blending in place
/// from the highest index down so no value is read after being overwritten.
///
/// # Examples
/// ```
/// use bspline_eval::deboor::de_boor;
///
/// // Degree 1 over knots [0, 1, 2, 3]: a polyline through the control
/// // points on [1, 2].
/// let knots: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let control_points: [f64; 2] = [2.0, 4.0];
/// assert_eq!(de_boor(1, 1.5, &knots, &control_points, 1), 3.0);
/// ```
#[inline]
pub fn de_boor<T, C>(
    k: usize,
    x: T,
    knots: &[T],
    control_points: &[C],
    degree: usize,
) -> C
where
    T: Float,
    C: Clone + Lerp<T>,
{
    let p = degree;
    let mut d: Buffer<C> = control_points[k - p..=k].iter().cloned().collect();

    for r in 1..=p {
        for j in (r..=p).rev() {
            let left = knots[j + k - p];
            let alpha = ratio(x - left, knots[j + 1 + k - r] - left);
            d[j] = Lerp::lerp(d[j - 1].clone(), d[j].clone(), alpha);
        }
    }

    d.swap_remove(p)
}

/// Writes the `p + 1` basis functions that are non-zero on span `k`,
/// `N[k - p, p](x)..=N[k, p](x)`, into `out`.
///
/// The values sum to one inside the domain.
///
/// # Panics
/// If `out.len() != degree + 1`.
pub fn basis_functions<T: Float>(
    k: usize,
    x: T,
    knots: &[T],
    degree: usize,
    out: &mut [T],
) {
    let p = degree;
    assert_eq!(out.len(), p + 1, "basis buffer must hold degree + 1 values");

    let mut left: Buffer<T> = SmallVec::from_elem(T::zero(), p + 1);
    let mut right: Buffer<T> = SmallVec::from_elem(T::zero(), p + 1);

    out[0] = T::one();
    for j in 1..=p {
        left[j] = x - knots[k + 1 - j];
        right[j] = knots[k + j] - x;

        let mut saved = T::zero();
        for r in 0..j {
            let temp = ratio(out[r], right[r + 1] + left[j - r]);
            out[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        out[j] = saved;
    }
}

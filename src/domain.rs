//! The parameter interval a spline is defined on and the periodic wrap.
use num_traits::Float;

/// Parameter range `[lower, upper]` of a spline, i.e. `[t[p], t[m - p - 1]]`
/// on the augmented knot vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: Float> Domain<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// `upper - lower`. For periodic splines this is the period.
    #[inline]
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// `lower <= x < upper`.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        self.lower <= x && x < self.upper
    }

    /// `lower <= x <= upper`.
    #[inline]
    pub fn contains_closed(&self, x: T) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Shifts `x` by whole multiples of `period` into `[lower, upper)`.
    ///
    /// Uses a single floor division so parameters many periods away do not
    /// accumulate rounding error. If rounding still leaves the result outside
    /// the half-open domain it is snapped to `lower`.
    #[inline]
    pub fn wrap(&self, x: T, period: T) -> T {
        let one = T::one();
        let wrapped = if x >= self.upper {
            x - period * (((x - self.upper).abs() / period).floor() + one)
        } else if x < self.lower {
            x + period * (((x - self.lower).abs() / period).floor() + one)
        } else {
            x
        };

        if self.contains(wrapped) {
            wrapped
        } else {
            self.lower
        }
    }

    /// Lossy `f64` view for error reporting.
    pub(crate) fn to_f64(self) -> (f64, f64) {
        (
            self.lower.to_f64().unwrap_or(f64::NAN),
            self.upper.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl<T> From<Domain<T>> for (T, T) {
    fn from(domain: Domain<T>) -> Self {
        (domain.lower, domain.upper)
    }
}

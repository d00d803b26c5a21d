//! Construction-time configuration.
use num_traits::{Float, NumCast};

/// Which interval locator a spline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locator {
    /// Use direct indexing if the domain knots are uniformly spaced, binary
    /// search otherwise.
    #[default]
    Auto,
    /// Always use binary search.
    Binary,
}

/// Options for [`BSpline::with_options()`](crate::BSpline::with_options).
///
/// Fields left at `None` are resolved to type-dependent defaults when the
/// spline is built.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions<T> {
    /// Relative tolerance for the uniform spacing check. Two knot spans
    /// are considered equal if they differ by less than `tolerance × step`.
    pub uniform_tolerance: Option<T>,
    /// Interval location strategy.
    pub locator: Locator,
}

impl<T> Default for BuildOptions<T> {
    fn default() -> Self {
        Self {
            uniform_tolerance: None,
            locator: Locator::Auto,
        }
    }
}

impl<T: Float> BuildOptions<T> {
    pub(crate) fn uniform_tolerance(&self) -> T {
        self.uniform_tolerance.unwrap_or_else(default_tolerance::<T>)
    }
}

// Helper to get the default tolerance based on type size.
pub(crate) fn default_tolerance<T: Float>() -> T {
    let precision = match core::mem::size_of::<T>() {
        2 => 1.0e-3,  // f16
        4 => 1.0e-5,  // f32
        8 => 1.0e-10, // f64
        _ => 1.0e-6,
    };
    <T as NumCast>::from(precision).unwrap_or_else(T::epsilon)
}

//! Boundary treatments and the knot/control point padding they imply.
//!
//! Every boundary kind is turned into an *open* spline over an augmented
//! knot vector and an augmented control point vector at construction time.
//! The locator and the de Boor kernel only ever see the augmented form.
//!
//! Given `m` base knots and degree `p`, with `n` control points:
//!
//! | Boundary   | Base `n`    | Augmented `m` | Augmented `n` |
//! |------------|-------------|---------------|---------------|
//! | `Open`     | `m - p - 1` | `m`           | `m - p - 1`   |
//! | `Clamped`  | `m + p - 1` | `m + 2p`      | `m + p - 1`   |
//! | `Periodic` | `m - 1`     | `m + 2p`      | `m + p - 1`   |
use alloc::vec::Vec;
use core::{fmt, str::FromStr};
use num_traits::Float;
use thiserror::Error;

/// How a spline behaves at the ends of its knot vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Boundary {
    /// No padding. The spline is only defined on `[t[p], t[m - p - 1])`.
    #[default]
    Open,
    /// The first and last knots are repeated `p` times so the curve starts
    /// at the first and ends at the last control point.
    Clamped,
    /// Knots and control points wrap around. Parameters outside the domain
    /// are shifted back by whole periods.
    Periodic,
}

impl Boundary {
    pub const NAME_OPEN: &'static str = "open";
    pub const NAME_CLAMPED: &'static str = "clamped";
    pub const NAME_PERIODIC: &'static str = "periodic";

    /// The lowercase name used by [`Display`](fmt::Display) and
    /// [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Boundary::Open => Self::NAME_OPEN,
            Boundary::Clamped => Self::NAME_CLAMPED,
            Boundary::Periodic => Self::NAME_PERIODIC,
        }
    }

    /// Smallest number of base knots a spline of this kind and `degree`
    /// can be built from.
    pub const fn min_knots(self, degree: usize) -> usize {
        match self {
            // n >= 2 control points with m = n + p + 1.
            Boundary::Open => degree + 3,
            Boundary::Clamped => 2,
            // Both wrap slices need p + 1 knots, and m - 1 >= 2.
            Boundary::Periodic => {
                if degree + 1 > 3 {
                    degree + 1
                } else {
                    3
                }
            }
        }
    }

    /// Number of control points the caller must supply together with
    /// `knots` base knots.
    ///
    /// Returns `None` if `knots` is too small for any count to work.
    pub fn control_points_len(
        self,
        knots: usize,
        degree: usize,
    ) -> Option<usize> {
        match self {
            Boundary::Open => knots.checked_sub(degree + 1),
            Boundary::Clamped => (knots + degree).checked_sub(1),
            Boundary::Periodic => knots.checked_sub(1),
        }
    }

    /// Number of knots the augmented vector has for `knots` base knots.
    pub const fn expanded_knots_len(
        self,
        knots: usize,
        degree: usize,
    ) -> usize {
        match self {
            Boundary::Open => knots,
            Boundary::Clamped | Boundary::Periodic => knots + 2 * degree,
        }
    }

    /// Number of control points the augmented vector has for
    /// `control_points` base control points.
    pub const fn expanded_control_points_len(
        self,
        control_points: usize,
        degree: usize,
    ) -> usize {
        match self {
            Boundary::Open | Boundary::Clamped => control_points,
            Boundary::Periodic => control_points + degree,
        }
    }

    /// Builds the augmented knot vector.
    ///
    /// `knots` must already be validated for this boundary (see
    /// [`validate()`](crate::knots::validate)).
    pub fn expand_knots<T: Float>(self, knots: &[T], degree: usize) -> Vec<T> {
        let m = knots.len();
        let mut expanded =
            Vec::with_capacity(self.expanded_knots_len(m, degree));

        match self {
            Boundary::Open => expanded.extend_from_slice(knots),
            Boundary::Clamped => {
                expanded.extend(core::iter::repeat(knots[0]).take(degree));
                expanded.extend_from_slice(knots);
                expanded.extend(core::iter::repeat(knots[m - 1]).take(degree));
            }
            Boundary::Periodic => {
                let period = knots[m - 1] - knots[0];
                let head = &knots[m - degree - 1..m - 1];
                let tail = &knots[1..degree + 1];
                expanded.extend(head.iter().map(|&t| t - period));
                expanded.extend_from_slice(knots);
                expanded.extend(tail.iter().map(|&t| t + period));
            }
        }

        expanded
    }

    /// Builds the augmented control point vector.
    pub fn expand_control_points<C: Clone>(
        self,
        control_points: &[C],
        degree: usize,
    ) -> Vec<C> {
        match self {
            Boundary::Open | Boundary::Clamped => control_points.to_vec(),
            Boundary::Periodic => {
                let mut expanded = Vec::with_capacity(self
                    .expanded_control_points_len(control_points.len(), degree));
                expanded.extend_from_slice(control_points);
                expanded.extend_from_slice(&control_points[..degree]);
                expanded
            }
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown boundary name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown boundary kind, expected one of `open`, `clamped` or `periodic`"
)]
pub struct ParseBoundaryError;

impl FromStr for Boundary {
    type Err = ParseBoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(Self::NAME_OPEN) {
            Ok(Boundary::Open)
        } else if s.eq_ignore_ascii_case(Self::NAME_CLAMPED) {
            Ok(Boundary::Clamped)
        } else if s.eq_ignore_ascii_case(Self::NAME_PERIODIC) {
            Ok(Boundary::Periodic)
        } else {
            Err(ParseBoundaryError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    #[test]
    fn clamped_repeats_end_knots() {
        let knots = [0.0, 1.0, 2.0, 2.5, 3.0];
        let expanded = Boundary::Clamped.expand_knots(&knots, 3);
        assert_eq!(
            expanded,
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 2.5, 3.0, 3.0, 3.0, 3.0]
        );
    }

    #[test]
    fn periodic_wraps_knots_by_one_period() {
        let knots = [0.0, 1.0, 2.0, 2.5, 3.0];
        let expanded = Boundary::Periodic.expand_knots(&knots, 3);
        assert_eq!(
            expanded,
            vec![-2.0, -1.0, -0.5, 0.0, 1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 5.5]
        );
    }

    #[test]
    fn periodic_repeats_leading_control_points() {
        let cps = [1.0, 4.0, -2.0, 3.0];
        let expanded = Boundary::Periodic.expand_control_points(&cps, 3);
        assert_eq!(expanded, vec![1.0, 4.0, -2.0, 3.0, 1.0, 4.0, -2.0]);
    }

    #[test]
    fn open_is_untouched() {
        let knots = [0.1, 1.3, 2.2, 2.2, 4.9, 6.3, 6.3, 6.3, 13.2];
        assert_eq!(Boundary::Open.expand_knots(&knots, 3), knots.to_vec());
        let cps = [0.1, 1.3, 2.2, 4.9, 13.2];
        assert_eq!(
            Boundary::Open.expand_control_points(&cps, 3),
            cps.to_vec()
        );
    }

    #[test]
    fn expansion_satisfies_defining_relation() {
        let knots = [0.0, 0.5, 1.25, 2.0, 3.5, 4.0, 5.0];
        for degree in 0..=4 {
            for boundary in
                [Boundary::Open, Boundary::Clamped, Boundary::Periodic]
            {
                let Some(n) = boundary.control_points_len(knots.len(), degree)
                else {
                    continue;
                };
                if knots.len() < boundary.min_knots(degree) {
                    continue;
                }
                let cps = vec![0.0; n];
                let t = boundary.expand_knots(&knots, degree);
                let c = boundary.expand_control_points(&cps, degree);
                assert_eq!(
                    c.len(),
                    t.len() - degree - 1,
                    "{boundary} p = {degree}"
                );
            }
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("open".parse(), Ok(Boundary::Open));
        assert_eq!("Clamped".parse(), Ok(Boundary::Clamped));
        assert_eq!("PERIODIC".parse(), Ok(Boundary::Periodic));
        assert_eq!("natural".parse::<Boundary>(), Err(ParseBoundaryError));
        assert_eq!(Boundary::Periodic.to_string(), "periodic");
    }
}

// Copyright 2026 the Quire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{Add, Sub};

/// A length with minimum, optimum and maximum extents.
///
/// This is the glue value of the composition engine: a `FlexLength` describes
/// how far a piece of inline content may legally shrink below or stretch
/// beyond its optimum extent during justification. Components are expressed
/// in millipoints (1/1000 pt) and always satisfy `min <= opt <= max`.
///
/// Values are plain `Copy` data; every operation produces a fresh value and
/// never mutates its operands.
///
/// ## Example
///
/// ```
/// use quire_primitives::FlexLength;
///
/// let word = FlexLength::fixed(12_000);
/// let space = FlexLength::new(2_500, 3_333, 5_000).unwrap();
/// let total = word + space;
/// assert_eq!(total.opt(), 15_333);
/// assert_eq!(total.shrink(), 833);
/// assert_eq!(total.stretch(), 1_667);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FlexLength {
    min: i32,
    opt: i32,
    max: i32,
}

impl FlexLength {
    /// The zero-extent, fully rigid length.
    pub const ZERO: Self = Self::fixed(0);

    /// Returns a validated `FlexLength`.
    ///
    /// This is the only constructor that accepts three independent
    /// components; it rejects any triple violating `min <= opt <= max`.
    #[inline]
    pub fn new(min: i32, opt: i32, max: i32) -> Result<Self, FlexLengthError> {
        if min > opt || max < opt {
            return Err(FlexLengthError::InvalidRange { min, opt, max });
        }
        Ok(Self { min, opt, max })
    }

    /// Returns a rigid length with all three components equal to `value`.
    #[must_use]
    #[inline]
    pub const fn fixed(value: i32) -> Self {
        Self {
            min: value,
            opt: value,
            max: value,
        }
    }

    /// The minimum extent.
    #[must_use]
    #[inline]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// The optimum extent.
    #[must_use]
    #[inline]
    pub const fn opt(self) -> i32 {
        self.opt
    }

    /// The maximum extent.
    #[must_use]
    #[inline]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// How far this length may shrink below its optimum (`opt - min`).
    #[must_use]
    #[inline]
    pub const fn shrink(self) -> i32 {
        self.opt - self.min
    }

    /// How far this length may stretch beyond its optimum (`max - opt`).
    #[must_use]
    #[inline]
    pub const fn stretch(self) -> i32 {
        self.max - self.opt
    }

    /// Subtracts another length, componentwise.
    ///
    /// Fails with [`FlexLengthError::IncompatibleSubtraction`] unless `self`
    /// offers at least as much shrink and stretch as `other`. Removing a
    /// sub-glue from a compound glue must never yield a result that demands
    /// more elasticity than the compound had.
    #[inline]
    pub fn try_sub(self, other: Self) -> Result<Self, FlexLengthError> {
        if self.shrink() < other.shrink() || self.stretch() < other.stretch() {
            return Err(FlexLengthError::IncompatibleSubtraction {
                minuend: self,
                subtrahend: other,
            });
        }
        Ok(Self {
            min: self.min - other.min,
            opt: self.opt - other.opt,
            max: self.max - other.max,
        })
    }

    /// Multiplies all three components by a non-negative integer factor.
    ///
    /// Scaling by exactly `1` returns `self` unchanged.
    #[inline]
    pub fn scale(self, factor: i32) -> Result<Self, FlexLengthError> {
        if factor < 0 {
            return Err(FlexLengthError::NegativeFactor { factor });
        }
        if factor == 1 {
            return Ok(self);
        }
        Ok(Self {
            min: self.min * factor,
            opt: self.opt * factor,
            max: self.max * factor,
        })
    }

    /// Raises the minimum extent to `new_min`, widening monotonically.
    ///
    /// If `new_min` exceeds the current minimum, the optimum and maximum are
    /// lifted just enough to keep the component order intact; otherwise
    /// `self` is returned unchanged.
    #[must_use]
    #[inline]
    pub fn extend_minimum(self, new_min: i32) -> Self {
        if new_min <= self.min {
            return self;
        }
        let opt = if self.opt > new_min { self.opt } else { new_min };
        let max = if self.max > opt { self.max } else { opt };
        Self {
            min: new_min,
            opt,
            max,
        }
    }

    /// Whether this length permits no adjustment at all (`min == max`).
    #[must_use]
    #[inline]
    pub const fn is_stiff(self) -> bool {
        self.min == self.max
    }

    /// Whether this length permits any shrink or stretch.
    #[must_use]
    #[inline]
    pub const fn is_elastic(self) -> bool {
        !self.is_stiff()
    }

    /// Whether the minimum or maximum extent is non-zero.
    ///
    /// The optimum is deliberately not consulted: a length with
    /// `min == max == 0` reports `false` even when its optimum is non-zero.
    /// Callers depend on this truth table; do not "fix" it.
    #[must_use]
    #[inline]
    pub const fn is_non_zero(self) -> bool {
        self.min != 0 || self.max != 0
    }
}

impl Add for FlexLength {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // Componentwise sums of two ordered triples stay ordered.
        Self {
            min: self.min + rhs.min,
            opt: self.opt + rhs.opt,
            max: self.max + rhs.max,
        }
    }
}

impl Add<i32> for FlexLength {
    type Output = Self;

    #[inline]
    fn add(self, rhs: i32) -> Self {
        Self {
            min: self.min + rhs,
            opt: self.opt + rhs,
            max: self.max + rhs,
        }
    }
}

impl Sub<i32> for FlexLength {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: i32) -> Self {
        Self {
            min: self.min - rhs,
            opt: self.opt - rhs,
            max: self.max - rhs,
        }
    }
}

/// Error produced by fallible [`FlexLength`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlexLengthError {
    /// A constructor was given components violating `min <= opt <= max`.
    InvalidRange {
        /// The offending minimum.
        min: i32,
        /// The offending optimum.
        opt: i32,
        /// The offending maximum.
        max: i32,
    },
    /// The subtrahend offered more shrink or stretch than the minuend.
    IncompatibleSubtraction {
        /// The length subtracted from.
        minuend: FlexLength,
        /// The length being subtracted.
        subtrahend: FlexLength,
    },
    /// A scale factor below zero.
    NegativeFactor {
        /// The offending factor.
        factor: i32,
    },
}

impl fmt::Display for FlexLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidRange { min, opt, max } => {
                write!(f, "invalid flex range: min {min}, opt {opt}, max {max}")
            }
            Self::IncompatibleSubtraction {
                minuend,
                subtrahend,
            } => {
                write!(
                    f,
                    "cannot subtract {subtrahend:?} from {minuend:?}: \
                     subtrahend is more elastic than minuend"
                )
            }
            Self::NegativeFactor { factor } => {
                write!(f, "negative scale factor {factor}")
            }
        }
    }
}

impl core::error::Error for FlexLengthError {}

#[cfg(test)]
mod tests {
    use super::{FlexLength, FlexLengthError};

    #[test]
    fn validates_component_order() {
        let flex = FlexLength::new(5, 10, 20).unwrap();
        assert_eq!(flex.shrink(), 5);
        assert_eq!(flex.stretch(), 10);
        assert!(flex.is_elastic());
        assert!(!flex.is_stiff());

        assert_eq!(
            FlexLength::new(11, 10, 20),
            Err(FlexLengthError::InvalidRange {
                min: 11,
                opt: 10,
                max: 20,
            })
        );
        assert_eq!(
            FlexLength::new(5, 10, 9),
            Err(FlexLengthError::InvalidRange {
                min: 5,
                opt: 10,
                max: 9,
            })
        );
    }

    #[test]
    fn fixed_is_stiff() {
        let fixed = FlexLength::fixed(7);
        assert!(fixed.is_stiff());
        assert!(!fixed.is_elastic());
        assert!(fixed.is_non_zero());
        assert!(!FlexLength::fixed(0).is_non_zero());
    }

    #[test]
    fn non_zero_ignores_opt() {
        // min == max == 0 with a non-zero opt cannot be built through `new`,
        // which is exactly why the predicate only consults min and max.
        let flex = FlexLength::new(0, 0, 0).unwrap();
        assert!(!flex.is_non_zero());
        assert!(FlexLength::new(0, 0, 1).unwrap().is_non_zero());
        assert!(FlexLength::new(-1, 0, 0).unwrap().is_non_zero());
    }

    #[test]
    fn addition_is_componentwise() {
        let a = FlexLength::new(5, 10, 20).unwrap();
        let b = FlexLength::new(1, 2, 3).unwrap();
        assert_eq!(a + b, FlexLength::new(6, 12, 23).unwrap());
        assert_eq!(a + 4, FlexLength::new(9, 14, 24).unwrap());
        assert_eq!(a - 4, FlexLength::new(1, 6, 16).unwrap());
    }

    #[test]
    fn subtraction_round_trips_through_addition() {
        let a = FlexLength::new(5, 10, 20).unwrap();
        let b = FlexLength::new(1, 2, 3).unwrap();
        // add(a, b) always offers at least b's elasticity, so the
        // subtraction is defined and undoes the addition.
        assert_eq!((a + b).try_sub(b), Ok(a));
        assert_eq!((b + a).try_sub(a), Ok(b));
    }

    #[test]
    fn rejects_subtrahend_with_more_elasticity() {
        let stiff = FlexLength::fixed(100);
        let elastic = FlexLength::new(5, 10, 20).unwrap();
        assert_eq!(
            stiff.try_sub(elastic),
            Err(FlexLengthError::IncompatibleSubtraction {
                minuend: stiff,
                subtrahend: elastic,
            })
        );
        // Scalar subtraction carries no such restriction.
        assert_eq!(elastic - 100, FlexLength::new(-95, -90, -80).unwrap());
    }

    #[test]
    fn scaling() {
        let flex = FlexLength::new(5, 10, 20).unwrap();
        assert_eq!(flex.scale(2), Ok(FlexLength::new(10, 20, 40).unwrap()));
        assert_eq!(flex.scale(0), Ok(FlexLength::ZERO));
        assert_eq!(flex.scale(1), Ok(flex));
        assert_eq!(
            flex.scale(-1),
            Err(FlexLengthError::NegativeFactor { factor: -1 })
        );
    }

    #[test]
    fn extend_minimum_widens_monotonically() {
        let flex = FlexLength::new(5, 10, 20).unwrap();
        // A floor at or below the current minimum changes nothing.
        assert_eq!(flex.extend_minimum(5), flex);
        assert_eq!(flex.extend_minimum(0), flex);
        // A floor between min and opt leaves opt and max alone.
        assert_eq!(flex.extend_minimum(8), FlexLength::new(8, 10, 20).unwrap());
        // A floor above opt lifts opt; above max lifts both.
        assert_eq!(
            flex.extend_minimum(15),
            FlexLength::new(15, 15, 20).unwrap()
        );
        assert_eq!(
            flex.extend_minimum(25),
            FlexLength::new(25, 25, 25).unwrap()
        );
    }

    #[test]
    fn zero_is_the_additive_identity() {
        let flex = FlexLength::new(5, 10, 20).unwrap();
        assert_eq!(flex + FlexLength::ZERO, flex);
        assert_eq!(FlexLength::ZERO + flex, flex);
    }
}

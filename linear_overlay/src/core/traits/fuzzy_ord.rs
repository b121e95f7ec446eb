use super::FuzzyEq;
use std::cmp::Ordering;

pub trait FuzzyOrd: FuzzyEq + PartialOrd {
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;
    /// Fuzzy greater than.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;
    /// Fuzzy less than.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` is in range between `min` and `max` with some epsilon for fuzzy comparing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linear_overlay::core::traits::*;
    /// assert!(0.99f64.fuzzy_in_range_eps(1.0, 2.0, 0.05));
    /// assert!(1.5f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    /// assert!(!2.1f64.fuzzy_in_range_eps(1.0, 2.0, 1e-5));
    ///```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// Same as [FuzzyOrd::fuzzy_in_range_eps] using a default epsilon.
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }

    /// Total ordering where values within `fuzzy_epsilon` of each other are [Ordering::Equal].
    ///
    /// Note this is not transitive for chains of values closer than epsilon, it is only meant for
    /// sorting values that are either fuzzy equal or clearly apart.
    ///
    /// ```
    /// # use linear_overlay::core::traits::*;
    /// # use std::cmp::Ordering;
    /// assert_eq!(1.0f64.fuzzy_cmp_eps(1.0 + 1e-9, 1e-8), Ordering::Equal);
    /// assert_eq!(1.0f64.fuzzy_cmp_eps(2.0, 1e-8), Ordering::Less);
    /// ```
    #[inline]
    fn fuzzy_cmp_eps(&self, other: Self, fuzzy_epsilon: Self) -> Ordering {
        if self.fuzzy_eq_eps(other, fuzzy_epsilon) {
            Ordering::Equal
        } else if *self < other {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);

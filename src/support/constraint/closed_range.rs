use std::{cmp::Ordering, marker::PhantomData};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the inclusive bounds of a [`ClosedRange`].
///
/// Implement this trait on a zero-sized type to declare a new range.
/// Implementations should ensure that `min() ≤ max()` under the type's
/// `PartialOrd` so the range is well-formed.
pub trait RangeLimits<T: PartialOrd> {
    fn min() -> T;
    fn max() -> T;
}

/// Marker type enforcing that a value lies in a closed range: `min ≤ x ≤ max`.
///
/// Infinite values always fall outside a finite range, and `NaN` is reported
/// as [`ConstraintError::NotANumber`], so a constrained float is also finite.
///
/// # Examples
///
/// ```
/// use trace_hydraulics::support::constraint::{ClosedRange, Constrained, RangeLimits};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Percent;
///
/// impl RangeLimits<f64> for Percent {
///     fn min() -> f64 { 0.0 }
///     fn max() -> f64 { 100.0 }
/// }
///
/// let p = Constrained::<f64, ClosedRange<Percent>>::new(42.0).unwrap();
/// assert_eq!(p.into_inner(), 42.0);
///
/// assert!(ClosedRange::<Percent>::new(100.5).is_err());
/// assert!(ClosedRange::<Percent>::new(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClosedRange<L> {
    _limits: PhantomData<L>,
}

impl<L> ClosedRange<L> {
    /// Constructs `Constrained<T, ClosedRange<L>>` if `min ≤ value ≤ max`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than the lower bound.
    /// - [`ConstraintError::AboveMaximum`] if greater than the upper bound.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T>(value: T) -> Result<Constrained<T, ClosedRange<L>>, ConstraintError>
    where
        T: PartialOrd,
        L: RangeLimits<T>,
    {
        Constrained::<T, ClosedRange<L>>::new(value)
    }
}

impl<T: PartialOrd, L: RangeLimits<T>> Constraint<T> for ClosedRange<L> {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&L::min()), value.partial_cmp(&L::max())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

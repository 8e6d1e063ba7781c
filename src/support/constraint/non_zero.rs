use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero.
///
/// The conductivity correlations for nickel electrodes and KOH electrolyte can
/// take either sign over their fitted range, but a zero conductivity leaves
/// the series resistance undefined.
///
/// # Examples
///
/// ```
/// use twine_hydrogen::support::constraint::{Constrained, NonZero};
///
/// let sigma = Constrained::<_, NonZero>::new(1.3).unwrap();
/// assert_eq!(sigma.into_inner(), 1.3);
///
/// assert!(NonZero::new(-4.2e7).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conductivities() {
        assert!(NonZero::check(&1.3_f64).is_ok());
        assert!(NonZero::check(&-4.2e7_f64).is_ok());
        assert_eq!(NonZero::check(&0.0_f64), Err(ConstraintError::Zero));
        assert_eq!(NonZero::check(&-0.0_f64), Err(ConstraintError::Zero));
        assert_eq!(NonZero::check(&f64::NAN), Err(ConstraintError::NotANumber));
    }
}

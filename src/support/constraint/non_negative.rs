use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Operating currents, parasitic currents and hydrogen inventories carry this
/// constraint: zero is a meaningful state (an idle stack, an empty tank).
///
/// # Examples
///
/// ```
/// use twine_hydrogen::support::constraint::{Constrained, NonNegative};
/// use uom::si::{electric_current::ampere, f64::ElectricCurrent};
///
/// let idle = NonNegative::new(ElectricCurrent::new::<ampere>(0.0)).unwrap();
/// assert_eq!(idle.into_inner().get::<ampere>(), 0.0);
///
/// let loss = Constrained::<_, NonNegative>::new(0.25).unwrap();
/// assert_eq!(loss.into_inner(), 0.25);
///
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        amount_of_substance::mole, electric_current::ampere, f64::AmountOfSubstance,
        f64::ElectricCurrent,
    };

    #[test]
    fn currents() {
        assert!(NonNegative::new(ElectricCurrent::new::<ampere>(10.0)).is_ok());
        assert!(NonNegative::new(ElectricCurrent::new::<ampere>(0.0)).is_ok());
        assert_eq!(
            NonNegative::new(ElectricCurrent::new::<ampere>(-0.1)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn inventories() {
        let empty = NonNegative::zero::<AmountOfSubstance>();
        assert_eq!(empty.into_inner().get::<mole>(), 0.0);

        assert_eq!(
            NonNegative::new(AmountOfSubstance::new::<mole>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}

//! Limb comparisons

use crate::{ConstChoice, Limb};
use subtle::{Choice, ConstantTimeEq};

impl Limb {
    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> ConstChoice {
        self.is_nonzero().not()
    }

    /// Returns the truthy value if `self != 0` and the falsy value
    /// otherwise.
    #[inline]
    #[must_use]
    pub const fn is_nonzero(&self) -> ConstChoice {
        ConstChoice::from_word_nonzero(self.0)
    }

    /// Performs an equality check in variable-time.
    #[must_use]
    pub const fn eq_vartime(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        ConstChoice::from_word_eq(self.0, other.0).into()
    }
}

impl Eq for Limb {}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;
    use subtle::ConstantTimeEq;

    #[test]
    fn is_zero() {
        assert!(bool::from(Limb::ZERO.is_zero()));
        assert!(!bool::from(Limb::ONE.is_zero()));
        assert!(!bool::from(Limb::MAX.is_zero()));
    }

    #[test]
    fn ct_eq() {
        let a = Limb::ZERO;
        let b = Limb::MAX;

        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
        assert!(!bool::from(b.ct_eq(&a)));
        assert!(bool::from(b.ct_eq(&b)));
    }
}

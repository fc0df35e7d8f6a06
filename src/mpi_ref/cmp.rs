//! [`MpiRef`] comparisons.

use super::MpiRef;
use crate::Limb;

impl MpiRef {
    /// Compare this value against a single limb, in variable time.
    ///
    /// Returns `0` if the value equals `rhs`, the raw signed difference
    /// `self[0] - rhs` if all higher limbs are zero, and the constant `1`
    /// ("greater") whenever any higher limb is non-zero — regardless of the
    /// true magnitude of the difference.
    ///
    /// WARNING: this is *not* constant-time and the "greater" result is not
    /// a numeric difference. It is intended for public or known
    /// single-limb-significant operands only; do not apply it to secret
    /// multi-limb values.
    ///
    /// # Panics
    /// If `self` is empty.
    #[must_use]
    pub fn cmp_limb_vartime(&self, rhs: Limb) -> i128 {
        assert!(!self.0.is_empty(), "cmp_limb_vartime on empty value");
        let mut all_zero = true;
        let mut i = 1;
        while i < self.0.len() {
            all_zero &= self.0[i].eq_vartime(&Limb::ZERO);
            i += 1;
        }

        if all_zero {
            self.0[0].0 as i128 - rhs.0 as i128
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, MpiRef};

    #[test]
    fn equal_single_limb() {
        let w = [Limb(5), Limb::ZERO, Limb::ZERO];
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb(5)), 0);
    }

    #[test]
    fn greater_single_limb() {
        let w = [Limb(9), Limb::ZERO];
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb(5)), 4);
    }

    #[test]
    fn less_single_limb() {
        let w = [Limb(3), Limb::ZERO];
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb(5)), -2);
    }

    #[test]
    fn nonzero_high_limb_is_always_greater() {
        // The loose contract: any non-zero higher limb yields 1, even when
        // the low limb is smaller than the scalar.
        let w = [Limb::ZERO, Limb::ONE];
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb::MAX), 1);

        let w = [Limb::MAX, Limb::MAX];
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb::ZERO), 1);
    }

    #[test]
    fn single_limb_value() {
        let w = [Limb(7)];
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb(7)), 0);
        assert_eq!(MpiRef::new(&w).cmp_limb_vartime(Limb(9)), -2);
    }
}

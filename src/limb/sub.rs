//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow.
    ///
    /// The borrow is a full-width mask: [`Limb::MAX`] on underflow,
    /// [`Limb::ZERO`] otherwise.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping
    /// around the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Perform wrapping (two's complement) negation.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Limb(self.0.wrapping_neg())
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = Limb::ONE.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res, Limb::MAX);
        assert_eq!(borrow, Limb::MAX);
    }

    #[test]
    fn wrapping_sub_with_borrow() {
        assert_eq!(Limb::ZERO.wrapping_sub(Limb::ONE), Limb::MAX);
    }

    #[test]
    fn wrapping_neg() {
        assert_eq!(Limb::ZERO.wrapping_neg(), Limb::ZERO);
        assert_eq!(Limb::ONE.wrapping_neg(), Limb::MAX);
    }
}

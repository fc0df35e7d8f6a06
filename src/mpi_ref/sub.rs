//! [`MpiRef`] subtraction.

use super::MpiRef;
use crate::{ConstChoice, Limb};

impl MpiRef {
    /// Perform an in-place borrowing subtraction of another [`MpiRef`],
    /// returning the borrowed limb value.
    ///
    /// The returned borrow is a full-width mask: [`Limb::MAX`] if the
    /// subtraction underflowed, [`Limb::ZERO`] otherwise. It can be adopted
    /// directly as the enable flag of a follow-up conditional operation via
    /// [`ConstChoice::from_word_mask`].
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn borrowing_sub_assign(&mut self, rhs: &Self, mut borrow: Limb) -> Limb {
        assert!(
            self.0.len() == rhs.0.len(),
            "length mismatch in borrowing_sub_assign"
        );
        let mut i = 0;
        while i < self.0.len() {
            (self.0[i], borrow) = self.0[i].borrowing_sub(rhs.0[i], borrow);
            i += 1;
        }
        borrow
    }

    /// Compute `self - rhs` in place if `choice` is truthy, otherwise leave
    /// `self` unchanged. Returns the borrow-out limb as a full-width mask.
    ///
    /// Both per-limb underflow conditions are evaluated unconditionally
    /// inside the word-level primitive on every iteration; nothing
    /// short-circuits on the flag or on the borrow history.
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn conditional_borrowing_sub_assign(
        &mut self,
        rhs: &Self,
        choice: ConstChoice,
    ) -> Limb {
        assert!(
            self.0.len() == rhs.0.len(),
            "length mismatch in conditional_borrowing_sub_assign"
        );
        let mut borrow = Limb::ZERO;
        let mut i = 0;
        while i < self.0.len() {
            let subtrahend = Limb::select(Limb::ZERO, rhs.0[i], choice);
            (self.0[i], borrow) = self.0[i].borrowing_sub(subtrahend, borrow);
            i += 1;
        }
        borrow
    }
}

//! [`MpiRef`] addition.

use super::MpiRef;
use crate::{ConstChoice, Limb};

impl MpiRef {
    /// Perform an in-place carrying add of another [`MpiRef`], returning the
    /// carried limb value.
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn carrying_add_assign(&mut self, rhs: &Self, mut carry: Limb) -> Limb {
        assert!(
            self.0.len() == rhs.0.len(),
            "length mismatch in carrying_add_assign"
        );
        let mut i = 0;
        while i < self.0.len() {
            (self.0[i], carry) = self.0[i].carrying_add(rhs.0[i], carry);
            i += 1;
        }
        carry
    }

    /// Compute `self + rhs` in place if `choice` is truthy, otherwise leave
    /// `self` unchanged. Returns the carry-out limb (0 or 1).
    ///
    /// The full carry chain is walked in both cases: with a falsy `choice`
    /// the masked addend is zero in every position and all carries collapse
    /// to zero, but the same word operations still execute.
    ///
    /// The carry of a prior sweep can be fed back in as the `choice` of a
    /// later one (see [`ConstChoice::from_word_mask`] and
    /// [`ConstChoice::from_word_lsb`]) to chain hidden outcomes without
    /// branching.
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn conditional_carrying_add_assign(
        &mut self,
        rhs: &Self,
        choice: ConstChoice,
    ) -> Limb {
        assert!(
            self.0.len() == rhs.0.len(),
            "length mismatch in conditional_carrying_add_assign"
        );
        let mut carry = Limb::ZERO;
        let mut i = 0;
        while i < self.0.len() {
            let addend = Limb::select(Limb::ZERO, rhs.0[i], choice);
            (self.0[i], carry) = self.0[i].carrying_add(addend, carry);
            i += 1;
        }
        carry
    }
}

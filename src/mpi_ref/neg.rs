//! [`MpiRef`] conditional negation (absolute value support).

use super::MpiRef;
use crate::{ConstChoice, Limb, Word};

impl MpiRef {
    /// Replace `self` with its two's complement negation if `choice` is
    /// truthy, otherwise leave it unchanged.
    ///
    /// Each limb is complemented and a carry chain adds the "+1" of the
    /// negation. The chain is seeded with the enable flag itself, so the
    /// increment applies exactly when negation is requested, and each output
    /// limb is blended between the original and negated value in a single
    /// sweep. The carry chain runs for both flag values.
    ///
    /// Combined with a sign test this implements a conditional absolute
    /// value over a sign-magnitude representation.
    #[inline]
    pub const fn conditional_wrapping_neg_assign(&mut self, choice: ConstChoice) {
        let mut carry = Limb(choice.to_u8() as Word);
        let mut i = 0;
        while i < self.0.len() {
            let u = self.0[i];
            let (x, c) = u.not().overflowing_add(carry);
            carry = c;
            self.0[i] = Limb::select(u, x, choice);
            i += 1;
        }
    }
}

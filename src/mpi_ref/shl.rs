//! [`MpiRef`] bitwise left shift operations.

use super::MpiRef;
use crate::Limb;

impl MpiRef {
    /// Left-shifts by a single bit in constant-time, returning the
    /// shifted-out limb value (0 or 1).
    #[inline(always)]
    pub const fn shl1_assign(&mut self) -> Limb {
        let mut carry = Limb::ZERO;
        let mut i = 0;
        while i < self.0.len() {
            let limb = self.0[i];
            self.0[i] = Limb(limb.0 << 1).bitor(carry);
            carry = Limb(limb.0 >> (Limb::BITS - 1));
            i += 1;
        }
        carry
    }

    /// Left-shifts by `shift` bits in a panic-free manner, producing zero if
    /// the shift exceeds the precision.
    ///
    /// NOTE: this operation is variable time with respect to `shift` *ONLY*.
    ///
    /// When used with a fixed `shift`, this function is constant-time with
    /// respect to `self`.
    #[inline(always)]
    pub const fn shl_assign_vartime(&mut self, shift: u32) {
        let shift_limbs = (shift / Limb::BITS) as usize;
        let rem = shift % Limb::BITS;

        let mut i = self.0.len();
        while i > shift_limbs {
            i -= 1;
            self.0[i] = self.0[i - shift_limbs];
        }
        while i > 0 {
            i -= 1;
            self.0[i] = Limb::ZERO;
        }

        if rem > 0 {
            let mut carry = Limb::ZERO;
            let mut i = shift_limbs;
            while i < self.0.len() {
                (self.0[i], carry) = (
                    Limb(self.0[i].0 << rem).bitor(carry),
                    Limb(self.0[i].0 >> (Limb::BITS - rem)),
                );
                i += 1;
            }
        }
    }
}

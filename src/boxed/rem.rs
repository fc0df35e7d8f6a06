//! [`BoxedMpi`] constant-time modular reduction.

use super::BoxedMpi;
use crate::{ConstChoice, Limb};

impl BoxedMpi {
    /// Compute `self % modulus`, returning a freshly allocated result of the
    /// modulus' precision.
    ///
    /// Binary long division, most significant bit first. Each of the
    /// `self.bits_precision()` iterations shifts the running remainder left
    /// by one bit, injects the next bit of `self`, subtracts the modulus
    /// unconditionally, and adds it back enabled by the resulting borrow —
    /// undoing the subtraction exactly when it underflowed. Cost and memory
    /// trace therefore depend only on the operand lengths, never on the
    /// operand values.
    ///
    /// The result is allocated with `self`'s [`MemoryClass`], so a secret
    /// dividend yields a remainder in secure memory.
    ///
    /// # Panics
    /// In debug builds, if `modulus` is zero (a caller contract violation).
    ///
    /// [`MemoryClass`]: super::MemoryClass
    #[must_use]
    pub fn rem(&self, modulus: &Self) -> Self {
        debug_assert!(
            !bool::from(modulus.is_zero()),
            "reduction modulus must be non-zero"
        );

        let mut rem = Self::zero_in(self.memory_class(), modulus.nlimbs());
        let modulus = modulus.as_mpi_ref();

        let mut i = self.bits_precision();
        while i > 0 {
            i -= 1;
            let limb = self.limbs[(i / Limb::BITS) as usize];
            let bit = Limb((limb.0 >> (i % Limb::BITS)) & 1);

            let r = rem.as_mut_mpi_ref();
            let carry = r.shl1_assign();
            r[0] = r[0].bitor(bit);

            // A bit shifted out the top means the doubled remainder exceeds
            // the buffer by exactly 2^bits, so the subtraction is valid even
            // though the truncated buffer reports a borrow. Undo it only
            // when the borrow fired with no shifted-out bit.
            let borrow = r.borrowing_sub_assign(modulus, Limb::ZERO);
            let undo = ConstChoice::from_word_mask(borrow.0)
                .and(ConstChoice::from_word_lsb(carry.0).not());
            r.conditional_carrying_add_assign(modulus, undo);
        }

        rem
    }
}

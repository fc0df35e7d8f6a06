//! Heap-allocated multi-precision integers carrying a memory
//! classification.

mod rem;

use crate::{ConstChoice, Limb, MpiRef, Word};
use alloc::{boxed::Box, vec};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Security classification of an owned limb buffer.
///
/// Operations that allocate a result propagate the classification of their
/// input, so values derived from secret material stay in secure memory.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MemoryClass {
    /// Ordinary heap memory.
    #[default]
    Ordinary,
    /// Memory holding secret material; zeroized when the buffer is
    /// released.
    Secure,
}

/// Fixed-precision heap-allocated multi-precision integer.
///
/// The precision is chosen at allocation time and never grows; arithmetic
/// wraps at the fixed precision. Limbs are stored least-significant first.
///
/// Every value carries a [`MemoryClass`]; `Secure` buffers are wiped on
/// drop.
#[derive(Clone)]
pub struct BoxedMpi {
    /// Boxed slice containing limbs, least significant first.
    limbs: Box<[Limb]>,
    /// Security classification of the buffer.
    class: MemoryClass,
}

impl BoxedMpi {
    /// Get the value `0` with `nlimbs` limbs of precision, in ordinary
    /// memory.
    #[must_use]
    pub fn zero(nlimbs: usize) -> Self {
        Self::zero_in(MemoryClass::Ordinary, nlimbs)
    }

    /// Get the value `0` with `nlimbs` limbs of precision, allocated with
    /// the given [`MemoryClass`].
    ///
    /// Allocation failure escalates to the global allocator's fatal path;
    /// no retry is attempted here.
    #[must_use]
    pub fn zero_in(class: MemoryClass, nlimbs: usize) -> Self {
        Self {
            limbs: vec![Limb::ZERO; nlimbs].into(),
            class,
        }
    }

    /// Create a [`BoxedMpi`] in ordinary memory from an iterator of
    /// [`Word`]s, least significant first.
    #[inline]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self::from_words_in(MemoryClass::Ordinary, words)
    }

    /// Create a [`BoxedMpi`] with the given [`MemoryClass`] from an iterator
    /// of [`Word`]s, least significant first.
    #[inline]
    pub fn from_words_in(class: MemoryClass, words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            limbs: words.into_iter().map(Limb).collect(),
            class,
        }
    }

    /// Create a boxed slice of [`Word`]s from this value.
    #[inline]
    #[must_use]
    pub fn to_words(&self) -> Box<[Word]> {
        self.limbs.iter().copied().map(Into::into).collect()
    }

    /// Borrow the limbs of this [`BoxedMpi`].
    #[inline]
    #[must_use]
    pub fn as_limbs(&self) -> &[Limb] {
        self.limbs.as_ref()
    }

    /// Borrow the limbs of this [`BoxedMpi`] mutably.
    #[inline]
    pub fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self.limbs.as_mut()
    }

    /// Borrow this value as an [`MpiRef`].
    #[inline]
    #[must_use]
    pub fn as_mpi_ref(&self) -> &MpiRef {
        MpiRef::new(&self.limbs)
    }

    /// Mutably borrow this value as an [`MpiRef`].
    #[inline]
    pub fn as_mut_mpi_ref(&mut self) -> &mut MpiRef {
        MpiRef::new_mut(&mut self.limbs)
    }

    /// Get the number of limbs in this [`BoxedMpi`].
    #[inline]
    #[must_use]
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Get the precision of this [`BoxedMpi`] in bits.
    #[inline]
    #[must_use]
    pub fn bits_precision(&self) -> u32 {
        self.limbs.len() as u32 * Limb::BITS
    }

    /// Is this [`BoxedMpi`] equal to zero?
    #[must_use]
    pub fn is_zero(&self) -> ConstChoice {
        self.as_mpi_ref().is_zero()
    }

    /// Get the [`MemoryClass`] this value was allocated with.
    #[inline]
    #[must_use]
    pub fn memory_class(&self) -> MemoryClass {
        self.class
    }

    /// Is this value held in secure memory?
    #[inline]
    #[must_use]
    pub fn is_secure(&self) -> bool {
        matches!(self.class, MemoryClass::Secure)
    }

    /// Compute the two's complement negation of `self` if `choice` is
    /// truthy, otherwise return a copy of `self`.
    ///
    /// The result inherits `self`'s [`MemoryClass`].
    #[must_use]
    pub fn conditional_wrapping_neg(&self, choice: ConstChoice) -> Self {
        let mut ret = self.clone();
        ret.as_mut_mpi_ref().conditional_wrapping_neg_assign(choice);
        ret
    }
}

impl AsRef<[Limb]> for BoxedMpi {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl AsMut<[Limb]> for BoxedMpi {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl ConstantTimeEq for BoxedMpi {
    /// Limbs only; the [`MemoryClass`] is public metadata and not part of
    /// the comparison.
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_mpi_ref().ct_eq(other.as_mpi_ref())
    }
}

impl Eq for BoxedMpi {}

impl PartialEq for BoxedMpi {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<Word> for BoxedMpi {
    fn from(n: Word) -> Self {
        Self::from_words([n])
    }
}

impl fmt::Debug for BoxedMpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedMpi(0x{self:X})")
    }
}

impl fmt::Display for BoxedMpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for BoxedMpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::LowerHex::fmt(&Limb::ZERO, f);
        }
        fmt::LowerHex::fmt(self.as_mpi_ref(), f)
    }
}

impl fmt::UpperHex for BoxedMpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::UpperHex::fmt(&Limb::ZERO, f);
        }
        fmt::UpperHex::fmt(self.as_mpi_ref(), f)
    }
}

impl Zeroize for BoxedMpi {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl Drop for BoxedMpi {
    fn drop(&mut self) {
        if self.is_secure() {
            self.limbs.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxedMpi, MemoryClass};
    use crate::Limb;

    #[test]
    fn zero_in_is_zero_filled() {
        let x = BoxedMpi::zero_in(MemoryClass::Secure, 4);
        assert_eq!(x.nlimbs(), 4);
        assert!(bool::from(x.is_zero()));
        assert!(x.is_secure());
    }

    #[test]
    fn from_words_round_trip() {
        let x = BoxedMpi::from_words([1, 2, 3]);
        assert_eq!(&*x.to_words(), &[1, 2, 3]);
        assert_eq!(x.memory_class(), MemoryClass::Ordinary);
    }

    #[test]
    fn conditional_wrapping_neg_preserves_class() {
        let x = BoxedMpi::from_words_in(MemoryClass::Secure, [1, 0]);
        let neg = x.conditional_wrapping_neg(crate::ConstChoice::TRUE);
        assert!(neg.is_secure());
        assert_eq!(neg.as_limbs(), &[Limb::MAX, Limb::MAX]);
    }

    #[test]
    fn eq_ignores_class() {
        let a = BoxedMpi::from_words([5]);
        let b = BoxedMpi::from_words_in(MemoryClass::Secure, [5]);
        assert_eq!(a, b);
    }
}

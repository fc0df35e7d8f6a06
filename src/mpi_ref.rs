//! Borrowed limb-slice view that the constant-time sweeps are defined on.

mod add;
mod assign;
mod cmp;
mod neg;
mod shl;
mod sub;
mod swap;

use crate::{ConstChoice, Limb};
use core::{
    fmt,
    ops::{Index, IndexMut},
};
use subtle::{Choice, ConstantTimeEq};

/// Multi-precision integer reference type.
///
/// Wraps a [`Limb`] slice ordered least-significant first, which can be
/// borrowed from any caller-owned buffer (or from
/// [`BoxedMpi`][`crate::BoxedMpi`] with the `alloc` feature) and thus
/// provides an abstraction for writing shared implementations.
///
/// All operands of a single operation must have the same length; a mismatch
/// is a caller contract violation and panics. No operation reports
/// recoverable errors.
#[repr(transparent)]
pub struct MpiRef([Limb]);

impl MpiRef {
    /// Create an [`MpiRef`] reference type from a [`Limb`] slice.
    #[inline]
    #[must_use]
    pub const fn new(limbs: &[Limb]) -> &Self {
        // SAFETY: `MpiRef` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &*(limbs as *const [Limb] as *const MpiRef)
        }
    }

    /// Create a mutable [`MpiRef`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new_mut(limbs: &mut [Limb]) -> &mut Self {
        // SAFETY: `MpiRef` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &mut *(limbs as *mut [Limb] as *mut MpiRef)
        }
    }

    /// Borrow the inner `&[Limb]` slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[Limb] {
        &self.0
    }

    /// Mutably borrow the inner `&mut [Limb]` slice.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.0
    }

    /// Get an iterator over the inner limbs.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Limb> {
        self.0.iter()
    }

    /// Access the number of limbs.
    #[inline]
    #[must_use]
    pub const fn nlimbs(&self) -> usize {
        self.0.len()
    }

    /// Is this value equal to zero?
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> ConstChoice {
        let mut acc = 0;
        let mut i = 0;
        while i < self.0.len() {
            acc |= self.0[i].0;
            i += 1;
        }
        ConstChoice::from_word_nonzero(acc).not()
    }

    /// Assign all of the limbs to zero.
    #[inline]
    pub const fn set_zero(&mut self) {
        let mut i = 0;
        while i < self.0.len() {
            self.0[i] = Limb::ZERO;
            i += 1;
        }
    }

    /// Conditionally assign all of the limbs to zero.
    #[inline]
    pub const fn conditional_set_zero(&mut self, choice: ConstChoice) {
        let mut i = 0;
        while i < self.0.len() {
            self.0[i] = Limb::select(self.0[i], Limb::ZERO, choice);
            i += 1;
        }
    }
}

impl AsRef<[Limb]> for MpiRef {
    #[inline]
    fn as_ref(&self) -> &[Limb] {
        self.as_slice()
    }
}

impl AsMut<[Limb]> for MpiRef {
    #[inline]
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_mut_slice()
    }
}

impl Index<usize> for MpiRef {
    type Output = Limb;

    #[inline]
    fn index(&self, index: usize) -> &Limb {
        self.0.index(index)
    }
}

impl IndexMut<usize> for MpiRef {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Limb {
        self.0.index_mut(index)
    }
}

impl ConstantTimeEq for MpiRef {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for MpiRef {}

impl PartialEq for MpiRef {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl fmt::Debug for MpiRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MpiRef(0x{self:X})")
    }
}

impl fmt::Display for MpiRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for MpiRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.iter().rev() {
            write!(f, "{:0width$x}", &limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for MpiRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.iter().rev() {
            write!(f, "{:0width$X}", &limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}

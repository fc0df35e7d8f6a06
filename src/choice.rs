//! Branchless boolean masks for constant-time selection.

use crate::Word;
use subtle::Choice;

/// A boolean value carried as an all-zero or all-one [`Word`], usable in
/// `const fn` contexts.
///
/// The mask is derived from a 0/1 enable flag as `0 - flag` in wraparound
/// arithmetic, and drives selection as `a ^ (mask & (a ^ b))`. This is the
/// single mechanism underlying every conditional operation in this crate;
/// no code path branches on the flag itself.
#[derive(Copy, Clone, Debug)]
pub struct ConstChoice(Word);

impl ConstChoice {
    /// The falsy value.
    pub const FALSE: Self = Self(0);

    /// The truthy value.
    pub const TRUE: Self = Self(Word::MAX);

    /// Returns the truthy value if `value == 1`, and the falsy value if
    /// `value == 0`.
    ///
    /// Other values violate the caller contract and are rejected in debug
    /// builds only.
    #[inline]
    #[must_use]
    pub const fn from_word_lsb(value: Word) -> Self {
        debug_assert!(value == 0 || value == 1);
        Self(value.wrapping_neg())
    }

    /// Returns the truthy value if `value == Word::MAX`, and the falsy value
    /// if `value == 0`.
    ///
    /// Used to adopt a borrow mask returned by a limb sweep as the enable
    /// flag of a subsequent conditional operation.
    #[inline]
    #[must_use]
    pub const fn from_word_mask(value: Word) -> Self {
        debug_assert!(value == Self::FALSE.0 || value == Self::TRUE.0);
        Self(value)
    }

    /// Returns the truthy value if the most significant bit of `value` is
    /// set, and the falsy value otherwise.
    #[inline]
    #[must_use]
    pub const fn from_word_msb(value: Word) -> Self {
        Self::from_word_lsb(value >> (Word::BITS - 1))
    }

    /// Returns the truthy value if `value != 0`, and the falsy value
    /// otherwise.
    #[inline]
    #[must_use]
    pub const fn from_word_nonzero(value: Word) -> Self {
        Self::from_word_lsb((value | value.wrapping_neg()) >> (Word::BITS - 1))
    }

    /// Returns the truthy value if `x == y`, and the falsy value otherwise.
    #[inline]
    #[must_use]
    pub const fn from_word_eq(x: Word, y: Word) -> Self {
        Self::from_word_nonzero(x ^ y).not()
    }

    /// Returns the truthy value if `x < y`, and the falsy value otherwise.
    #[inline]
    #[must_use]
    pub const fn from_word_lt(x: Word, y: Word) -> Self {
        // See "Hacker's Delight" 2nd ed, section 2-12 (Comparison predicates)
        let bit = (((!x) & y) | (((!x) | y) & (x.wrapping_sub(y)))) >> (Word::BITS - 1);
        Self::from_word_lsb(bit)
    }

    /// Returns the truthy value if `x > y`, and the falsy value otherwise.
    #[inline]
    #[must_use]
    pub const fn from_word_gt(x: Word, y: Word) -> Self {
        Self::from_word_lt(y, x)
    }

    /// Logical negation.
    #[inline]
    #[must_use]
    pub const fn not(&self) -> Self {
        Self(!self.0)
    }

    /// Logical conjunction.
    #[inline]
    #[must_use]
    pub const fn and(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Logical disjunction.
    #[inline]
    #[must_use]
    pub const fn or(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Logical exclusive-or.
    #[inline]
    #[must_use]
    pub const fn xor(&self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Return `b` if `self` is truthy, otherwise return `a`.
    #[inline]
    #[must_use]
    pub const fn select_word(&self, a: Word, b: Word) -> Word {
        a ^ (self.0 & (a ^ b))
    }

    /// Return `x` if `self` is truthy, otherwise return 0.
    #[inline]
    #[must_use]
    pub const fn if_true_word(&self, x: Word) -> Word {
        x & self.0
    }

    /// Convert to a 0/1 byte.
    #[inline]
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        (self.0 as u8) & 1
    }

    /// WARNING: this method should only be used in contexts that aren't
    /// constant-time critical!
    #[inline]
    #[must_use]
    pub const fn to_bool_vartime(self) -> bool {
        self.to_u8() != 0
    }
}

impl From<ConstChoice> for Choice {
    #[inline]
    fn from(choice: ConstChoice) -> Self {
        Choice::from(choice.to_u8())
    }
}

impl From<Choice> for ConstChoice {
    #[inline]
    fn from(choice: Choice) -> Self {
        ConstChoice::from_word_lsb(choice.unwrap_u8() as Word)
    }
}

impl From<ConstChoice> for bool {
    #[inline]
    fn from(choice: ConstChoice) -> Self {
        choice.to_bool_vartime()
    }
}

impl PartialEq for ConstChoice {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for ConstChoice {}

//! Word-level arithmetic primitives shared by the limb sweeps.

use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new
/// carry (0, 1, or 2).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let carry = carry as WideWord;
    let ret = a + b + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs + rhs`, returning the result along with the carry (0 or 1).
#[inline(always)]
pub(crate) const fn overflowing_add(lhs: Word, rhs: Word) -> (Word, Word) {
    let (res, carry) = lhs.overflowing_add(rhs);
    (res, carry as Word)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new
/// borrow.
///
/// The borrow is a full-width mask: `Word::MAX` on underflow, `0` otherwise.
/// Both underflow conditions (result exceeds the minuend; result is less
/// than the incoming borrow) are evaluated unconditionally.
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let (ret, b1) = lhs.overflowing_sub(rhs);
    let (ret, b2) = ret.overflowing_sub(borrow >> (Word::BITS - 1));
    (ret, Word::MIN.wrapping_sub((b1 | b2) as Word))
}

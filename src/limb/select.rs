//! Constant-time selection support.

use crate::{ConstChoice, Limb};

impl Limb {
    /// Return `b` if `c` is truthy, otherwise return `a`.
    #[inline]
    #[must_use]
    pub const fn select(a: Self, b: Self, c: ConstChoice) -> Self {
        Self(c.select_word(a.0, b.0))
    }

    /// Swap the values of `a` and `b` if `c` is truthy, otherwise do
    /// nothing.
    ///
    /// The same XOR mask is applied to both sides, so no intermediate value
    /// reveals which side holds the "new" word.
    #[inline]
    pub const fn conditional_swap(a: &mut Self, b: &mut Self, c: ConstChoice) {
        let x = Limb(c.if_true_word(a.0 ^ b.0));
        (*a, *b) = (Limb(a.0 ^ x.0), Limb(b.0 ^ x.0));
    }
}

impl subtle::ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
        Self::select(*a, *b, choice.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstChoice, Limb};

    #[test]
    fn select() {
        assert_eq!(
            Limb::select(Limb::ZERO, Limb::MAX, ConstChoice::FALSE),
            Limb::ZERO
        );
        assert_eq!(
            Limb::select(Limb::ZERO, Limb::MAX, ConstChoice::TRUE),
            Limb::MAX
        );
    }

    #[test]
    fn conditional_swap() {
        let mut a = Limb::MAX;
        let mut b = Limb::ZERO;

        Limb::conditional_swap(&mut a, &mut b, ConstChoice::FALSE);
        assert_eq!(a, Limb::MAX);
        assert_eq!(b, Limb::ZERO);

        Limb::conditional_swap(&mut a, &mut b, ConstChoice::TRUE);
        assert_eq!(a, Limb::ZERO);
        assert_eq!(b, Limb::MAX);
    }
}

//! [`MpiRef`] conditional swap.

use super::MpiRef;
use crate::{ConstChoice, Limb};

impl MpiRef {
    /// Swap the contents of `a` and `b` if `choice` is truthy, otherwise
    /// leave both unchanged.
    ///
    /// Applies the same XOR mask symmetrically to both sides of every limb
    /// pair, so no temporary reveals which buffer received the "new" value.
    ///
    /// # Panics
    /// If `a` and `b` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn conditional_swap(a: &mut Self, b: &mut Self, choice: ConstChoice) {
        assert!(
            a.0.len() == b.0.len(),
            "length mismatch in conditional_swap"
        );
        let mut i = 0;
        while i < a.0.len() {
            Limb::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstChoice, Limb, MpiRef};

    #[test]
    fn disabled_is_noop() {
        let mut a = [Limb(1), Limb(2)];
        let mut b = [Limb(3), Limb(4)];
        MpiRef::conditional_swap(
            MpiRef::new_mut(&mut a),
            MpiRef::new_mut(&mut b),
            ConstChoice::FALSE,
        );
        assert_eq!(a, [Limb(1), Limb(2)]);
        assert_eq!(b, [Limb(3), Limb(4)]);
    }

    #[test]
    fn enabled_swaps() {
        let mut a = [Limb(1), Limb(2)];
        let mut b = [Limb(3), Limb(4)];
        MpiRef::conditional_swap(
            MpiRef::new_mut(&mut a),
            MpiRef::new_mut(&mut b),
            ConstChoice::TRUE,
        );
        assert_eq!(a, [Limb(3), Limb(4)]);
        assert_eq!(b, [Limb(1), Limb(2)]);
    }

    #[test]
    fn swap_twice_restores() {
        let orig_a = [Limb(0xDEAD), Limb(0xBEEF)];
        let orig_b = [Limb(0xCAFE), Limb(0xF00D)];
        let (mut a, mut b) = (orig_a, orig_b);

        MpiRef::conditional_swap(
            MpiRef::new_mut(&mut a),
            MpiRef::new_mut(&mut b),
            ConstChoice::TRUE,
        );
        MpiRef::conditional_swap(
            MpiRef::new_mut(&mut a),
            MpiRef::new_mut(&mut b),
            ConstChoice::TRUE,
        );
        assert_eq!(a, orig_a);
        assert_eq!(b, orig_b);
    }
}

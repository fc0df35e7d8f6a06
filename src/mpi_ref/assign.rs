//! [`MpiRef`] conditional assignment.

use super::MpiRef;
use crate::{ConstChoice, Limb};

impl MpiRef {
    /// Assign `src` to `self` if `choice` is truthy, otherwise leave `self`
    /// unchanged.
    ///
    /// Every limb is blended through the selection mask, so the memory
    /// access pattern and operation count are identical for both flag
    /// values.
    ///
    /// # Panics
    /// If `self` and `src` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn conditional_assign(&mut self, src: &Self, choice: ConstChoice) {
        assert!(
            self.0.len() == src.0.len(),
            "length mismatch in conditional_assign"
        );
        let mut i = 0;
        while i < self.0.len() {
            self.0[i] = Limb::select(self.0[i], src.0[i], choice);
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstChoice, Limb, MpiRef};

    #[test]
    fn disabled_is_noop() {
        let mut w = [Limb(7), Limb(8), Limb(9)];
        let u = [Limb(1), Limb(2), Limb(3)];
        MpiRef::new_mut(&mut w).conditional_assign(MpiRef::new(&u), ConstChoice::FALSE);
        assert_eq!(w, [Limb(7), Limb(8), Limb(9)]);
    }

    #[test]
    fn enabled_copies() {
        let mut w = [Limb(7), Limb(8), Limb(9)];
        let u = [Limb(1), Limb(2), Limb(3)];
        MpiRef::new_mut(&mut w).conditional_assign(MpiRef::new(&u), ConstChoice::TRUE);
        assert_eq!(w, u);
    }

    #[test]
    #[should_panic]
    fn length_mismatch() {
        let mut w = [Limb::ZERO; 2];
        let u = [Limb::ZERO; 3];
        MpiRef::new_mut(&mut w).conditional_assign(MpiRef::new(&u), ConstChoice::TRUE);
    }
}

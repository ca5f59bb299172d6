use std::mem::size_of;

use num_traits::{PrimInt, Zero};

/// Commonly used logarithms on integer primitives.
pub(crate) trait Log: PrimInt + Zero {
    /// The minimum number of bits required to store a positive integer in binary, or 0 for a non-positive integer.
    ///
    /// Named so it cannot collide with the inherent `ilog`/`ilog2` methods
    /// on the integer primitives.
    #[inline(always)]
    fn bit_len(self) -> u32 {
        (size_of::<Self>() * 8) as u32 - self.leading_zeros()
    }
}

impl Log for u32 {}

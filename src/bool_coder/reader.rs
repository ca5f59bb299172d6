//! Implements the boolean reader.

use crate::bool_coder::{
    TreeIndex, ACCUM_BITS, BIG_SPLIT_SHIFT, LOTS_OF_BITS, PROB_HALF, SCRATCH_BYTES, SYM_BITS,
};
use crate::decrypt::Decrypt;
use crate::error::ReaderError;
use crate::math::Log;

/// The boolean reader.
///
/// Decodes probability-weighted binary symbols from a compressed byte view.
/// The reader keeps the most-significant loaded bits of the remaining stream
/// in a 64 bit accumulator and refills it lazily, a batch of bytes at a
/// time, so the per-bit cost stays low.
///
/// One reader decodes one independent partition of a bitstream. Readers
/// share nothing, so callers are free to run one per partition across
/// threads. The byte view is caller-owned and must outlive the reader.
pub struct BoolReader<'d> {
    /// Compressed input view, truncated to the declared partition size.
    data: &'d [u8],
    /// Offset of the next byte to load from the input view.
    cursor: usize,
    /// Most-significant loaded bits of the remaining stream.
    value: u64,
    /// Signed count of bits still owed to `value`. Negative means the
    /// accumulator is under-filled and must be refilled before the next
    /// symbol is decoded.
    count: i32,
    /// Width of the current coding interval.
    range: u32,
    /// Optional byte transform applied ahead of the accumulator.
    decrypt: Option<Box<dyn Decrypt + 'd>>,
    /// Plaintext window for the decrypting refill path.
    scratch: [u8; SCRATCH_BYTES],
}

impl<'d> BoolReader<'d> {
    /// Creates a new reader over the first `size` bytes of `buffer`.
    ///
    /// The first decoded bit of every stream is a marker bit that must be
    /// one; a zero marker bit means the stream is corrupt or the partition
    /// boundaries are wrong.
    ///
    /// # Arguments
    /// * `buffer`  - Backing view holding the compressed bytes.
    /// * `size`    - Declared partition size. Must not exceed `buffer.len()`.
    /// * `decrypt` - Optional transform decrypting the input on the fly.
    ///
    /// # Errors
    /// `InvalidInput` if `size` is not covered by `buffer` (checked before
    /// any byte is read), `DesyncStream` if the marker bit is zero.
    pub fn new(
        buffer: &'d [u8],
        size: usize,
        decrypt: Option<Box<dyn Decrypt + 'd>>,
    ) -> Result<Self, ReaderError> {
        if size > buffer.len() {
            return Err(ReaderError::InvalidInput);
        }

        let mut reader = Self {
            data: &buffer[..size],
            cursor: 0,
            value: 0,
            count: -SYM_BITS,
            range: 255,
            decrypt,
            scratch: [0; SCRATCH_BYTES],
        };
        reader.fill();

        if reader.read_bit() != 1 {
            return Err(ReaderError::DesyncStream);
        }
        Ok(reader)
    }

    /// Batch-loads bytes into the accumulator.
    ///
    /// Once the input runs dry the bit count is pushed up by a sentinel and
    /// the load is clamped to the bytes that actually exist; decoding then
    /// continues on synthesized zero bits. Running past the declared end is
    /// a defined state, not a failure.
    fn fill(&mut self) {
        let bytes_left = self.data.len() - self.cursor;
        let bits_left = bytes_left as i64 * i64::from(SYM_BITS);

        let mut value = self.value;
        let mut count = self.count;
        let mut shift = ACCUM_BITS - SYM_BITS - (count + SYM_BITS);
        let mut loop_end = 0;
        let x = i64::from(shift + SYM_BITS) - bits_left;

        let (view, start): (&[u8], usize) = match self.decrypt.as_mut() {
            Some(decrypt) => {
                let n = SCRATCH_BYTES.min(bytes_left);
                decrypt.decrypt(
                    &self.data[self.cursor..self.cursor + n],
                    &mut self.scratch[..n],
                );
                (&self.scratch[..n], 0)
            }
            None => (self.data, self.cursor),
        };
        let mut index = start;

        if x >= 0 {
            count += LOTS_OF_BITS;
            loop_end = x as i32;
        }

        if x < 0 || bits_left != 0 {
            while shift >= loop_end {
                count += SYM_BITS;
                value |= u64::from(view[index]) << shift as u32;
                index += 1;
                shift -= SYM_BITS;
            }
        }

        // The scratch window has its own addressing, so the real cursor
        // advances by the number of bytes taken from whichever view was
        // read, never by the read position itself.
        self.cursor += index - start;
        self.value = value;
        self.count = count;
    }

    /// Decodes one boolean symbol.
    ///
    /// # Arguments
    /// * `prob` - Probability of a zero bit, scaled by 256. Must be in
    ///            `1..=255`.
    ///
    /// Returns 0 or 1.
    pub fn read_bool(&mut self, prob: u8) -> u32 {
        let split = 1 + (((self.range - 1) * u32::from(prob)) >> 8);

        if self.count < 0 {
            self.fill();
        }

        let big_split = u64::from(split) << BIG_SPLIT_SHIFT;
        let bit;
        let mut range;
        if self.value >= big_split {
            range = self.range - split;
            self.value -= big_split;
            bit = 1;
        } else {
            range = split;
            bit = 0;
        }

        // The split leaves the range in [1, 254]; shift it back into
        // [128, 255].
        let shift = 8 - range.bit_len();
        range <<= shift;
        self.value <<= shift;
        self.count -= shift as i32;
        self.range = range;

        bit
    }

    /// Decodes one fair boolean symbol, used for flags and raw bit fields.
    #[inline]
    pub fn read_bit(&mut self) -> u32 {
        self.read_bool(PROB_HALF)
    }

    /// Decodes an unsigned `bits`-wide literal, most-significant bit first.
    pub fn read_literal(&mut self, bits: u32) -> u32 {
        let mut value = 0;
        for _ in 0..bits {
            value = (value << 1) | self.read_bit();
        }
        value
    }

    /// Decodes a `bits`-wide magnitude followed by one sign bit.
    ///
    /// A set sign bit negates the magnitude.
    pub fn read_signed_literal(&mut self, bits: u32) -> i32 {
        let value = self.read_literal(bits) as i32;
        if self.read_bit() != 0 {
            -value
        } else {
            value
        }
    }

    /// Decodes a multi-valued symbol as a walk over a binary probability
    /// tree.
    ///
    /// Each node pair `tree[i]`, `tree[i + 1]` is guarded by `probs[i >> 1]`;
    /// a decoded zero takes the left entry, a one the right. Positive
    /// entries index the next node pair, entries less than or equal to zero
    /// are negated leaf symbols.
    ///
    /// `tree` and `probs` must describe a well-formed tree: every reachable
    /// index must lie inside both slices.
    pub fn read_tree(&mut self, tree: &[TreeIndex], probs: &[u8]) -> i8 {
        let mut index = tree[self.read_bool(probs[0]) as usize];
        while index > 0 {
            let i = index as usize;
            index = tree[i + self.read_bool(probs[i >> 1]) as usize];
        }
        -index
    }

    /// Reports whether decoding has consumed synthesized zero bits past the
    /// declared end of the input.
    ///
    /// This is not an error state. It lets grammar-level callers tell a
    /// stream that covered all its symbols from one that ran out early.
    pub fn has_overrun(&self) -> bool {
        // Once the refill hits the end of the input it adds the sentinel to
        // the bit count. The count then falls below the sentinel exactly
        // when decoding has used up more bits than the input held.
        self.count > ACCUM_BITS && self.count < LOTS_OF_BITS
    }

    /// Returns the byte offset at which consumption actually ended.
    ///
    /// Refill loads ahead of what decoding has used; this walks the cursor
    /// back over the looked-ahead bytes so the reported offset covers only
    /// bits that decode calls consumed. Used to locate the start of the
    /// next independently-coded partition.
    ///
    /// Consumes the reader: the rewind invalidates further decoding.
    pub fn find_end(mut self) -> usize {
        while self.count > SYM_BITS && self.count < ACCUM_BITS {
            self.count -= SYM_BITS;
            self.cursor -= 1;
        }
        self.cursor
    }

    /// The width of the current coding interval.
    #[inline(always)]
    pub(crate) fn range(&self) -> u32 {
        self.range
    }
}

//! Implements the boolean coder.
//!
//! This is the binary arithmetic coder used by the VP8/VP9 family of video
//! bitstreams. Each coded boolean carries an eight-bit probability of being
//! zero; the coder recursively splits a numeric interval at
//! `1 + (((range - 1) * prob) >> 8)` and renormalizes the interval back
//! into `[128, 255]` after every symbol. Multi-valued symbols are reduced
//! to sequences of booleans by walking a binary probability tree.
//!
//! The decoder keeps a 64 bit accumulator of upcoming stream bits and a
//! signed count of bits owed to it. Refills are batched: the count goes
//! negative as symbols are decoded, and a whole accumulator's worth of
//! bytes is merged in at once when it does. Running past the end of the
//! input is deliberately permissive and synthesizes zero bits; the
//! bitstream grammar bounds the symbol count, not the decoder.
//!
//! The scheme is described in RFC 6386, section 7 ("Boolean Entropy
//! Decoder").
pub use reader::BoolReader;

mod reader;

/// The total number of bits in the value accumulator.
///
/// Fixed at 64 bits on every target so the decoded bit sequence is
/// identical across platforms; every other constant here derives from it.
const ACCUM_BITS: i32 = 64;
/// The number of bits merged into the accumulator per refill step.
const SYM_BITS: i32 = 8;
/// Bits to shift a split threshold up to the accumulator's top byte.
const BIG_SPLIT_SHIFT: u32 = (ACCUM_BITS - SYM_BITS) as u32;
/// Probability of one half, used for marker bits and raw bit fields.
const PROB_HALF: u8 = 128;
/// Added to the bit count once the input runs dry. Any value exceeding the
/// bit count of a real input works; it keeps the refill loop clamped while
/// decoding continues on synthesized zero bits.
const LOTS_OF_BITS: i32 = 1 << 30;
/// Capacity of the plaintext scratch window: one full accumulator plus a
/// spare byte.
const SCRATCH_BYTES: usize = (ACCUM_BITS / SYM_BITS + 1) as usize;

/// Entry of a binary probability tree.
///
/// Positive entries index the next node pair, entries less than or equal to
/// zero are negated leaf symbols. Node pair `i` is guarded by probability
/// `i >> 1` of the accompanying probability table.
pub type TreeIndex = i8;

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
//! Implements the boolean entropy decoder of the VP8/VP9 video codec family.
//!
//! Every symbol in a VP8/VP9-class bitstream is coded through a binary
//! arithmetic coder: the compressed bytes describe a point inside a numeric
//! interval, and each decoded bit narrows that interval according to the
//! bit's probability. The decoder in this crate reproduces that process
//! bit-exactly and is designed to sit on the per-bit hot path of a frame
//! decoder:
//!
//! * Probability-weighted boolean reads with an eight-bit probability model
//! * Fixed-width and sign-extended literals
//! * Multi-valued symbols decoded as a walk over a binary probability tree
//! * Lazy, batched refill of a 64 bit accumulator
//! * An optional decryption transform applied transparently to the input
//! * An exact end-of-consumption query used to chain stream partitions
//!
//! Reading past the declared end of the input is well defined: the refill
//! synthesizes zero bits instead of failing, and [`BoolReader::has_overrun`]
//! reports whether that happened. Bounding the number of decoded symbols is
//! the caller's job; the bitstream grammar, not the decoder, knows how many
//! symbols a partition holds.
//!
//! A description of the coding scheme itself can be found in RFC 6386,
//! section 7 ("Boolean Entropy Decoder").

pub use bool_coder::{BoolReader, TreeIndex};
pub use decrypt::Decrypt;
pub use error::ReaderError;

mod bool_coder;
mod decrypt;
mod error;
pub(crate) mod math;

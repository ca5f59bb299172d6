//! Pluggable decryption of the compressed input.

/// A byte transform applied to the compressed input before it reaches the
/// decoder's accumulator.
///
/// Bitstreams are sometimes stored encrypted; the reader then pulls its
/// refill window through this transform instead of reading the raw view.
/// Implementations keep whatever cipher state they need between calls, and
/// must be reentrant if one instance is shared across readers.
pub trait Decrypt {
    /// Fills `plaintext` with the decrypted form of `ciphertext`.
    ///
    /// Both slices always have the same length. The window may be empty when
    /// the reader refills at the very end of the input.
    fn decrypt(&mut self, ciphertext: &[u8], plaintext: &mut [u8]);
}

impl<F> Decrypt for F
where
    F: FnMut(&[u8], &mut [u8]),
{
    fn decrypt(&mut self, ciphertext: &[u8], plaintext: &mut [u8]) {
        self(ciphertext, plaintext)
    }
}

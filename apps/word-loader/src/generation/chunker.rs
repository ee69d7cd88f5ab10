use std::num::NonZeroUsize;

/// Splits `words` into ordered groups of at most `size`; only the last may be shorter.
pub fn chunks(words: &[String], size: NonZeroUsize) -> impl Iterator<Item = &[String]> {
    words.chunks(size.get())
}

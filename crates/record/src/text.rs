use std::borrow::Cow;
use std::fmt;

/// A fixed-width, NUL-padded text field of exactly `N` bytes.
///
/// Built from a `&str` with [`FixedStr::new`], which truncates input longer
/// than `N` bytes at the last UTF-8 char boundary that fits. A value that
/// fills all `N` bytes carries no terminating NUL, like a `strncpy`'d C
/// buffer. Bytes decoded from disk are kept verbatim via
/// [`FixedStr::from_bytes`], even if they are not valid UTF-8.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    /// Field width in bytes.
    pub const WIDTH: usize = N;

    /// Creates a field from `s`, truncating it to at most `N` bytes.
    pub fn new(s: &str) -> Self {
        let mut end = s.len().min(N);

        while !s.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0u8; N];
        bytes[..end].copy_from_slice(&s.as_bytes()[..end]);
        Self { bytes }
    }

    /// Wraps raw on-disk bytes without interpretation.
    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// The full `N`-byte buffer, padding included.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// The bytes before the first NUL (or all `N` bytes if there is none).
    pub fn content(&self) -> &[u8] {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        &self.bytes[..end]
    }

    /// The content as text, replacing invalid UTF-8 sequences.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.content())
    }

    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self { bytes: [0u8; N] }
    }
}

impl<const N: usize> From<&str> for FixedStr<N> {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<const N: usize> PartialEq<str> for FixedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.content() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for FixedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.content() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_str_lossy(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_nul_padded() {
        let s = FixedStr::<8>::new("abc");
        assert_eq!(s.as_bytes(), b"abc\0\0\0\0\0");
        assert_eq!(s, "abc");
        assert_eq!(s.to_string(), "abc");
    }

    #[test]
    fn long_input_is_truncated_to_width() {
        let s = FixedStr::<4>::new("abcdefgh");
        assert_eq!(s.as_bytes(), b"abcd");
        assert_eq!(s.content(), b"abcd");
        assert_eq!(s, "abcd");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 'é' is two bytes; the second one would not fit.
        let s = FixedStr::<4>::new("abcé");
        assert_eq!(s, "abc");
        assert_eq!(s.as_bytes(), b"abc\0");

        let s = FixedStr::<3>::new("日本");
        assert_eq!(s, "日");
    }

    #[test]
    fn raw_bytes_are_kept_verbatim() {
        let s = FixedStr::<4>::from_bytes([b'a', 0xff, 0, b'z']);
        assert_eq!(s.as_bytes(), &[b'a', 0xff, 0, b'z']);
        assert_eq!(s.content(), &[b'a', 0xff]);
        assert_eq!(s.to_str_lossy(), "a\u{fffd}");
    }

    #[test]
    fn default_is_empty() {
        let s = FixedStr::<16>::default();
        assert!(s.is_empty());
        assert_eq!(s, "");
        assert_eq!(FixedStr::<16>::WIDTH, 16);
    }
}

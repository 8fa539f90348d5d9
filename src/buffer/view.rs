//! Borrowed, read-only view over a buffer's bytes.

use std::ops::Deref;
use std::str::Utf8Error;

/// Read-only view aliasing the bytes of a [`CowBuffer`](super::CowBuffer).
///
/// A view never owns data. It borrows the handle it was taken from, so the
/// handle cannot be updated or released while the view is alive.
///
/// # Examples
///
/// ```
/// use cowbuf::CowBuffer;
///
/// let buf = CowBuffer::new(b"abcd".to_vec());
/// let view = buf.view();
/// assert_eq!(view.len(), 4);
/// assert_eq!(&view[..2], b"ab");
/// assert_eq!(view.to_str(), Ok("abcd"));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct View<'a> {
    bytes: &'a [u8],
}

impl<'a> View<'a> {
    /// The view of a released handle.
    #[must_use]
    pub const fn empty() -> Self {
        View { bytes: &[] }
    }

    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        View { bytes }
    }

    /// Returns the number of bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the aliased bytes with the lifetime of the borrowed handle.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Address of the first aliased byte.
    ///
    /// Two views with the same address and length read the same storage.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Reinterprets the bytes as UTF-8 without copying.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowbuf::CowBuffer;
    ///
    /// let text = CowBuffer::from("hello");
    /// assert_eq!(text.view().to_str(), Ok("hello"));
    ///
    /// let binary = CowBuffer::new(vec![0xff, 0xfe]);
    /// assert!(binary.view().to_str().is_err());
    /// ```
    pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.bytes)
    }
}

impl Deref for View<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for View<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl std::fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("len", &self.len())
            .field("data", &self.bytes)
            .finish()
    }
}

impl PartialEq<[u8]> for View<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<View<'_>> for [u8] {
    fn eq(&self, other: &View<'_>) -> bool {
        self == other.bytes
    }
}

impl PartialEq<&[u8]> for View<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for View<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes == other.as_slice()
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for View<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.bytes == other.as_slice()
    }
}

impl PartialEq<Vec<u8>> for View<'_> {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.bytes == other.as_slice()
    }
}

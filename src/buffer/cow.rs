//! Copy-on-write byte buffer handle.

use super::View;
use crate::error::{Error, Result};
use crate::tracing_compat::{debug, trace};
use std::sync::Arc;

/// Handle over shared byte storage that copies only when a shared handle
/// is written to.
///
/// Handles created from one another with [`try_clone`](Self::try_clone)
/// form a lineage: they alias the same storage and share one reference
/// count. The first write through a handle whose storage is shared forks
/// that handle onto a private copy; siblings keep reading the original.
///
/// A handle is either active or released. Releasing (explicitly or on
/// drop) decrements the lineage count; the storage is freed when the last
/// handle goes. Every operation on a released handle is a no-op or a
/// failure value.
///
/// `CowBuffer` does not implement `Clone`: a second owner only comes from
/// `try_clone`, and passing a handle by value moves it.
///
/// # Examples
///
/// ```
/// use cowbuf::CowBuffer;
///
/// let mut original = CowBuffer::new(b"abcd".to_vec());
/// let sibling = original.try_clone().expect("active handle");
/// assert!(original.shares_storage_with(&sibling));
///
/// assert!(original.update(0, b'g'));
/// assert_eq!(original.view(), b"gbcd");
/// assert_eq!(sibling.view(), b"abcd");
/// assert!(!original.shares_storage_with(&sibling));
/// ```
#[derive(Default)]
pub struct CowBuffer {
    /// Storage and lineage count in one allocation. `None` once released.
    storage: Option<Arc<Vec<u8>>>,
}

impl CowBuffer {
    /// Create a handle that takes ownership of `data`.
    ///
    /// No copy is made. The new lineage has a reference count of 1.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        CowBuffer {
            storage: Some(Arc::new(data)),
        }
    }

    /// Create a handle that is already released.
    ///
    /// Equivalent to `CowBuffer::default()`.
    #[must_use]
    pub const fn released() -> Self {
        CowBuffer { storage: None }
    }

    /// Returns the number of bytes, or 0 for a released handle.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.as_ref().map_or(0, |data| data.len())
    }

    /// Returns true if there are no bytes to read.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once the handle has been released.
    #[inline]
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.storage.is_none()
    }

    /// Number of live handles sharing this handle's storage.
    ///
    /// Returns 0 for a released handle.
    #[must_use]
    pub fn ref_count(&self) -> usize {
        self.storage.as_ref().map_or(0, Arc::strong_count)
    }

    /// Returns true if a write would fork this handle.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.ref_count() > 1
    }

    /// Returns true if both handles alias the same storage instance.
    ///
    /// Always false when either handle is released.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Create another handle in this lineage.
    ///
    /// O(1): the reference count goes up by one and no bytes are copied.
    /// Returns `None` for a released handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowbuf::CowBuffer;
    ///
    /// let buf = CowBuffer::new(vec![1, 2, 3]);
    /// let copy = buf.try_clone().unwrap();
    /// assert_eq!(buf.ref_count(), 2);
    /// assert_eq!(buf.view().as_ptr(), copy.view().as_ptr());
    ///
    /// assert!(CowBuffer::default().try_clone().is_none());
    /// ```
    #[must_use]
    pub fn try_clone(&self) -> Option<Self> {
        let shared = Arc::clone(self.storage.as_ref()?);
        trace!(
            len = shared.len(),
            refs = Arc::strong_count(&shared),
            "buffer handle cloned"
        );
        Some(CowBuffer {
            storage: Some(shared),
        })
    }

    /// Zero-copy view of the current bytes.
    ///
    /// A released handle yields an empty view.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        match &self.storage {
            Some(data) => View::new(data.as_slice()),
            None => View::empty(),
        }
    }

    /// Write `value` at `index`, forking first if the storage is shared.
    ///
    /// Returns false, leaving everything untouched, if the handle is
    /// released, the buffer is empty, or `index` is out of range.
    /// See [`try_update`](Self::try_update) for the failure reason.
    pub fn update(&mut self, index: usize, value: u8) -> bool {
        self.try_update(index, value).is_ok()
    }

    /// Write `value` at `index`, forking first if the storage is shared.
    ///
    /// # Errors
    ///
    /// - [`Error::Released`] if the handle is released.
    /// - [`Error::Empty`] if the buffer holds no bytes.
    /// - [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// The handle and its lineage are unchanged on error; in particular a
    /// failed update never forks.
    pub fn try_update(&mut self, index: usize, value: u8) -> Result<()> {
        let len = match &self.storage {
            Some(data) => data.len(),
            None => return Err(Error::Released),
        };
        if len == 0 {
            return Err(Error::Empty);
        }
        if index >= len {
            return Err(Error::InvalidIndex { index, len });
        }

        self.make_mut()?[index] = value;
        Ok(())
    }

    /// Exclusive access to the bytes for a burst of writes.
    ///
    /// Forks once if the storage is shared; afterwards the handle is the
    /// sole owner and further calls never copy.
    ///
    /// # Errors
    ///
    /// [`Error::Released`] if the handle is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowbuf::CowBuffer;
    ///
    /// let mut buf = CowBuffer::new(b"hello".to_vec());
    /// let other = buf.try_clone().unwrap();
    ///
    /// buf.make_mut()?.copy_from_slice(b"jello");
    /// assert_eq!(buf.view(), b"jello");
    /// assert_eq!(other.view(), b"hello");
    /// # Ok::<(), cowbuf::Error>(())
    /// ```
    pub fn make_mut(&mut self) -> Result<&mut [u8]> {
        let storage = self.storage.as_mut().ok_or(Error::Released)?;
        let refs = Arc::strong_count(storage);
        let data = Arc::make_mut(storage);
        if refs > 1 {
            debug!(len = data.len(), refs_left = refs - 1, "copy-on-write fork");
        }
        Ok(data.as_mut_slice())
    }

    /// Release this handle.
    ///
    /// Decrements the lineage count and frees the storage if this was the
    /// last handle. Releasing a released handle does nothing.
    pub fn release(&mut self) {
        let Some(storage) = self.storage.take() else {
            return;
        };
        match Arc::try_unwrap(storage) {
            Ok(data) => {
                debug!(len = data.len(), "buffer storage freed");
                drop(data);
            }
            // Racing last releases can both land here; dropping `shared`
            // still frees the storage exactly once.
            Err(shared) => {
                trace!(
                    refs_left = Arc::strong_count(&shared) - 1,
                    "buffer handle released"
                );
                drop(shared);
            }
        }
    }

    /// Consume the handle and return its bytes.
    ///
    /// The storage is returned without copying when this is the last handle
    /// in its lineage; otherwise the bytes are copied and the lineage loses
    /// one handle. A released handle yields an empty vector.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<u8> {
        match self.storage.take() {
            Some(storage) => Arc::try_unwrap(storage).unwrap_or_else(|shared| shared.to_vec()),
            None => Vec::new(),
        }
    }
}

impl Drop for CowBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

impl From<Vec<u8>> for CowBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for CowBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl From<String> for CowBuffer {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<&str> for CowBuffer {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for CowBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CowBuffer")
            .field("len", &self.len())
            .field("refs", &self.ref_count())
            .field("released", &self.is_released())
            .finish()
    }
}

impl PartialEq for CowBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl Eq for CowBuffer {}

impl PartialEq<[u8]> for CowBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.view() == *other
    }
}

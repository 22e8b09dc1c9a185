use std::fmt;
use std::ops::Deref;
use std::ptr;
use std::slice;

use libc::{c_char, c_uint, c_void};

/// A `malloc`-ed buffer handed over by the host, released with `free` when dropped.
pub struct CBuf {
    ptr: *mut u8,
    len: usize,
}

impl fmt::Pointer for CBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.ptr)
    }
}

impl fmt::Debug for CBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CBuf({:p}, {})", self.ptr, self.len)
    }
}

impl CBuf {
    /// Takes ownership of `len` bytes at `p`.
    ///
    /// A null `p` is an empty buffer.
    ///
    /// # Safety
    ///
    /// `p` must be null or a live `malloc` allocation of at least `len` bytes that nothing else frees.
    #[inline]
    pub unsafe fn from_raw_parts(p: *const c_char, len: c_uint) -> CBuf {
        if p.is_null() {
            CBuf {
                ptr: ptr::null_mut(),
                len: 0,
            }
        } else {
            CBuf {
                ptr: p as *mut u8,
                len: len as usize,
            }
        }
    }
}

impl Drop for CBuf {
    #[inline]
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            #[cfg(test)]
            crate::testing::note_free(self.ptr);

            unsafe { libc::free(self.ptr as *mut c_void) };

            self.ptr = ptr::null_mut();
        }
    }
}

impl Deref for CBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        if self.ptr.is_null() || self.len == 0 {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }
}

impl AsRef<[u8]> for CBuf {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self
    }
}

use std::ptr;

use libc::{c_char, c_int, c_uint};
use onigbind::{ffi, RegexRef, RegionRef};

/// One named group and the group numbers it refers to.
///
/// `name` holds `name_length` bytes without a terminator, or is null when empty.
/// `indices` is null when `indices_count` is zero.
#[repr(C)]
#[derive(Debug)]
pub struct GroupName {
    pub name: *mut c_char,
    pub name_length: c_int,
    pub indices: *mut c_int,
    pub indices_count: c_int,
}

/// The named groups of a compiled pattern, in the engine's enumeration order.
#[repr(C)]
#[derive(Debug)]
pub struct GroupNamesArray {
    pub count: c_uint,
    pub names: *mut GroupName,
}

/// The outcome of `newRegex`.
#[repr(C)]
#[derive(Debug)]
pub struct NewRegexResult {
    pub regex: ffi::OnigRegex,
    pub result: c_int,
    pub group_names: *mut GroupNamesArray,
}

/// The start and end offsets of every group of one match, `-1` for unmatched groups.
#[repr(C)]
#[derive(Debug)]
pub struct Region {
    pub group_start_indices: *mut c_int,
    pub group_end_indices: *mut c_int,
    pub group_count: c_uint,
}

/// A sequence of regions in discovery order.
///
/// The array does not own the regions it points to, `freeRegionsArrayWithRegions` frees both.
#[repr(C)]
#[derive(Debug)]
pub struct RegionsArray {
    pub count: c_uint,
    pub regions: *mut *mut Region,
}

/// The outcome of `searchFirstWithParam`.
#[repr(C)]
#[derive(Debug)]
pub struct SearchFirstResult {
    pub result: c_int,
    pub region: *mut Region,
}

/// The outcome of `searchAllWithParam`.
#[repr(C)]
#[derive(Debug)]
pub struct SearchAllResult {
    pub result: c_int,
    pub array: *mut RegionsArray,
}

/// Leaks `v` as a raw slice, null when empty.
pub(crate) fn into_raw_slice<T>(v: Vec<T>) -> (*mut T, usize) {
    if v.is_empty() {
        (ptr::null_mut(), 0)
    } else {
        let len = v.len();

        (Box::into_raw(v.into_boxed_slice()) as *mut T, len)
    }
}

/// Reclaims a slice leaked by `into_raw_slice`.
pub(crate) unsafe fn drop_raw_slice<T>(p: *mut T, len: usize) {
    if !p.is_null() {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(p, len)));
    }
}

impl GroupName {
    fn new(name: &[u8], indices: &[c_int]) -> Self {
        let (name, name_length) = into_raw_slice(name.to_vec());
        let (indices, indices_count) = into_raw_slice(indices.to_vec());

        GroupName {
            name: name as *mut c_char,
            name_length: name_length as c_int,
            indices,
            indices_count: indices_count as c_int,
        }
    }
}

impl Drop for GroupName {
    fn drop(&mut self) {
        unsafe {
            drop_raw_slice(self.name as *mut u8, self.name_length.max(0) as usize);
            drop_raw_slice(self.indices, self.indices_count.max(0) as usize);
        }
    }
}

impl GroupNamesArray {
    /// Copies the named groups of `regex`.
    pub(crate) fn new(regex: &RegexRef) -> Self {
        let count = regex.capture_names_len();
        let mut names = Vec::with_capacity(count);

        if count > 0 {
            regex.foreach_name_bytes(|name, indices| {
                names.push(GroupName::new(name, indices));

                names.len() < count
            });
        }

        let (names, count) = into_raw_slice(names);

        GroupNamesArray {
            count: count as c_uint,
            names,
        }
    }
}

impl Drop for GroupNamesArray {
    fn drop(&mut self) {
        unsafe { drop_raw_slice(self.names, self.count as usize) }
    }
}

impl Region {
    /// A region without groups.
    pub(crate) fn empty() -> Self {
        Region {
            group_start_indices: ptr::null_mut(),
            group_end_indices: ptr::null_mut(),
            group_count: 0,
        }
    }
}

impl<'a> From<&'a RegionRef> for Region {
    fn from(region: &RegionRef) -> Self {
        let (group_start_indices, count) = into_raw_slice(region.starts().to_vec());
        let (group_end_indices, _) = into_raw_slice(region.ends().to_vec());

        Region {
            group_start_indices,
            group_end_indices,
            group_count: count as c_uint,
        }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        unsafe {
            drop_raw_slice(self.group_start_indices, self.group_count as usize);
            drop_raw_slice(self.group_end_indices, self.group_count as usize);
        }
    }
}

impl RegionsArray {
    /// Hands out the regions as raw pointers, each one individually boxed.
    pub(crate) fn new(regions: Vec<Box<Region>>) -> Self {
        let (regions, count) = into_raw_slice(regions.into_iter().map(Box::into_raw).collect());

        RegionsArray {
            count: count as c_uint,
            regions,
        }
    }
}

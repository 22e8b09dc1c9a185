use std::iter::FusedIterator;
use std::slice;

use foreign_types::{foreign_type, ForeignType, ForeignTypeRef};
use libc::c_int;

use crate::{common::OnigError, ffi, Result};

foreign_type! {
    /// The capture offsets of one match.
    ///
    /// Group 0 is the whole match. Unmatched groups have no position.
    pub unsafe type Region: Send + Sync {
        type CType = ffi::OnigRegion;

        fn drop = free_region;
    }
}

unsafe fn free_region(region: *mut ffi::OnigRegion) {
    ffi::onig_region_free(region, 1)
}

impl Region {
    /// Allocate an empty region.
    pub fn new() -> Result<Region> {
        let region = unsafe { ffi::onig_region_new() };

        if region.is_null() {
            Err(OnigError::from(ffi::ONIGERR_MEMORY as c_int).into())
        } else {
            Ok(unsafe { Region::from_ptr(region) })
        }
    }
}

impl RegionRef {
    fn raw(&self) -> &ffi::OnigRegion {
        unsafe { &*self.as_ptr() }
    }

    /// The raw start offsets, including the `-1` sentinel of unmatched groups.
    pub fn starts(&self) -> &[c_int] {
        let raw = self.raw();

        if raw.beg.is_null() || raw.num_regs <= 0 {
            &[]
        } else {
            unsafe { slice::from_raw_parts(raw.beg, raw.num_regs as usize) }
        }
    }

    /// The raw end offsets, including the `-1` sentinel of unmatched groups.
    pub fn ends(&self) -> &[c_int] {
        let raw = self.raw();

        if raw.end.is_null() || raw.num_regs <= 0 {
            &[]
        } else {
            unsafe { slice::from_raw_parts(raw.end, raw.num_regs as usize) }
        }
    }

    /// The number of groups in the region, group 0 included.
    pub fn len(&self) -> usize {
        self.raw().num_regs.max(0) as usize
    }

    /// Returns `true` if the region holds no groups.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte offsets of the given group, `None` if it did not participate in the match.
    pub fn pos(&self, group: usize) -> Option<(usize, usize)> {
        let start = *self.starts().get(group)?;
        let end = *self.ends().get(group)?;

        if start < 0 || end < 0 {
            None
        } else {
            Some((start as usize, end as usize))
        }
    }

    /// Iterate the positions of all groups.
    pub fn iter(&self) -> Positions<'_> {
        Positions { region: self, group: 0 }
    }

    /// Forget all groups, keeping the allocation for the next search.
    pub fn clear(&mut self) {
        unsafe { ffi::onig_region_clear(self.as_ptr()) }
    }
}

impl<'a> IntoIterator for &'a RegionRef {
    type Item = Option<(usize, usize)>;
    type IntoIter = Positions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the group positions of a region.
pub struct Positions<'a> {
    region: &'a RegionRef,
    group: usize,
}

impl<'a> Iterator for Positions<'a> {
    type Item = Option<(usize, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.group < self.region.len() {
            let pos = self.region.pos(self.group);
            self.group += 1;
            Some(pos)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.region.len().saturating_sub(self.group);

        (n, Some(n))
    }
}

impl ExactSizeIterator for Positions<'_> {}

impl FusedIterator for Positions<'_> {}

use std::slice;

use derive_more::{Deref, Index, IntoIterator};
use foreign_types::ForeignTypeRef;
use libc::{c_int, c_void};

use crate::{compile::RegexRef, ffi};

/// A named capture group and the group numbers it refers to.
///
/// A name maps to several groups when the pattern declares it more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupName {
    /// The group name.
    pub name: String,
    /// One-based capture group numbers, in the engine's order.
    pub indices: Vec<u32>,
}

/// All named capture groups of a pattern, in the engine's enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, Index, IntoIterator)]
pub struct GroupNames(Vec<GroupName>);

impl GroupNames {
    /// Finds the group numbers for the given name.
    pub fn get(&self, name: &str) -> Option<&[u32]> {
        self.0
            .iter()
            .find(|group| group.name == name)
            .map(|group| group.indices.as_slice())
    }
}

unsafe extern "C" fn foreach_name_trampoline<F>(
    name: *const ffi::OnigUChar,
    name_end: *const ffi::OnigUChar,
    ngroup_num: c_int,
    group_nums: *mut c_int,
    _regex: ffi::OnigRegex,
    ctx: *mut c_void,
) -> c_int
where
    F: FnMut(&[u8], &[c_int]) -> bool,
{
    let callback = &mut *(ctx as *mut F);

    let name = if name.is_null() || name_end <= name {
        &[][..]
    } else {
        slice::from_raw_parts(name, name_end.offset_from(name) as usize)
    };
    let groups = if group_nums.is_null() || ngroup_num <= 0 {
        &[][..]
    } else {
        slice::from_raw_parts(group_nums as *const c_int, ngroup_num as usize)
    };

    if callback(name, groups) {
        0
    } else {
        1
    }
}

impl RegexRef {
    /// The number of named capture groups.
    pub fn capture_names_len(&self) -> usize {
        unsafe { ffi::onig_number_of_names(self.as_ptr()).max(0) as usize }
    }

    /// Calls `callback` once per named group with the raw name bytes and group numbers.
    ///
    /// Enumeration stops early when the callback returns `false`,
    /// in which case this returns `false`.
    pub fn foreach_name_bytes<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(&[u8], &[c_int]) -> bool,
    {
        let status = unsafe {
            ffi::onig_foreach_name(
                self.as_ptr(),
                Some(foreach_name_trampoline::<F>),
                &mut callback as *mut F as *mut c_void,
            )
        };

        status == 0
    }

    /// Calls `callback` once per named group with its name and group numbers.
    ///
    /// Enumeration stops early when the callback returns `false`,
    /// in which case this returns `false`.
    pub fn foreach_name<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(&str, &[u32]) -> bool,
    {
        let mut indices = Vec::new();

        self.foreach_name_bytes(|name, groups| {
            indices.clear();
            indices.extend(groups.iter().map(|&n| n as u32));

            callback(&String::from_utf8_lossy(name), &indices)
        })
    }

    /// The named capture groups, materialized in enumeration order.
    pub fn group_names(&self) -> GroupNames {
        let count = self.capture_names_len();
        let mut names = Vec::with_capacity(count);

        self.foreach_name(|name, indices| {
            names.push(GroupName {
                name: name.to_owned(),
                indices: indices.to_vec(),
            });

            names.len() < count
        });

        GroupNames(names)
    }

    /// The names of all named capture groups.
    pub fn capture_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.capture_names_len());

        self.foreach_name(|name, _| {
            names.push(name.to_owned());
            true
        });

        names
    }

    /// The group numbers declared with the given name.
    pub fn group_numbers(&self, name: &str) -> Vec<u32> {
        let mut numbers = Vec::new();

        self.foreach_name(|group, indices| {
            if group == name {
                numbers.extend_from_slice(indices);
                false
            } else {
                true
            }
        });

        numbers
    }
}

use std::ptr;

use foreign_types::{ForeignType, ForeignTypeRef};
use libc::{c_char, c_int, c_uint, c_void};
use onigbind::{ffi, Regex, RegexRef};

use crate::{
    buf::CBuf,
    types::{GroupNamesArray, NewRegexResult},
};

/// The host callback invoked by `callOnigForeachName` for every named group.
pub type ForeachNameCallback = unsafe extern "C" fn(
    name: *const ffi::OnigUChar,
    name_end: *const ffi::OnigUChar,
    ngroup_num: c_int,
    group_nums: *mut c_int,
    regex: ffi::OnigRegex,
    arg: *mut c_void,
) -> c_int;

/// Compiles a UTF-8 pattern.
///
/// Takes ownership of `text` and frees it before returning.
/// A null `syntax` selects the Ruby syntax.
///
/// On success `result` is `ONIG_NORMAL`, `regex` owns the compiled pattern
/// and `group_names` lists its named groups.
/// On failure `result` is the engine error code and both pointers are null.
///
/// # Safety
///
/// `text` must be null or a `malloc`-ed buffer of `text_len` bytes,
/// `syntax` must be null or one of the engine's syntax definitions.
#[no_mangle]
pub unsafe extern "C" fn newRegex(
    text: *const c_char,
    text_len: c_uint,
    options: ffi::OnigOptionType,
    syntax: *mut ffi::OnigSyntaxType,
) -> NewRegexResult {
    let pattern = CBuf::from_raw_parts(text, text_len);

    match Regex::compile(&pattern, options, syntax) {
        Ok(regex) => {
            let group_names = Box::into_raw(Box::new(GroupNamesArray::new(&regex)));

            NewRegexResult {
                regex: regex.into_ptr(),
                result: ffi::ONIG_NORMAL as c_int,
                group_names,
            }
        }
        Err(err) => NewRegexResult {
            regex: ptr::null_mut(),
            result: err.code(),
            group_names: ptr::null_mut(),
        },
    }
}

/// Releases a compiled pattern returned by `newRegex`.
///
/// # Safety
///
/// `regex` must be null or a live handle from `newRegex`, released only once.
#[no_mangle]
pub unsafe extern "C" fn freeRegex(regex: ffi::OnigRegex) {
    if !regex.is_null() {
        drop(Regex::from_ptr(regex));
    }
}

/// Releases a group name array returned by `newRegex`, with every name and index list in it.
///
/// # Safety
///
/// `array` must be null or a live array from `newRegex`, released only once.
#[no_mangle]
pub unsafe extern "C" fn freeGroupNamesArray(array: *mut GroupNamesArray) {
    if !array.is_null() {
        drop(Box::from_raw(array));
    }
}

/// Enumerates the named groups of `regex`, forwarding each one to `callback` with `arg`.
///
/// Enumeration stops at the first non-zero callback result, which is returned.
/// Returns `0` when every group was visited and `ONIGERR_INVALID_ARGUMENT`
/// for a null handle or callback.
///
/// # Safety
///
/// `regex` must be null or a live handle from `newRegex`.
#[no_mangle]
pub unsafe extern "C" fn callOnigForeachName(
    regex: ffi::OnigRegex,
    callback: Option<ForeachNameCallback>,
    arg: *mut c_void,
) -> c_int {
    let callback = match callback {
        Some(callback) if !regex.is_null() => callback,
        _ => return ffi::ONIGERR_INVALID_ARGUMENT as c_int,
    };

    let mut status = 0;

    RegexRef::from_ptr(regex).foreach_name_bytes(|name, groups| {
        let start = name.as_ptr();

        status = callback(
            start,
            start.add(name.len()),
            groups.len() as c_int,
            groups.as_ptr() as *mut c_int,
            regex,
            arg,
        );

        status == 0
    });

    status
}

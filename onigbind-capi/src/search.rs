use std::ptr;

use foreign_types::ForeignTypeRef;
use libc::{c_char, c_int, c_uint};
use onigbind::{ffi, Limits, MatchParam, Matching, OnigError, RegexRef, Result, SearchOptions};

use crate::{
    buf::CBuf,
    types::{drop_raw_slice, Region, RegionsArray, SearchAllResult, SearchFirstResult},
};

unsafe fn regex_ref<'a>(regex: ffi::OnigRegex) -> Result<&'a RegexRef> {
    if regex.is_null() {
        Err(OnigError::from(ffi::ONIGERR_INVALID_ARGUMENT as c_int).into())
    } else {
        Ok(RegexRef::from_ptr(regex))
    }
}

unsafe fn search_first(
    regex: ffi::OnigRegex,
    text: &[u8],
    from: usize,
    to: usize,
    options: SearchOptions,
    limits: Limits,
) -> Result<(c_int, Region)> {
    let regex = regex_ref(regex)?;
    let param = MatchParam::with_limits(limits)?;
    let mut region = onigbind::Region::new()?;

    let pos = regex.search_with_param(text, from, to, options, Some(&mut *region), &param)?;

    Ok((
        pos.map_or(ffi::ONIG_MISMATCH as c_int, |pos| pos as c_int),
        Region::from(&*region),
    ))
}

unsafe fn search_all(
    regex: ffi::OnigRegex,
    text: &[u8],
    options: SearchOptions,
    limits: Limits,
) -> Result<Vec<Box<Region>>> {
    let regex = regex_ref(regex)?;
    let param = MatchParam::with_limits(limits)?;
    let mut regions = vec![];

    regex.scan_with_param(text, 0, text.len(), options, &param, |region| {
        regions.push(Box::new(Region::from(region)));

        Matching::Continue
    })?;

    Ok(regions)
}

/// Finds the first match of `regex` starting between `from` and `to`.
///
/// Takes ownership of `text` and frees it before returning.
/// A zero `max_stack_size` or `retry_limit_in_match` keeps the engine default.
///
/// `result` is the match position, `ONIG_MISMATCH`, or an engine error code.
/// `region` is always set, empty when the search failed.
///
/// # Safety
///
/// `regex` must be null or a live handle from `newRegex`,
/// `text` must be null or a `malloc`-ed buffer of `text_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn searchFirstWithParam(
    regex: ffi::OnigRegex,
    text: *const c_char,
    text_len: c_uint,
    from: c_uint,
    to: c_uint,
    options: ffi::OnigOptionType,
    max_stack_size: c_uint,
    retry_limit_in_match: c_uint,
) -> SearchFirstResult {
    let text = CBuf::from_raw_parts(text, text_len);

    let (result, region) = match search_first(
        regex,
        &text,
        from as usize,
        to as usize,
        SearchOptions::from_bits_unchecked(options),
        Limits::from_raw(max_stack_size, retry_limit_in_match),
    ) {
        Ok(found) => found,
        Err(err) => {
            debug!("fail to search {:?}, {}", text, err);

            (err.code(), Region::empty())
        }
    };

    SearchFirstResult {
        result,
        region: Box::into_raw(Box::new(region)),
    }
}

/// Finds every non-overlapping match of `regex` in the whole text.
///
/// `from` and `to` are ignored, the scan always covers `0..text_len`.
/// Takes ownership of `text` and frees it before returning.
/// A zero `max_stack_size` or `retry_limit_in_match` keeps the engine default.
///
/// On success `result` is `0` and `array` lists the matches in order, possibly none.
/// On failure `result` is the engine error code and `array` is null.
///
/// # Safety
///
/// `regex` must be null or a live handle from `newRegex`,
/// `text` must be null or a `malloc`-ed buffer of `text_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn searchAllWithParam(
    regex: ffi::OnigRegex,
    text: *const c_char,
    text_len: c_uint,
    _from: c_uint,
    _to: c_uint,
    options: ffi::OnigOptionType,
    max_stack_size: c_uint,
    retry_limit_in_match: c_uint,
) -> SearchAllResult {
    let text = CBuf::from_raw_parts(text, text_len);

    match search_all(
        regex,
        &text,
        SearchOptions::from_bits_unchecked(options),
        Limits::from_raw(max_stack_size, retry_limit_in_match),
    ) {
        Ok(regions) => {
            trace!("found {} matches in {:?}", regions.len(), text);

            SearchAllResult {
                result: ffi::ONIG_NORMAL as c_int,
                array: Box::into_raw(Box::new(RegionsArray::new(regions))),
            }
        }
        Err(err) => {
            debug!("fail to search {:?}, {}", text, err);

            SearchAllResult {
                result: err.code(),
                array: ptr::null_mut(),
            }
        }
    }
}

/// Releases a region returned by `searchFirstWithParam` or held by a regions array.
///
/// # Safety
///
/// `region` must be null or a live region, released only once.
#[no_mangle]
pub unsafe extern "C" fn freeRegion(region: *mut Region) {
    if !region.is_null() {
        drop(Box::from_raw(region));
    }
}

/// Releases a regions array, leaving the regions it points to alive.
///
/// # Safety
///
/// `array` must be null or a live array from `searchAllWithParam`, released only once.
#[no_mangle]
pub unsafe extern "C" fn freeRegionsArray(array: *mut RegionsArray) {
    if !array.is_null() {
        let array = Box::from_raw(array);

        drop_raw_slice(array.regions, array.count as usize);
    }
}

/// Releases a regions array together with every region in it.
///
/// # Safety
///
/// `array` must be null or a live array from `searchAllWithParam`,
/// none of whose regions were released already.
#[no_mangle]
pub unsafe extern "C" fn freeRegionsArrayWithRegions(array: *mut RegionsArray) {
    if array.is_null() {
        return;
    }

    if !(*array).regions.is_null() {
        for &region in std::slice::from_raw_parts((*array).regions, (*array).count as usize) {
            freeRegion(region);
        }
    }

    freeRegionsArray(array);
}

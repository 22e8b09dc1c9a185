mod error;
mod options;
mod syntax;

pub use self::error::{ErrorKind, OnigError};
pub use self::options::{RegexOptions, SearchOptions};
pub use self::syntax::Syntax;

use std::ffi::CStr;
use std::ptr;
use std::sync::Once;

use crate::{error::AsResult, ffi};

/// The version of the linked Oniguruma library.
pub fn version() -> Result<semver::Version, semver::Error> {
    version_str().to_string_lossy().parse()
}

/// Utility function for identifying the linked Oniguruma release.
pub fn version_str() -> &'static CStr {
    unsafe { CStr::from_ptr(ffi::onig_version()) }
}

static INIT: Once = Once::new();

/// Registers the UTF-8 encoding with Oniguruma, once per process.
pub(crate) fn init() {
    INIT.call_once(|| {
        let mut encodings = [utf8()];

        let status = unsafe { ffi::onig_initialize(encodings.as_mut_ptr(), encodings.len() as _) };

        match status.ok() {
            Ok(()) => debug!("initialized Oniguruma {}", version_str().to_string_lossy()),
            Err(err) => warn!("fail to initialize Oniguruma, {}", err),
        }
    })
}

/// The only encoding patterns and texts are compiled and searched with.
pub(crate) fn utf8() -> ffi::OnigEncoding {
    ptr::addr_of_mut!(ffi::OnigEncodingUTF8)
}

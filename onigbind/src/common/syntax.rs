use std::ptr;

use crate::{ffi, regex::Dialect};

/// The built-in regular expression syntaxes.
///
/// Each syntax defines a flavour of regex syntax, and the replacement
/// template dialect used by `replace` and friends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// Plain text.
    Asis,
    /// POSIX Basic RE.
    PosixBasic,
    /// POSIX Extended RE.
    PosixExtended,
    /// Emacs.
    Emacs,
    /// grep.
    Grep,
    /// GNU regex.
    GnuRegex,
    /// Java (Sun java.util.regex).
    Java,
    /// Perl.
    Perl,
    /// Perl + named group.
    PerlNg,
    /// Ruby.
    Ruby,
    /// Python.
    Python,
    /// Oniguruma.
    Oniguruma,
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::Ruby
    }
}

impl Syntax {
    const ALL: [Syntax; 12] = [
        Syntax::Asis,
        Syntax::PosixBasic,
        Syntax::PosixExtended,
        Syntax::Emacs,
        Syntax::Grep,
        Syntax::GnuRegex,
        Syntax::Java,
        Syntax::Perl,
        Syntax::PerlNg,
        Syntax::Ruby,
        Syntax::Python,
        Syntax::Oniguruma,
    ];

    /// The engine's syntax definition.
    pub fn as_ptr(self) -> *mut ffi::OnigSyntaxType {
        match self {
            Syntax::Asis => ptr::addr_of_mut!(ffi::OnigSyntaxASIS),
            Syntax::PosixBasic => ptr::addr_of_mut!(ffi::OnigSyntaxPosixBasic),
            Syntax::PosixExtended => ptr::addr_of_mut!(ffi::OnigSyntaxPosixExtended),
            Syntax::Emacs => ptr::addr_of_mut!(ffi::OnigSyntaxEmacs),
            Syntax::Grep => ptr::addr_of_mut!(ffi::OnigSyntaxGrep),
            Syntax::GnuRegex => ptr::addr_of_mut!(ffi::OnigSyntaxGnuRegex),
            Syntax::Java => ptr::addr_of_mut!(ffi::OnigSyntaxJava),
            Syntax::Perl => ptr::addr_of_mut!(ffi::OnigSyntaxPerl),
            Syntax::PerlNg => ptr::addr_of_mut!(ffi::OnigSyntaxPerl_NG),
            Syntax::Ruby => ptr::addr_of_mut!(ffi::OnigSyntaxRuby),
            Syntax::Python => ptr::addr_of_mut!(ffi::OnigSyntaxPython),
            Syntax::Oniguruma => ptr::addr_of_mut!(ffi::OnigSyntaxOniguruma),
        }
    }

    /// Finds the built-in syntax with the given engine definition.
    pub fn from_ptr(p: *const ffi::OnigSyntaxType) -> Option<Syntax> {
        Syntax::ALL.iter().copied().find(|syntax| ptr::eq(syntax.as_ptr(), p))
    }

    /// The replacement template dialect of this syntax.
    pub fn dialect(self) -> Dialect {
        match self {
            Syntax::Python => Dialect::Python,
            Syntax::Java => Dialect::Java,
            _ => Dialect::Ruby,
        }
    }
}

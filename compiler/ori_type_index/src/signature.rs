//! Signature strings and their per-environment framing.
//!
//! The raw signature is the compiler's name for the naming function
//! `raw_signature` instantiated at `T`, e.g.
//! `ori_type_index::signature::raw_signature<i32>`. Only the text around the
//! type parameter differs between environments, so that text lives in one
//! table ([`Environment::framing`]) and the hashing side never sees it.
//!
//! # Platform Support
//!
//! - **Host targets**: `core::any::type_name_of_val` on the naming function.
//! - **Device targets** (`nvptx64`, `amdgpu`): no framing. Every identity
//!   request aborts the process instead of producing a placeholder id.

use std::fmt;

use crate::extract;
use crate::fatal;

/// The prefix and suffix an environment emits around a type's spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignatureFraming {
    prefix: &'static str,
    suffix: &'static str,
}

impl SignatureFraming {
    #[inline]
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        SignatureFraming { prefix, suffix }
    }

    #[inline]
    pub const fn prefix(self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn suffix(self) -> &'static str {
        self.suffix
    }

    /// Extract the type spelling from `raw`, panicking if it is malformed.
    ///
    /// Meant for `const` contexts, where the panic fails the build.
    #[inline]
    pub const fn extract(self, raw: &str) -> &str {
        extract::extract(self.prefix, self.suffix, raw)
    }

    /// Extract the type spelling from `raw`, aborting if it is malformed.
    ///
    /// A malformed signature means the framing does not belong to the
    /// compiler that produced `raw`. Continuing would hand out ids that
    /// compare equal for unrelated types, so the process is terminated.
    pub fn resolve(self, raw: &str) -> &str {
        match extract::split(self.prefix, self.suffix, raw) {
            Ok(name) => name,
            Err(error) => fatal::malformed_signature(self, raw, error),
        }
    }
}

/// Framing produced by `type_name_of_val(&raw_signature::<T>)`.
pub const RUSTC_FRAMING: SignatureFraming =
    SignatureFraming::new(concat!(module_path!(), "::raw_signature<"), ">");

/// Compilation environments known to this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Host code compiled by rustc.
    Rustc,
    /// Accelerator device code; type names are unavailable.
    Device,
}

impl Environment {
    /// The environment this crate was compiled for.
    #[cfg(not(any(target_arch = "nvptx64", target_arch = "amdgpu")))]
    pub const CURRENT: Environment = Environment::Rustc;

    /// The environment this crate was compiled for.
    #[cfg(any(target_arch = "nvptx64", target_arch = "amdgpu"))]
    pub const CURRENT: Environment = Environment::Device;

    /// The framing used in this environment, if it supports type names.
    pub const fn framing(self) -> Option<SignatureFraming> {
        match self {
            Environment::Rustc => Some(RUSTC_FRAMING),
            Environment::Device => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Rustc => "rustc",
            Environment::Device => "device",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The compiler's spelling of this function at `T`.
///
/// The function names itself, type parameter included.
pub(crate) fn raw_signature<T: ?Sized>() -> &'static str {
    core::any::type_name_of_val(&raw_signature::<T>)
}

/// Canonical spelling of `T` in the current environment.
#[inline]
pub(crate) fn canonical_name<T: ?Sized>() -> &'static str {
    match Environment::CURRENT.framing() {
        Some(framing) => framing.resolve(raw_signature::<T>()),
        None => fatal::unsupported_target(Environment::CURRENT),
    }
}

/// Strip top-level reference indirection from a canonical spelling.
///
/// `&Foo`, `&mut Foo` and `&&mut Foo` all become `Foo`. Canonical names elide
/// the lifetime of top-level references (`&'a Foo` is spelled `&Foo`), so only
/// `&` and `&mut ` remain to drop. Lifetimes nested deeper, such as the `'_`
/// in `fn(&'_ u8)`, are left untouched.
pub(crate) const fn strip_references(name: &str) -> &str {
    let mut bytes = name.as_bytes();
    while let [b'&', rest @ ..] = bytes {
        bytes = match rest {
            [b'm', b'u', b't', b' ', rest @ ..] => rest,
            _ => rest,
        };
    }
    // Only ASCII was removed from the front.
    match core::str::from_utf8(bytes) {
        Ok(stripped) => stripped,
        Err(_) => name,
    }
}

#[cfg(test)]
mod tests;

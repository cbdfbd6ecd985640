//! Ori Type Index - build-stable type identifiers
//!
//! Gives every statically known type a 64-bit [`TypeId`] and a readable
//! fully qualified name, with no registration, no allocation and no global
//! state. The runtime uses these ids to answer "is this the same type as
//! that" for type-erased values.
//!
//! # Pipeline
//!
//! ```text
//! raw signature ──extract──▶ canonical name ──crc64──▶ u64 ──▶ TypeId
//! ```
//!
//! - [`signature`]: per-environment framing of the compiler's signature text
//! - [`extract`](fn@extract): narrows a signature to the type's spelling
//! - [`crc64`](mod@crc64): CRC-64/XZ over the spelling
//! - [`TypeId`]: the comparable, hashable, ordered result
//!
//! # Guarantees
//!
//! - The same type yields the same id on every call within one build, on
//!   any thread. Ids are not stable across builds or compilers.
//! - Ids are taken over the value type: `Foo`, `&Foo` and `&mut Foo` share one.
//! - Distinct types collide only if their CRC-64 collides, or if the
//!   compiler spells them identically (e.g. two closures in one function).
//! - Malformed signatures and device targets abort the process. No
//!   placeholder id is ever returned.

pub mod crc64;
mod extract;
mod fatal;
pub mod signature;
mod type_id;

pub use crc64::{crc64, Crc64};
pub use extract::extract;
pub use signature::{Environment, SignatureFraming};
pub use type_id::TypeId;

/// Comparable id of `T`, ignoring top-level references.
///
/// ```
/// use ori_type_index::get_type_id;
///
/// assert_eq!(get_type_id::<String>(), get_type_id::<&String>());
/// assert_ne!(get_type_id::<String>(), get_type_id::<str>());
/// ```
///
/// Aborts on targets without type names (see [`Environment`]).
#[inline]
pub fn get_type_id<T: ?Sized>() -> TypeId {
    TypeId::from_name(signature::canonical_name::<T>())
}

/// Fully qualified name of `T` as the compiler spells it.
///
/// Meant for diagnostics. Unlike [`get_type_id`], references are kept:
///
/// ```
/// use ori_type_index::get_fully_qualified_type_name;
///
/// assert_eq!(
///     get_fully_qualified_type_name::<Option<u8>>(),
///     "core::option::Option<u8>"
/// );
/// assert_eq!(get_fully_qualified_type_name::<&str>(), "&str");
/// ```
///
/// Aborts on targets without type names (see [`Environment`]).
#[inline]
pub fn get_fully_qualified_type_name<T: ?Sized>() -> &'static str {
    signature::canonical_name::<T>()
}

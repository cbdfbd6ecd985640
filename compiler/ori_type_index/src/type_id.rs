//! Checksum-based type identifier.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::crc64::crc64;
use crate::signature::strip_references;

/// Identifier of a statically known type, valid within one build.
///
/// Wraps the CRC-64 of the type's canonical name. Two ids are equal iff their
/// checksums are; the ordering is the checksum's integer order and exists
/// only so ids can key ordered containers.
///
/// # Layout
/// `#[repr(transparent)]` over `u64`, so ids are as cheap to copy and compare
/// as the integer itself.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct TypeId(u64);

const _: () = assert!(std::mem::size_of::<TypeId>() == 8);

impl TypeId {
    /// Wrap an already computed checksum.
    #[inline]
    pub const fn from_checksum(checksum: u64) -> Self {
        TypeId(checksum)
    }

    /// Id of the type whose canonical name is `name`.
    ///
    /// Top-level references are stripped first, as for
    /// [`get_type_id`](crate::get_type_id), so the result is bit-identical to
    /// what that computes at runtime:
    ///
    /// ```
    /// use ori_type_index::{get_type_id, TypeId};
    ///
    /// const I32: TypeId = TypeId::from_name("i32");
    /// const REF_I32: TypeId = TypeId::from_name("&i32");
    /// assert_eq!(get_type_id::<i32>(), I32);
    /// assert_eq!(get_type_id::<&i32>(), REF_I32);
    /// ```
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        TypeId(crc64(strip_references(name).as_bytes()))
    }

    /// Id of `T`. Same as [`get_type_id::<T>()`](crate::get_type_id).
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        crate::get_type_id::<T>()
    }

    /// The underlying checksum.
    #[inline]
    pub const fn checksum(self) -> u64 {
        self.0
    }
}

impl Hash for TypeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({:#018x})", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl From<TypeId> for u64 {
    #[inline]
    fn from(id: TypeId) -> u64 {
        id.0
    }
}

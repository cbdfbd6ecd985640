//! Canonical type-name extraction.
//!
//! A compiler-synthesized signature embeds the type's spelling at a fixed
//! position between an environment-specific prefix and suffix. Extraction
//! checks that framing and narrows the view to the spelling in between; the
//! underlying characters are never copied.
//!
//! Everything here is a `const fn`. A malformed signature panics, which
//! fails the build when evaluated in a `const` item.

/// Why a signature did not match its expected framing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SignatureError {
    #[error("signature does not start with the expected prefix")]
    MissingPrefix,
    #[error("signature does not end with the expected suffix")]
    MissingSuffix,
    #[error("signature prefix and suffix overlap")]
    Overlapping,
    #[error("signature frames an empty type name")]
    EmptyName,
    #[error("type name is not valid UTF-8")]
    InvalidUtf8,
}

const fn starts_with(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let mut i = 0;
    while i < needle.len() {
        if haystack[i] != needle[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn ends_with(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let offset = haystack.len() - needle.len();
    let mut i = 0;
    while i < needle.len() {
        if haystack[offset + i] != needle[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Narrow `raw` to the part strictly between `prefix` and `suffix`.
pub(crate) const fn split<'a>(
    prefix: &str,
    suffix: &str,
    raw: &'a str,
) -> Result<&'a str, SignatureError> {
    let bytes = raw.as_bytes();
    if !starts_with(bytes, prefix.as_bytes()) {
        return Err(SignatureError::MissingPrefix);
    }
    if !ends_with(bytes, suffix.as_bytes()) {
        return Err(SignatureError::MissingSuffix);
    }
    if prefix.len() + suffix.len() > bytes.len() {
        return Err(SignatureError::Overlapping);
    }
    if prefix.len() + suffix.len() == bytes.len() {
        return Err(SignatureError::EmptyName);
    }

    let (_, rest) = bytes.split_at(prefix.len());
    let (name, _) = rest.split_at(rest.len() - suffix.len());
    // Prefix and suffix are whole strings, so both cuts land on char boundaries.
    match core::str::from_utf8(name) {
        Ok(name) => Ok(name),
        Err(_) => Err(SignatureError::InvalidUtf8),
    }
}

/// Extract the type spelling framed by `prefix` and `suffix` in `raw`.
///
/// # Panics
///
/// Panics if `raw` is not exactly `prefix`, a non-empty name, then `suffix`.
/// In a `const` context that panic is a compile error:
///
/// ```
/// use ori_type_index::extract;
///
/// const NAME: &str = extract("fn sample<", ">", "fn sample<N::Foo<int>>");
/// assert_eq!(NAME, "N::Foo<int>");
/// ```
///
/// ```compile_fail
/// use ori_type_index::extract;
///
/// const NAME: &str = extract("fn sample<", ">", "fn other<N::Foo<int>>");
/// assert_eq!(NAME, "N::Foo<int>");
/// ```
pub const fn extract<'a>(prefix: &str, suffix: &str, raw: &'a str) -> &'a str {
    match split(prefix, suffix, raw) {
        Ok(name) => name,
        Err(SignatureError::MissingPrefix) => {
            panic!("malformed signature: missing expected prefix")
        }
        Err(SignatureError::MissingSuffix) => {
            panic!("malformed signature: missing expected suffix")
        }
        Err(SignatureError::Overlapping) => {
            panic!("malformed signature: prefix and suffix overlap")
        }
        Err(SignatureError::EmptyName) => panic!("malformed signature: empty type name"),
        Err(SignatureError::InvalidUtf8) => panic!("malformed signature: invalid UTF-8"),
    }
}

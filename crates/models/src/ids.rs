//! Prefixed resource identifiers, e.g. `com_V1StGXR8Z5jdHi6BmyT3a`.
//!
//! An id is a type prefix (three lowercase ASCII letters and `_`) followed by
//! 21 random alphanumeric characters, 25 characters in total. The suffix
//! carries ~125 bits of randomness so ids can be minted without coordination.

use rand::{distributions::Alphanumeric, Rng};

use crate::errors::ModelError;

pub const PREFIX_LEN: usize = 4;
pub const SUFFIX_LEN: usize = 21;
pub const ID_LEN: usize = PREFIX_LEN + SUFFIX_LEN;

/// A borrowed view over a well-formed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedId<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Mint a new id under `prefix`.
///
/// `prefix` must itself be well-formed (see [`is_prefix`]); resource types
/// declare theirs as constants so this is checked in tests, not at runtime.
pub fn generate(prefix: &str) -> String {
    debug_assert!(is_prefix(prefix), "malformed id prefix {prefix:?}");
    let mut id = String::with_capacity(ID_LEN);
    id.push_str(prefix);
    id.extend(
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from),
    );
    id
}

pub fn is_prefix(prefix: &str) -> bool {
    let bytes = prefix.as_bytes();
    bytes.len() == PREFIX_LEN
        && bytes[..PREFIX_LEN - 1].iter().all(u8::is_ascii_lowercase)
        && bytes[PREFIX_LEN - 1] == b'_'
}

/// Split an id into prefix and suffix, rejecting anything malformed.
pub fn parse(id: &str) -> Result<ParsedId<'_>, ModelError> {
    if id.len() != ID_LEN || !id.is_ascii() {
        return Err(ModelError::InvalidId(id.to_string()));
    }
    let (prefix, suffix) = id.split_at(PREFIX_LEN);
    if !is_prefix(prefix) || !suffix.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ModelError::InvalidId(id.to_string()));
    }
    Ok(ParsedId { prefix, suffix })
}

pub fn is_resource_id(id: &str) -> bool {
    parse(id).is_ok()
}

/// True when `id` is well-formed and minted under `prefix`.
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    matches!(parse(id), Ok(p) if p.prefix == prefix)
}

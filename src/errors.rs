//! The error taxonomy of the associative array.
//!
//! There are exactly two failure kinds: storing the absent key, and looking
//! up a key that is not present. Everything else on the array either cannot
//! fail or reports "not there" through its return value.

use core::error::Error;
use core::fmt;

/// The absent key was passed to [`set`].
///
/// Only [`set`] rejects the absent key; [`get`], [`has_key`], and [`remove`]
/// treat it as a key that can never match anything stored.
///
/// [`set`]: crate::AssocArray::set
/// [`get`]: crate::AssocArray::get
/// [`has_key`]: crate::AssocArray::has_key
/// [`remove`]: crate::AssocArray::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKeyError;

impl fmt::Display for InvalidKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the absent key cannot be stored")
    }
}

impl Error for InvalidKeyError {}

/// No entry with an equal key exists.
///
/// Returned by [`get`] and [`get_mut`], including on an empty array.
/// [`has_key`] reports the same condition as `false` and [`remove`] as a
/// silent no-op; neither surfaces this error.
///
/// [`get`]: crate::AssocArray::get
/// [`get_mut`]: crate::AssocArray::get_mut
/// [`has_key`]: crate::AssocArray::has_key
/// [`remove`]: crate::AssocArray::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFoundError;

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found")
    }
}

impl Error for KeyNotFoundError {}

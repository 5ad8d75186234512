#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// An associative array over a growable slot buffer.
///
/// This module provides `AssocArray`, an insertion-ordered key/value
/// collection that looks keys up by linear scan.
pub mod array;

pub mod errors;

/// An explicitly-empty value wrapper that renders as `null`.
pub mod nullable;

pub use array::AssocArray;
pub use array::DEFAULT_CAPACITY;
pub use array::Iter;
pub use array::Keys;
pub use array::Values;
pub use errors::InvalidKeyError;
pub use errors::KeyNotFoundError;
pub use nullable::Nullable;

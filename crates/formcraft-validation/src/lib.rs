//! formcraft validation primitives
//!
//! Pure checks over raw control values, compatible with both std and no_std
//! environments. The schema-aware engine in `formcraft` builds the user-facing
//! messages on top of these.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod numeric;
pub mod string;

pub use numeric::*;
pub use string::*;

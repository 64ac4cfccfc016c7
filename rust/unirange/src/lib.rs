//! Unicode property sets as ordered lists of code point ranges.
//!
//! A [`UnicodeRangeSet`] is an immutable set of code points, stored as its
//! canonical list of inclusive ranges: sorted, disjoint and non-adjacent.
//! Sets are resolved from a named Unicode property (and optional value)
//! through a [`PropertyDataProvider`], can be complemented over the whole code
//! point space, and expose indexed access to their ranges. This is the
//! character-class primitive a regular-expression compiler consumes.
//!
//! The crate does not ship property data itself; see `unirange-props` for a
//! provider backed by compiled ICU data.

pub mod provider;
pub mod range_set;
#[cfg(test)]
mod tests;

pub use provider::PropertyDataProvider;
pub use range_set::UnicodeRangeSet;

pub use unirange_common::{Error, ErrorKind, Result};
pub use unirange_ranges::{CodePoint, CodePointRange, MAX_CODE_POINT};

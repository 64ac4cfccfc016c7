//! Inclusive code point ranges and the algorithms over sorted lists of them.
//!
//! This crate works with lists of [`CodePointRange`] values over the full
//! Unicode code point space `[0, 0x10FFFF]`. It offers:
//!
//! - **Validation**: checked construction of ranges from raw `u32` bounds
//! - **Normalization**: sorting and coalescing arbitrary range lists into the
//!   canonical sorted, disjoint, non-adjacent form
//! - **Complement**: a streaming gap walk over a canonical range list
//! - **Search**: binary search for the range containing a code point
//!
//! # Key Types
//!
//! - [`CodePointRange`] - An inclusive `[start, end]` range of code points
//! - [`ComplementRanges`] - Iterator adapter yielding the gaps of a canonical list

pub mod code_point_range;
pub mod complement;
pub mod normalize;
pub mod search;

pub use code_point_range::{CodePoint, CodePointRange, MAX_CODE_POINT};
pub use complement::{ComplementRanges, complement_ranges};
pub use normalize::{is_normalized, normalize_ranges};
pub use search::search_code_point;

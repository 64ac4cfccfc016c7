//! The inclusive code point range type.

use std::{fmt, ops::RangeInclusive};

/// A Unicode code point: an integer in `[0, 0x10FFFF]`.
///
/// Surrogate code points (`0xD800..=0xDFFF`) are valid code points here; sets
/// operate on raw code points rather than on Unicode scalar values.
pub type CodePoint = u32;

/// The largest Unicode code point.
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// An inclusive range `[start, end]` of code points.
///
/// A `CodePointRange` is never empty: construction guarantees
/// `start <= end <= MAX_CODE_POINT`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePointRange {
    start: CodePoint,
    end: CodePoint,
}

impl CodePointRange {
    /// The range covering the whole code point space.
    pub const FULL: CodePointRange = CodePointRange {
        start: 0,
        end: MAX_CODE_POINT,
    };

    /// Creates a range from its inclusive bounds.
    ///
    /// Returns `None` when `start > end` or `end > MAX_CODE_POINT`.
    pub const fn try_new(start: CodePoint, end: CodePoint) -> Option<CodePointRange> {
        if start <= end && end <= MAX_CODE_POINT {
            Some(CodePointRange { start, end })
        } else {
            None
        }
    }

    /// Creates a range holding a single code point.
    pub const fn single(cp: CodePoint) -> Option<CodePointRange> {
        Self::try_new(cp, cp)
    }

    #[inline]
    pub const fn start(&self) -> CodePoint {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> CodePoint {
        self.end
    }

    /// Number of code points in the range (always at least one).
    #[inline]
    pub const fn size(&self) -> u32 {
        self.end - self.start + 1
    }

    #[inline]
    pub const fn contains(&self, cp: CodePoint) -> bool {
        self.start <= cp && cp <= self.end
    }

    /// Returns `true` if `other` starts no later than one past the end of `self`,
    /// i.e. the two ranges overlap or touch and could be merged into one.
    /// Assumes `self.start <= other.start`.
    #[inline]
    pub const fn touches(&self, other: &CodePointRange) -> bool {
        other.start <= self.end.saturating_add(1)
    }

    /// The bounds as a standard library inclusive range.
    #[inline]
    pub fn to_range_inclusive(&self) -> RangeInclusive<CodePoint> {
        self.start..=self.end
    }

    pub(crate) const fn new_unchecked(start: CodePoint, end: CodePoint) -> CodePointRange {
        debug_assert!(start <= end && end <= MAX_CODE_POINT);
        CodePointRange { start, end }
    }
}

impl fmt::Debug for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}..=U+{:04X}", self.start, self.end)
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "U+{:04X}", self.start)
        } else {
            write!(f, "U+{:04X}..U+{:04X}", self.start, self.end)
        }
    }
}

impl From<CodePointRange> for RangeInclusive<CodePoint> {
    fn from(range: CodePointRange) -> Self {
        range.to_range_inclusive()
    }
}

impl TryFrom<RangeInclusive<CodePoint>> for CodePointRange {
    type Error = RangeInclusive<CodePoint>;

    /// Fails with the original range when it is empty or exceeds the code point space.
    fn try_from(range: RangeInclusive<CodePoint>) -> Result<Self, Self::Error> {
        CodePointRange::try_new(*range.start(), *range.end()).ok_or(range)
    }
}

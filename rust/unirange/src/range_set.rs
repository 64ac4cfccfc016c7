//! An immutable set of code points stored as a canonical list of inclusive ranges.

use std::{fmt, ops::RangeInclusive};

use unirange_common::{Error, Result};
use unirange_ranges::{
    CodePoint, CodePointRange, complement_ranges, normalize_ranges, search_code_point,
};

use crate::PropertyDataProvider;

/// An immutable set of Unicode code points, stored as a list of inclusive ranges.
///
/// The ranges are always in canonical form:
/// - sorted by `start` in ascending order;
/// - pairwise disjoint (`ranges[i].end < ranges[i + 1].start`);
/// - maximally merged (`ranges[i].end + 1 < ranges[i + 1].start`).
///
/// Every constructor normalizes its input, so these invariants hold no matter
/// what order a [`PropertyDataProvider`] returns its data in. Since the
/// canonical form of a set is unique, two `UnicodeRangeSet`s compare equal
/// exactly when they contain the same code points.
///
/// A set owns its range storage. There is no way to mutate a set once it is
/// built: operations such as [`complement`](Self::complement) produce a new,
/// independent set. The type is `Send + Sync` and can be read concurrently
/// from any number of threads.
///
/// Complexity overview:
/// - `complement`: O(n)
/// - `contains`: O(log n)
/// - `range_count`, `range_start`, `range_end`: O(1)
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct UnicodeRangeSet {
    /// Canonical ranges of the set.
    ranges: Box<[CodePointRange]>,
}

impl UnicodeRangeSet {
    /// Creates a set holding no code points.
    pub fn empty() -> UnicodeRangeSet {
        UnicodeRangeSet::default()
    }

    /// Creates a set holding the whole code point space `[0, 0x10FFFF]`.
    pub fn full() -> UnicodeRangeSet {
        UnicodeRangeSet {
            ranges: Box::new([CodePointRange::FULL]),
        }
    }

    /// Creates a set from arbitrary ranges.
    ///
    /// The ranges may be in any order and may overlap or touch; they are
    /// sorted and coalesced into canonical form.
    pub fn from_ranges(ranges: impl IntoIterator<Item = CodePointRange>) -> UnicodeRangeSet {
        let ranges = normalize_ranges(ranges.into_iter().collect());
        UnicodeRangeSet {
            ranges: ranges.into_boxed_slice(),
        }
    }

    /// Creates a set from raw inclusive `u32` ranges produced while resolving
    /// `property`.
    ///
    /// Every range is validated before the set is built: it must satisfy
    /// `start <= end <= 0x10FFFF`. The first violation fails the whole
    /// construction with [`ErrorKind::ProviderFailure`](unirange_common::ErrorKind::ProviderFailure);
    /// no partially populated set is ever returned.
    pub fn try_from_raw_ranges(
        property: &str,
        ranges: impl IntoIterator<Item = RangeInclusive<u32>>,
    ) -> Result<UnicodeRangeSet> {
        let ranges = ranges
            .into_iter()
            .map(|range| {
                CodePointRange::try_from(range).map_err(|range| {
                    Error::provider_failure(
                        property,
                        format!(
                            "invalid code point range {:#X}..={:#X}",
                            range.start(),
                            range.end()
                        ),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(UnicodeRangeSet::from_ranges(ranges))
    }

    /// Resolves the set of code points for which property `name` (with the
    /// optional `value`) holds, using `provider`.
    ///
    /// `value` is `None` for binary properties (e.g. `White_Space`) and for
    /// pseudo-properties; enumerated properties such as `Script` take a value
    /// (e.g. `Greek`).
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::UnknownProperty`](unirange_common::ErrorKind::UnknownProperty)
    ///   if `name` is empty or not known to the provider.
    /// - [`ErrorKind::UnknownPropertyValue`](unirange_common::ErrorKind::UnknownPropertyValue)
    ///   if `value` is not valid for `name`.
    /// - [`ErrorKind::ProviderFailure`](unirange_common::ErrorKind::ProviderFailure)
    ///   for any other resolution failure, including provider output outside
    ///   the code point space.
    pub fn create_for_property<P>(
        provider: &P,
        name: &str,
        value: Option<&str>,
    ) -> Result<UnicodeRangeSet>
    where
        P: PropertyDataProvider + ?Sized,
    {
        if name.is_empty() {
            return Err(Error::unknown_property(name));
        }

        let set = provider
            .resolve_property(name, value)
            .and_then(|ranges| UnicodeRangeSet::try_from_raw_ranges(name, ranges))
            .inspect_err(|e| log::debug!("failed to resolve {name}={value:?}: {e}"))?;

        log::debug!(
            "resolved property {name}={value:?} into {} ranges",
            set.range_count()
        );
        Ok(set)
    }

    /// Returns the set of all code points in `[0, 0x10FFFF]` that are not in `self`.
    ///
    /// The complement of the empty set is the full set and vice versa.
    /// `self` is left untouched.
    pub fn complement(&self) -> UnicodeRangeSet {
        UnicodeRangeSet {
            ranges: complement_ranges(self.ranges.iter().copied()).collect(),
        }
    }

    /// Number of disjoint ranges in the set (0 for the empty set).
    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Returns the range at the zero-based `index`, in ascending order.
    ///
    /// Fails with [`ErrorKind::IndexOutOfRange`](unirange_common::ErrorKind::IndexOutOfRange)
    /// unless `index < self.range_count()`.
    pub fn get_range(&self, index: usize) -> Result<CodePointRange> {
        self.ranges
            .get(index)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(index, self.range_count()))
    }

    /// First code point of the range at `index`. See [`get_range`](Self::get_range).
    pub fn range_start(&self, index: usize) -> Result<CodePoint> {
        self.get_range(index).map(|range| range.start())
    }

    /// Last code point (inclusive) of the range at `index`. See [`get_range`](Self::get_range).
    pub fn range_end(&self, index: usize) -> Result<CodePoint> {
        self.get_range(index).map(|range| range.end())
    }

    /// The canonical ranges of the set.
    #[inline]
    pub fn as_slice(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Iterates over the ranges in ascending order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, CodePointRange>> {
        self.ranges.iter().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns `true` if `cp` belongs to the set.
    pub fn contains(&self, cp: CodePoint) -> bool {
        search_code_point(&self.ranges, cp).is_ok()
    }

    /// Total number of code points in the set.
    pub fn code_point_count(&self) -> u32 {
        self.ranges.iter().map(CodePointRange::size).sum()
    }
}

impl FromIterator<CodePointRange> for UnicodeRangeSet {
    fn from_iter<I: IntoIterator<Item = CodePointRange>>(iter: I) -> Self {
        UnicodeRangeSet::from_ranges(iter)
    }
}

impl<'a> IntoIterator for &'a UnicodeRangeSet {
    type Item = CodePointRange;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, CodePointRange>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for UnicodeRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges.iter()).finish()
    }
}

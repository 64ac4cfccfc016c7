//! The seam between range sets and the Unicode property data they are built from.

use std::ops::RangeInclusive;

use unirange_common::Result;

/// A source of Unicode property data.
///
/// Given a property name and an optional value, a provider returns the code
/// points where the property holds, as a list of inclusive `u32` ranges.
///
/// Providers are not required to return canonical output: ranges may be
/// unsorted, overlapping or adjacent. They are, however, expected to stay
/// within the code point space; [`UnicodeRangeSet::create_for_property`]
/// validates every range and reports violations as
/// [`ErrorKind::ProviderFailure`](unirange_common::ErrorKind::ProviderFailure).
///
/// Errors a provider should report:
/// - [`ErrorKind::UnknownProperty`](unirange_common::ErrorKind::UnknownProperty)
///   when `name` is not a known property.
/// - [`ErrorKind::UnknownPropertyValue`](unirange_common::ErrorKind::UnknownPropertyValue)
///   when `name` is known but `value` is not valid for it (including a missing
///   value for a property that requires one).
/// - [`ErrorKind::ProviderFailure`](unirange_common::ErrorKind::ProviderFailure)
///   for anything else.
///
/// [`UnicodeRangeSet::create_for_property`]: crate::UnicodeRangeSet::create_for_property
pub trait PropertyDataProvider {
    fn resolve_property(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Vec<RangeInclusive<u32>>>;
}

impl<P: PropertyDataProvider + ?Sized> PropertyDataProvider for &P {
    fn resolve_property(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Vec<RangeInclusive<u32>>> {
        (**self).resolve_property(name, value)
    }
}

impl<P: PropertyDataProvider + ?Sized> PropertyDataProvider for Box<P> {
    fn resolve_property(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Vec<RangeInclusive<u32>>> {
        (**self).resolve_property(name, value)
    }
}

impl<P: PropertyDataProvider + ?Sized> PropertyDataProvider for std::sync::Arc<P> {
    fn resolve_property(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Vec<RangeInclusive<u32>>> {
        (**self).resolve_property(name, value)
    }
}

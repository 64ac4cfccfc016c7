//! Command implementations for unirange-cmd

use anyhow::{Context, Result};
use unirange::UnicodeRangeSet;

pub mod contains;
pub mod ranges;

/// Builds the range set for `property` (and `value`) from the built-in
/// Unicode data, attaching the requested property to any error.
pub fn load_property_set(property: &str, value: Option<&str>) -> Result<UnicodeRangeSet> {
    unirange_props::create_for_property(property, value).with_context(|| match value {
        Some(value) => format!("Failed to resolve {property}={value}"),
        None => format!("Failed to resolve {property}"),
    })
}

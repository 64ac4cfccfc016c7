//! Unicode property data for [`UnicodeRangeSet`], backed by ICU4X compiled data.
//!
//! [`IcuPropertyProvider`] resolves the property names and values accepted by
//! ECMAScript `\p{...}` escapes. [`create_for_property`] is a shorthand for
//! resolving through it:
//!
//! ```
//! let greek = unirange_props::create_for_property("Script", Some("Greek")).unwrap();
//! assert!(greek.contains(0x03B1)); // GREEK SMALL LETTER ALPHA
//!
//! let not_greek = greek.complement();
//! assert!(!not_greek.contains(0x03B1));
//! ```

mod general_category;
pub mod icu_provider;
mod property;

pub use icu_provider::IcuPropertyProvider;

use unirange::UnicodeRangeSet;
use unirange_common::Result;

/// Resolves property `name` (with the optional `value`) using the compiled ICU data.
///
/// See [`UnicodeRangeSet::create_for_property`] for the error cases.
pub fn create_for_property(name: &str, value: Option<&str>) -> Result<UnicodeRangeSet> {
    UnicodeRangeSet::create_for_property(&IcuPropertyProvider::new(), name, value)
}

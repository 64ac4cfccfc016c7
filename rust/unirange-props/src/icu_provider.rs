//! A [`PropertyDataProvider`] backed by ICU4X compiled property data.

use std::ops::RangeInclusive;

use icu_properties::{
    CodePointMapData, PropertyParser,
    props::{GeneralCategory, Script},
    script::ScriptWithExtensions,
};
use unirange::{PropertyDataProvider, UnicodeRangeSet};
use unirange_common::{Error, Result};
use unirange_ranges::MAX_CODE_POINT;

use crate::{general_category, property::Property};

/// Resolves Unicode properties from the Unicode data baked into `icu_properties`.
///
/// The accepted property names and values are the ones usable in ECMAScript
/// `\p{...}` escapes; see [`resolve_property`](Self::resolve_property).
///
/// The data is compiled into the binary, so resolution never performs I/O and
/// the provider itself carries no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuPropertyProvider;

impl IcuPropertyProvider {
    pub const fn new() -> IcuPropertyProvider {
        IcuPropertyProvider
    }
}

impl PropertyDataProvider for IcuPropertyProvider {
    /// Resolves `name` (and `value`) against the compiled Unicode data.
    ///
    /// - Binary properties (`White_Space`, `Alpha`, ...) and the `Any`,
    ///   `ASCII` and `Assigned` special cases take no value.
    /// - `General_Category`/`gc`, `Script`/`sc` and `Script_Extensions`/`scx`
    ///   require one.
    /// - When `name` is not a property and no value is given, `name` is tried as
    ///   a General_Category value, so `Lu` means `General_Category=Lu`.
    fn resolve_property(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Vec<RangeInclusive<u32>>> {
        let Some(prop) = Property::from_name(name) else {
            return match (value, general_category::categories_for(name)) {
                (None, Some(categories)) => Ok(general_category_ranges(categories)),
                _ => Err(Error::unknown_property(name)),
            };
        };

        match (prop.takes_value(), value) {
            (true, None) => {
                return Err(Error::unknown_property_value(
                    name,
                    None,
                    "property requires a value",
                ));
            }
            (false, Some(_)) => {
                return Err(Error::unknown_property_value(
                    name,
                    value,
                    "property does not take a value",
                ));
            }
            _ => (),
        }
        let value = value.unwrap_or_default();

        let ranges = match prop {
            Property::Binary(set) => set.iter_ranges().collect(),
            Property::GeneralCategory => {
                let categories = general_category::categories_for(value).ok_or_else(|| {
                    Error::unknown_property_value(name, Some(value), "not a General_Category value")
                })?;
                general_category_ranges(categories)
            }
            Property::Script => {
                let script = parse_script(name, value)?;
                CodePointMapData::<Script>::new()
                    .iter_ranges_for_value(script)
                    .collect()
            }
            Property::ScriptExtensions => {
                let script = parse_script(name, value)?;
                ScriptWithExtensions::new()
                    .get_script_extensions_ranges(script)
                    .collect()
            }
            Property::Any => vec![0..=MAX_CODE_POINT],
            Property::Ascii => vec![0..=0x7F],
            Property::Assigned => {
                let unassigned = general_category_ranges(&[GeneralCategory::Unassigned]);
                UnicodeRangeSet::try_from_raw_ranges(name, unassigned)?
                    .complement()
                    .iter()
                    .map(RangeInclusive::from)
                    .collect()
            }
        };

        log::trace!("icu provider resolved {name}={value}");
        Ok(ranges)
    }
}

fn parse_script(name: &str, value: &str) -> Result<Script> {
    PropertyParser::<Script>::new()
        .get_strict(value)
        .ok_or_else(|| Error::unknown_property_value(name, Some(value), "not a Unicode script"))
}

/// Collects the ranges of every category in `categories`, one category after
/// the other. The result is sorted within each category only.
fn general_category_ranges(categories: &[GeneralCategory]) -> Vec<RangeInclusive<u32>> {
    let map = CodePointMapData::<GeneralCategory>::new();
    categories
        .iter()
        .flat_map(|&gc| map.iter_ranges_for_value(gc))
        .collect()
}

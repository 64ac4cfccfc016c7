
use std::{collections::HashMap, ops::RangeInclusive};

use unirange_common::{Error, Result};

use crate::PropertyDataProvider;

/// A provider serving fixed range lists, returned verbatim (unsorted input stays unsorted).
#[derive(Default)]
pub(crate) struct TableProvider {
    properties: HashMap<String, HashMap<Option<String>, Vec<RangeInclusive<u32>>>>,
}

impl TableProvider {
    pub(crate) fn with(
        mut self,
        name: &str,
        value: Option<&str>,
        ranges: Vec<RangeInclusive<u32>>,
    ) -> Self {
        self.properties
            .entry(name.to_string())
            .or_default()
            .insert(value.map(str::to_string), ranges);
        self
    }
}

impl PropertyDataProvider for TableProvider {
    fn resolve_property(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Vec<RangeInclusive<u32>>> {
        let values = self
            .properties
            .get(name)
            .ok_or_else(|| Error::unknown_property(name))?;
        values
            .get(&value.map(str::to_string))
            .cloned()
            .ok_or_else(|| Error::unknown_property_value(name, value, "no such value"))
    }
}

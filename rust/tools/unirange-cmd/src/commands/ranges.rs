//! Ranges command implementation

use anyhow::Result;
use serde::Serialize;
use unirange::{CodePointRange, UnicodeRangeSet};

use crate::{OutputFormat, commands::load_property_set, utils::format_code_point};

#[derive(Serialize)]
struct RangesSummary {
    property: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    complement: bool,
    range_count: usize,
    code_point_count: u32,
    ranges: Vec<RangeInfo>,
}

#[derive(Serialize)]
struct RangeInfo {
    start: u32,
    end: u32,
}

impl From<CodePointRange> for RangeInfo {
    fn from(range: CodePointRange) -> Self {
        RangeInfo {
            start: range.start(),
            end: range.end(),
        }
    }
}

pub fn run(
    property: String,
    value: Option<String>,
    complement: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut set = load_property_set(&property, value.as_deref())?;
    if complement {
        set = set.complement();
    }
    log::debug!(
        "printing {} ranges of {property} (complement: {complement})",
        set.range_count()
    );

    match format {
        OutputFormat::Text => print!("{}", render_text(&set)),
        OutputFormat::Json => {
            let summary = summarize(property, value, complement, &set);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

fn summarize(
    property: String,
    value: Option<String>,
    complement: bool,
    set: &UnicodeRangeSet,
) -> RangesSummary {
    RangesSummary {
        property,
        value,
        complement,
        range_count: set.range_count(),
        code_point_count: set.code_point_count(),
        ranges: set.iter().map(RangeInfo::from).collect(),
    }
}

/// One line per range: `U+0041..U+005A` or `U+00AA` for a single code point.
fn render_text(set: &UnicodeRangeSet) -> String {
    set.iter()
        .map(|range| {
            if range.start() == range.end() {
                format!("{}\n", format_code_point(range.start()))
            } else {
                format!(
                    "{}..{}\n",
                    format_code_point(range.start()),
                    format_code_point(range.end())
                )
            }
        })
        .collect()
}

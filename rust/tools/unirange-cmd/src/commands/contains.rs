//! Contains command implementation

use anyhow::Result;

use crate::{
    commands::load_property_set,
    utils::{format_code_point, parse_code_point},
};

pub fn run(property: String, value: Option<String>, code_points: Vec<String>) -> Result<()> {
    let code_points = code_points
        .iter()
        .map(|arg| parse_code_point(arg))
        .collect::<Result<Vec<_>>>()?;

    let set = load_property_set(&property, value.as_deref())?;
    for cp in code_points {
        println!("{}\t{}", format_code_point(cp), set.contains(cp));
    }
    Ok(())
}

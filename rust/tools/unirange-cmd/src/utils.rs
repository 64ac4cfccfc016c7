//! Common utilities for unirange-cmd

use anyhow::{Context, Result};
use unirange::{CodePoint, MAX_CODE_POINT};

/// Formats a code point as `U+XXXX` (at least four hex digits).
pub fn format_code_point(cp: CodePoint) -> String {
    format!("U+{cp:04X}")
}

/// Parses a code point argument.
///
/// - `U+03B1`, `u+03B1` or `0x3B1`: hexadecimal.
/// - `945`: decimal. Any argument made only of ASCII digits is a number, so the
///   digit characters themselves are written as `U+0030`..`U+0039`.
/// - `α`: any other single character stands for itself.
pub fn parse_code_point(arg: &str) -> Result<CodePoint> {
    let hex = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| arg.strip_prefix(prefix));
    let cp = if let Some(hex) = hex {
        u32::from_str_radix(hex, 16).with_context(|| format!("Invalid hex code point: {arg}"))?
    } else if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        arg.parse::<u32>()
            .with_context(|| format!("Invalid code point: {arg}"))?
    } else {
        let mut chars = arg.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c as u32,
            _ => anyhow::bail!("Not a code point or single character: {arg:?}"),
        }
    };
    if cp > MAX_CODE_POINT {
        anyhow::bail!("Code point {arg} is above U+{MAX_CODE_POINT:X}");
    }
    Ok(cp)
}

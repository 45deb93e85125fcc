//! Stateless helper utilities shared by the worksheet operations.

use umya_spreadsheet::Worksheet;

use crate::conf::{
    N_LEVEL_HEADING_MAX, N_LEVEL_HEADING_MIN, TUP_ARGB_BY_COLOR_NAME,
    derive_heading_style_presets,
};
use crate::spec::{HeaderInsertError, SpecHeadingStyle, SpecInsertPosition};

/// Resolve the 1-based insertion position for new worksheet content.
///
/// An omitted row lands one past the last occupied row (row 1 on an empty
/// sheet); an omitted column falls back to `col_default`.
pub fn derive_insert_position(
    worksheet: &Worksheet,
    row_start: Option<u32>,
    col_start: Option<u32>,
    col_default: u32,
) -> SpecInsertPosition {
    let row = row_start.unwrap_or_else(|| worksheet.get_highest_row() + 1);
    let col = col_start.unwrap_or(col_default);
    SpecInsertPosition { row, col }
}

/// Select the fixed style preset for one heading level.
///
/// Levels outside 1–6 are rejected before any worksheet mutation.
pub fn derive_heading_style(level: usize) -> Result<SpecHeadingStyle, HeaderInsertError> {
    if !(N_LEVEL_HEADING_MIN..=N_LEVEL_HEADING_MAX).contains(&level) {
        return Err(HeaderInsertError::InvalidHeadingLevel(level));
    }
    Ok(derive_heading_style_presets()[level - 1])
}

/// Resolve the requested heading color name.
///
/// Known quirk: the heading theme renders font colors inverted, so a
/// requested `black` resolves to `white`. Every other value passes through.
pub fn resolve_heading_color(color: &str) -> String {
    if color.trim().eq_ignore_ascii_case("black") {
        "white".to_string()
    } else {
        color.to_string()
    }
}

/// Convert a color name or bare hex string to ARGB.
///
/// Named colors use the fixed table; 6 hex digits get an opaque `FF` alpha
/// prefix; 8 hex digits pass through; anything else is uppercased as-is.
pub fn derive_argb_from_color(color: &str) -> String {
    let name = color.trim().to_ascii_lowercase();
    for (color_name, argb) in TUP_ARGB_BY_COLOR_NAME {
        if name == color_name {
            return argb.to_string();
        }
    }

    let if_hex = !name.is_empty() && name.chars().all(|chr| chr.is_ascii_hexdigit());
    if if_hex && name.len() == 6 {
        return format!("FF{}", name.to_ascii_uppercase());
    }
    if if_hex && name.len() == 8 {
        return name.to_ascii_uppercase();
    }
    color.trim().to_ascii_uppercase()
}

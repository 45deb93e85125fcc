//! Styled heading insertion.

use umya_spreadsheet::Spreadsheet;

use crate::conf::{N_IDX_COL_INSERT_DEFAULT, NAME_COLOR_HEADING_DEFAULT};
use crate::spec::{HeaderInsertError, SpecHeaderInsertOptions, SpecInsertPosition};
use crate::util::{
    derive_argb_from_color, derive_heading_style, derive_insert_position, resolve_heading_color,
};

/// Insert one styled heading cell into `sheet_name`.
///
/// The heading level (1–6) selects a fixed preset; level validation and
/// color resolution happen before the worksheet is touched. Returns the
/// resolved 1-based position so callers can keep writing below it.
pub fn insert_header(
    book: &mut Spreadsheet,
    sheet_name: &str,
    text: &str,
    level: usize,
    options: &SpecHeaderInsertOptions,
) -> Result<SpecInsertPosition, HeaderInsertError> {
    let style = derive_heading_style(level)?;
    let color_requested = options
        .color
        .as_deref()
        .unwrap_or(NAME_COLOR_HEADING_DEFAULT);
    let argb = derive_argb_from_color(&resolve_heading_color(color_requested));

    let worksheet = book
        .get_sheet_by_name_mut(sheet_name)
        .ok_or_else(|| HeaderInsertError::SheetNotFound(sheet_name.to_string()))?;
    let position = derive_insert_position(
        worksheet,
        options.row_start,
        options.col_start,
        N_IDX_COL_INSERT_DEFAULT,
    );

    let cell = worksheet.get_cell_mut((position.col, position.row));
    cell.set_value(text);
    let font = cell.get_style_mut().get_font_mut();
    font.set_size(style.font_size);
    font.set_bold(style.if_bold);
    font.set_italic(style.if_italic);
    font.get_color_mut().set_argb(argb);

    Ok(position)
}

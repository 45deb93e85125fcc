//! Heading/plot constants and default preset factories.

use crate::spec::SpecHeadingStyle;

/// Smallest recognized heading level.
pub const N_LEVEL_HEADING_MIN: usize = 1;
/// Largest recognized heading level.
pub const N_LEVEL_HEADING_MAX: usize = 6;
/// Column used when the caller gives no start column (1-based).
pub const N_IDX_COL_INSERT_DEFAULT: u32 = 2;
/// Heading color when the caller gives none.
pub const NAME_COLOR_HEADING_DEFAULT: &str = "black";

/// Temporary image file used while embedding a plot.
pub const NAME_FILE_PLOT_DEFAULT: &str = "plot.png";
/// Default plot surface width in pixels.
pub const N_WIDTH_PLOT_DEFAULT: u32 = 600;
/// Default plot surface height in pixels.
pub const N_HEIGHT_PLOT_DEFAULT: u32 = 400;

/// Named colors accepted by the color resolver, as ARGB.
pub const TUP_ARGB_BY_COLOR_NAME: [(&str, &str); 9] = [
    ("black", "FF000000"),
    ("white", "FFFFFFFF"),
    ("red", "FFFF0000"),
    ("green", "FF008000"),
    ("blue", "FF0000FF"),
    ("yellow", "FFFFFF00"),
    ("gray", "FF808080"),
    ("grey", "FF808080"),
    ("orange", "FFFFA500"),
];

/// Build the six fixed heading presets, indexed by `level - 1`.
pub fn derive_heading_style_presets() -> [SpecHeadingStyle; 6] {
    [
        SpecHeadingStyle {
            font_size: 22.0,
            if_bold: true,
            if_italic: false,
        },
        SpecHeadingStyle {
            font_size: 18.0,
            if_bold: true,
            if_italic: false,
        },
        SpecHeadingStyle {
            font_size: 16.0,
            if_bold: true,
            if_italic: true,
        },
        SpecHeadingStyle {
            font_size: 16.0,
            if_bold: false,
            if_italic: true,
        },
        SpecHeadingStyle {
            font_size: 14.0,
            if_bold: false,
            if_italic: true,
        },
        SpecHeadingStyle {
            font_size: 12.0,
            if_bold: false,
            if_italic: true,
        },
    ]
}

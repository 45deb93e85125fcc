//! `sheetkit_io_xlsx` v1:
//! Rust-side XLSX worksheet helper kernel.
//!
//! - `conf`   : constants and default presets
//! - `spec`   : specs/models/options/errors
//! - `util`   : pure helper functions
//! - `header` : styled heading insertion
//! - `plot`   : plot rendering and image embedding

pub mod conf;
pub mod header;
pub mod plot;
pub mod spec;
pub mod util;

pub use conf::{
    N_HEIGHT_PLOT_DEFAULT, N_IDX_COL_INSERT_DEFAULT, N_LEVEL_HEADING_MAX, N_LEVEL_HEADING_MIN,
    N_WIDTH_PLOT_DEFAULT, NAME_FILE_PLOT_DEFAULT, derive_heading_style_presets,
};
pub use header::insert_header;
pub use plot::{PlotSurface, embed_plot};
pub use spec::{
    HeaderInsertError, PlotEmbedError, ReportPlotEmbed, SpecHeaderInsertOptions, SpecHeadingStyle,
    SpecInsertPosition, SpecPlotEmbedOptions,
};
pub use util::{
    derive_argb_from_color, derive_heading_style, derive_insert_position, resolve_heading_color,
};

//! Shared worksheet-helper models, options and error types.

use std::fmt;
use std::path::PathBuf;

use crate::conf::{N_HEIGHT_PLOT_DEFAULT, N_WIDTH_PLOT_DEFAULT};

////////////////////////////////////////////////////////////////////////////////
// #region HeadingSpecification

/// One fixed heading style preset (font size, weight, slant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecHeadingStyle {
    /// Font size in points.
    pub font_size: f64,
    /// Bold style.
    pub if_bold: bool,
    /// Italic style.
    pub if_italic: bool,
}

/// Resolved 1-based insertion position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecInsertPosition {
    /// 1-based row index.
    pub row: u32,
    /// 1-based column index.
    pub col: u32,
}

/// Caller options for `insert_header`.
#[derive(Debug, Clone, Default)]
pub struct SpecHeaderInsertOptions {
    /// Requested font color; defaults to `"black"` (which the resolver
    /// turns into white, see [`crate::util::resolve_heading_color`]).
    pub color: Option<String>,
    /// Explicit 1-based start row; one past the last occupied row when `None`.
    pub row_start: Option<u32>,
    /// Explicit 1-based start column; defaults to column 2 when `None`.
    pub col_start: Option<u32>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PlotSpecification

/// Caller options for `embed_plot`.
#[derive(Debug, Clone)]
pub struct SpecPlotEmbedOptions {
    /// Explicit 1-based start row; one past the last occupied row when `None`.
    pub row_start: Option<u32>,
    /// Explicit 1-based start column; defaults to column 2 when `None`.
    pub col_start: Option<u32>,
    /// Plot surface width in pixels.
    pub width_px: u32,
    /// Plot surface height in pixels.
    pub height_px: u32,
    /// Temporary image path override; `"plot.png"` in the working
    /// directory when `None`.
    pub path_file_image: Option<PathBuf>,
}

impl Default for SpecPlotEmbedOptions {
    fn default() -> Self {
        Self {
            row_start: None,
            col_start: None,
            width_px: N_WIDTH_PLOT_DEFAULT,
            height_px: N_HEIGHT_PLOT_DEFAULT,
            path_file_image: None,
        }
    }
}

/// Per-call report for one `embed_plot` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlotEmbed {
    /// Temporary image path that was rendered and removed.
    pub path_file_image: PathBuf,
    /// Anchor position the image was inserted at.
    pub position: SpecInsertPosition,
    /// `true` when the temporary image file was removed successfully.
    pub if_image_file_deleted: bool,
}

impl ReportPlotEmbed {
    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} row={} col={} image={} deleted={}",
            self.position.row,
            self.position.col,
            self.path_file_image.display(),
            self.if_image_file_deleted
        )
    }
}

impl fmt::Display for ReportPlotEmbed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[PLOT]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// `insert_header` failures.
#[derive(Debug)]
pub enum HeaderInsertError {
    /// Heading level outside 1–6.
    InvalidHeadingLevel(usize),
    /// Named worksheet does not exist in the workbook.
    SheetNotFound(String),
}

impl fmt::Display for HeaderInsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHeadingLevel(level) => {
                write!(f, "Heading level must be within 1..=6, got {level}.")
            }
            Self::SheetNotFound(name) => write!(f, "Worksheet not found: {name}"),
        }
    }
}

impl std::error::Error for HeaderInsertError {}

/// `embed_plot` failures.
#[derive(Debug)]
pub enum PlotEmbedError {
    /// Named worksheet does not exist in the workbook.
    SheetNotFound(String),
    /// Plot surface dimensions must both be non-zero.
    InvalidImageSize {
        /// Requested width in pixels.
        width_px: u32,
        /// Requested height in pixels.
        height_px: u32,
    },
    /// Rendering callback or image finalize failed; the worksheet is
    /// untouched and the temporary file removed.
    RenderingFailed(String),
    /// Finalized image file is unreadable.
    ImageWriteFailed(String),
}

impl fmt::Display for PlotEmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SheetNotFound(name) => write!(f, "Worksheet not found: {name}"),
            Self::InvalidImageSize {
                width_px,
                height_px,
            } => write!(
                f,
                "Plot surface must be non-empty, got {width_px}x{height_px}."
            ),
            Self::RenderingFailed(message) => write!(f, "Plot rendering failed: {message}"),
            Self::ImageWriteFailed(message) => write!(f, "Plot image unreadable: {message}"),
        }
    }
}

impl std::error::Error for PlotEmbedError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

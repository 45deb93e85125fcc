//! Plot rendering into a scoped temporary image embedded into a worksheet.

use std::fs;
use std::path::PathBuf;

use plotters::backend::BitMapBackend;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use umya_spreadsheet::Spreadsheet;
use umya_spreadsheet::helper::coordinate::coordinate_from_index;
use umya_spreadsheet::structs::Image;
use umya_spreadsheet::structs::drawing::spreadsheet::MarkerType;

use crate::conf::{N_IDX_COL_INSERT_DEFAULT, NAME_FILE_PLOT_DEFAULT};
use crate::spec::{PlotEmbedError, ReportPlotEmbed, SpecPlotEmbedOptions};
use crate::util::derive_insert_position;

/// Drawing surface handed to the rendering callback.
pub type PlotSurface<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Render a plot through `render` into a temporary image and embed it into
/// `sheet_name`.
///
/// The image target is finalized on every path, including callback failure,
/// and the temporary file never outlives the call. On rendering failure the
/// worksheet is left untouched and the error propagates; on success the
/// returned report carries the anchor position and whether the temporary
/// file was removed.
pub fn embed_plot<F>(
    book: &mut Spreadsheet,
    sheet_name: &str,
    render: F,
    options: &SpecPlotEmbedOptions,
) -> Result<ReportPlotEmbed, PlotEmbedError>
where
    F: FnOnce(&PlotSurface<'_>) -> Result<(), String>,
{
    if options.width_px == 0 || options.height_px == 0 {
        return Err(PlotEmbedError::InvalidImageSize {
            width_px: options.width_px,
            height_px: options.height_px,
        });
    }
    if book.get_sheet_by_name(sheet_name).is_none() {
        return Err(PlotEmbedError::SheetNotFound(sheet_name.to_string()));
    }

    let path_file_image = options
        .path_file_image
        .clone()
        .unwrap_or_else(|| PathBuf::from(NAME_FILE_PLOT_DEFAULT));

    // The surface lives in this block only; `present` finalizes the image
    // target whether or not the callback succeeded.
    let result_render = {
        let surface = BitMapBackend::new(
            &path_file_image,
            (options.width_px, options.height_px),
        )
        .into_drawing_area();
        let result_draw = render(&surface);
        let result_present = surface
            .present()
            .map_err(|err| format!("image finalize failed: {err}"));
        result_draw.and(result_present)
    };
    if let Err(message) = result_render {
        // A partial image must neither be inserted nor outlive the call.
        let _ = fs::remove_file(&path_file_image);
        return Err(PlotEmbedError::RenderingFailed(message));
    }
    if let Err(err) = fs::metadata(&path_file_image) {
        return Err(PlotEmbedError::ImageWriteFailed(format!(
            "{}: {err}",
            path_file_image.display()
        )));
    }

    let Some(worksheet) = book.get_sheet_by_name_mut(sheet_name) else {
        let _ = fs::remove_file(&path_file_image);
        return Err(PlotEmbedError::SheetNotFound(sheet_name.to_string()));
    };

    let position = derive_insert_position(
        worksheet,
        options.row_start,
        options.col_start,
        N_IDX_COL_INSERT_DEFAULT,
    );
    let coordinate = coordinate_from_index(&position.col, &position.row);

    let mut marker = MarkerType::default();
    marker.set_coordinate(coordinate);
    let mut image = Image::default();
    let path_text = path_file_image.to_string_lossy();
    image.new_image(&path_text, marker);
    worksheet.add_image(image);

    // The library copies the image bytes at insert time; the file can go now.
    let if_image_file_deleted = fs::remove_file(&path_file_image).is_ok();

    Ok(ReportPlotEmbed {
        path_file_image,
        position,
        if_image_file_deleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecInsertPosition;
    use plotters::prelude::{ChartBuilder, LineSeries, RED, WHITE};

    fn build_book_with_rows(n_rows: u32) -> Spreadsheet {
        let mut book = umya_spreadsheet::new_file();
        let worksheet = book.get_sheet_mut(&0).unwrap();
        for row in 1..=n_rows {
            worksheet.get_cell_mut((1u32, row)).set_value(format!("r{row}"));
        }
        book
    }

    fn render_line_chart(surface: &PlotSurface<'_>) -> Result<(), String> {
        surface.fill(&WHITE).map_err(|err| err.to_string())?;
        let mut chart = ChartBuilder::on(surface)
            .build_cartesian_2d(0f64..10f64, 0f64..10f64)
            .map_err(|err| err.to_string())?;
        chart
            .draw_series(LineSeries::new(
                (0..10).map(|x| (f64::from(x), f64::from(x))),
                &RED,
            ))
            .map_err(|err| err.to_string())?;
        Ok(())
    }

    #[test]
    fn test_embed_lands_one_past_last_row_and_removes_temp_file() {
        let dir_tmp = tempfile::tempdir().unwrap();
        let path_file_image = dir_tmp.path().join("plot.png");
        let mut book = build_book_with_rows(5);

        let options = SpecPlotEmbedOptions {
            path_file_image: Some(path_file_image.clone()),
            ..Default::default()
        };
        let report = embed_plot(&mut book, "Sheet1", render_line_chart, &options).unwrap();

        assert_eq!(report.position, SpecInsertPosition { row: 6, col: 2 });
        assert!(report.if_image_file_deleted);
        assert!(!path_file_image.exists());

        let worksheet = book.get_sheet_by_name("Sheet1").unwrap();
        assert!(worksheet.get_image("B6").is_some());
    }

    #[test]
    fn test_explicit_position_anchors_image_exactly() {
        let dir_tmp = tempfile::tempdir().unwrap();
        let mut book = build_book_with_rows(5);

        let options = SpecPlotEmbedOptions {
            row_start: Some(3),
            col_start: Some(4),
            path_file_image: Some(dir_tmp.path().join("plot.png")),
            ..Default::default()
        };
        let report = embed_plot(&mut book, "Sheet1", render_line_chart, &options).unwrap();
        assert_eq!(report.position, SpecInsertPosition { row: 3, col: 4 });

        let worksheet = book.get_sheet_by_name("Sheet1").unwrap();
        assert!(worksheet.get_image("D3").is_some());
    }

    #[test]
    fn test_render_failure_propagates_and_leaves_no_file_or_image() {
        let dir_tmp = tempfile::tempdir().unwrap();
        let path_file_image = dir_tmp.path().join("plot.png");
        let mut book = build_book_with_rows(0);

        let options = SpecPlotEmbedOptions {
            path_file_image: Some(path_file_image.clone()),
            ..Default::default()
        };
        let result = embed_plot(
            &mut book,
            "Sheet1",
            |_surface| Err("no data to draw".to_string()),
            &options,
        );

        match result {
            Err(PlotEmbedError::RenderingFailed(message)) => {
                assert!(message.contains("no data to draw"));
            }
            other => panic!("expected RenderingFailed, got {other:?}"),
        }
        assert!(!path_file_image.exists());

        let worksheet = book.get_sheet_by_name("Sheet1").unwrap();
        assert!(worksheet.get_image("B1").is_none());
    }

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        let mut book = build_book_with_rows(0);
        let options = SpecPlotEmbedOptions {
            width_px: 0,
            ..Default::default()
        };
        let result = embed_plot(&mut book, "Sheet1", render_line_chart, &options);
        assert!(matches!(
            result,
            Err(PlotEmbedError::InvalidImageSize { width_px: 0, .. })
        ));
    }

    #[test]
    fn test_unknown_sheet_is_an_error_before_rendering() {
        let dir_tmp = tempfile::tempdir().unwrap();
        let path_file_image = dir_tmp.path().join("plot.png");
        let mut book = build_book_with_rows(0);

        let options = SpecPlotEmbedOptions {
            path_file_image: Some(path_file_image.clone()),
            ..Default::default()
        };
        let result = embed_plot(&mut book, "Missing", render_line_chart, &options);
        assert!(matches!(result, Err(PlotEmbedError::SheetNotFound(_))));
        assert!(!path_file_image.exists());
    }
}

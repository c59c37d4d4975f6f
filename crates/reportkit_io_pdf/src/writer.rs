//! printpdf backend: paints a finished [`DocumentCanvas`] and saves it.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};
use reportkit_io::derive_output_file_name;
use tracing::info;

use crate::canvas::DocumentCanvas;
use crate::color::ColorRgb;
use crate::conf::C_PDF_EXTENSION;
use crate::spec::EnumDrawOp;

const C_LAYER_NAME: &str = "Layer 1";
const N_STROKE_THICKNESS_PT: f32 = 0.5;

struct SpecFontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render `canvas` and save it to `path_file_out`.
///
/// The file is created only after every page has been painted.
pub fn write_document(canvas: &DocumentCanvas, path_file_out: &Path) -> Result<(), String> {
    let doc = render_document(canvas)?;

    let file = File::create(path_file_out).map_err(derive_pdf_error_text)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(derive_pdf_error_text)?;

    info!(
        file = %path_file_out.display(),
        pages = canvas.n_pages(),
        "document written"
    );
    Ok(())
}

/// Save `canvas` as `${title}.pdf` inside `dir_out`.
pub fn write_document_file(dir_out: &Path, canvas: &DocumentCanvas) -> Result<PathBuf, String> {
    let path_file_out = dir_out.join(derive_output_file_name(canvas.title(), C_PDF_EXTENSION));
    write_document(canvas, &path_file_out)?;
    Ok(path_file_out)
}

fn render_document(canvas: &DocumentCanvas) -> Result<PdfDocumentReference, String> {
    let geometry = canvas.geometry();
    let n_width = Mm(geometry.page_width_mm as f32);
    let n_height = Mm(geometry.page_height_mm as f32);

    let (doc, page_first, layer_first) =
        PdfDocument::new(canvas.title(), n_width, n_height, C_LAYER_NAME);
    let fonts = SpecFontSet {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(derive_pdf_error_text)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(derive_pdf_error_text)?,
    };

    for (n_idx_page, page) in canvas.pages().iter().enumerate() {
        let layer = if n_idx_page == 0 {
            doc.get_page(page_first).get_layer(layer_first)
        } else {
            let (page_next, layer_next) = doc.add_page(n_width, n_height, C_LAYER_NAME);
            doc.get_page(page_next).get_layer(layer_next)
        };
        for op in &page.ops {
            paint_op(&layer, op, &fonts, geometry.page_height_mm);
        }
    }

    Ok(doc)
}

fn paint_op(layer: &PdfLayerReference, op: &EnumDrawOp, fonts: &SpecFontSet, page_height_mm: f64) {
    match op {
        EnumDrawOp::Text {
            x,
            y,
            text,
            font_size_pt,
            bold,
            color,
        } => {
            layer.set_fill_color(derive_pdf_color(*color));
            let font = if *bold { &fonts.bold } else { &fonts.regular };
            layer.use_text(
                text.as_str(),
                *font_size_pt as f32,
                Mm(*x as f32),
                Mm((page_height_mm - y) as f32),
                font,
            );
        }
        EnumDrawOp::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let Some(mode) = derive_paint_mode(*fill, *stroke) else {
                return;
            };
            if let Some(rgb) = fill {
                layer.set_fill_color(derive_pdf_color(*rgb));
            }
            if let Some(rgb) = stroke {
                layer.set_outline_color(derive_pdf_color(*rgb));
                layer.set_outline_thickness(N_STROKE_THICKNESS_PT);
            }
            let n_top = page_height_mm - y;
            let rect = Rect::new(
                Mm(*x as f32),
                Mm((n_top - height) as f32),
                Mm((x + width) as f32),
                Mm(n_top as f32),
            )
            .with_mode(mode);
            layer.add_rect(rect);
        }
    }
}

/// `None` when the rectangle has neither fill nor outline.
fn derive_paint_mode(fill: Option<ColorRgb>, stroke: Option<ColorRgb>) -> Option<PaintMode> {
    match (fill, stroke) {
        (Some(_), Some(_)) => Some(PaintMode::FillStroke),
        (Some(_), None) => Some(PaintMode::Fill),
        (None, Some(_)) => Some(PaintMode::Stroke),
        (None, None) => None,
    }
}

fn derive_pdf_color(rgb: ColorRgb) -> Color {
    let (r, g, b) = rgb.to_unit();
    Color::Rgb(Rgb::new(r as f32, g as f32, b as f32, None))
}

fn derive_pdf_error_text(err: impl std::fmt::Display) -> String {
    format!("pdf write error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::RGB_TEXT_DEFAULT;
    use crate::spec::SpecPageGeometry;

    fn canvas_two_pages() -> DocumentCanvas {
        let mut canvas = DocumentCanvas::new("Plan semanal", SpecPageGeometry::default());
        canvas.draw_text(0, 14.0, 25.0, "Plan semanal", 16.0, true, RGB_TEXT_DEFAULT);
        let rgb_fill = Some(ColorRgb(41, 65, 94));
        canvas.draw_rect(0, 14.0, 30.0, 50.0, 8.0, rgb_fill, Some(ColorRgb::BLACK));
        canvas.draw_rect(1, 14.0, 30.0, 50.0, 8.0, None, Some(ColorRgb::BLACK));
        canvas.draw_rect(1, 14.0, 40.0, 50.0, 8.0, None, None);
        canvas
    }

    #[test]
    fn test_write_document_file_creates_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path_file_out = write_document_file(dir.path(), &canvas_two_pages()).unwrap();

        assert_eq!(path_file_out, dir.path().join("Plan semanal.pdf"));
        let bytes = std::fs::read(&path_file_out).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_paint_mode_follows_fill_and_outline() {
        let rgb = Some(ColorRgb::BLACK);
        assert!(matches!(derive_paint_mode(rgb, rgb), Some(PaintMode::FillStroke)));
        assert!(matches!(derive_paint_mode(rgb, None), Some(PaintMode::Fill)));
        assert!(matches!(derive_paint_mode(None, rgb), Some(PaintMode::Stroke)));
        assert!(derive_paint_mode(None, None).is_none());
    }

    #[test]
    fn test_unwritable_target_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path_missing = dir.path().join("missing").join("out.pdf");
        let err = write_document(&canvas_two_pages(), &path_missing).unwrap_err();
        assert!(err.starts_with("pdf write error:"));
        assert!(!path_missing.exists());
    }
}

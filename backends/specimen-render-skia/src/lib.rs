// this_file: backends/specimen-render-skia/src/lib.rs

//! Skia Renderer - specimen sheets rasterized with tiny-skia
//!
//! Font outlines come from skrifa, coverage from tiny-skia's anti-aliased
//! path filler. One call to [`SpecimenRenderer::render`] produces a whole
//! sheet:
//!
//! - a light-gray L-shaped ruler in the top-left corner
//! - the font's full name, centered, set in the font itself
//! - every sample line, left-aligned, one line advance apart
//! - the full name again at the top in the reference font, so the sheet
//!   stays readable when the font under test is a dingbat or a display face

pub mod face;

pub use face::Face;

use specimen_core::{
    error::{RenderError, Result},
    layout::{self, LineMetrics},
    types::BitmapData,
    Color, SpecimenConfig, TitleFit,
};
use specimen_fontdb::Font;
use tiny_skia::{Paint, Pixmap, Rect, Transform};

/// A finished sheet plus the numbers that placed its title
#[derive(Debug, Clone)]
pub struct RenderedSpecimen {
    pub bitmap: BitmapData,
    pub title: String,
    /// Measured width of the title as drawn
    pub title_width: f32,
    /// Left edge of the title's pen position
    pub title_x: f32,
    /// Pixels per em the title was drawn at
    pub title_ppem: f32,
    pub layout: LineMetrics,
}

/// Lays out and rasterizes specimen sheets for one configuration
pub struct SpecimenRenderer<'c> {
    config: &'c SpecimenConfig,
}

impl<'c> SpecimenRenderer<'c> {
    pub fn new(config: &'c SpecimenConfig) -> Self {
        Self { config }
    }

    pub fn name(&self) -> &'static str {
        "skia"
    }

    /// Draws a sheet for `font` titled `title`, labelled with `reference`
    pub fn render(&self, font: &Font, title: &str, reference: &Font) -> Result<RenderedSpecimen> {
        self.config.validate()?;
        let canvas = self.config.canvas;

        let mut pixmap = Pixmap::new(canvas.width, canvas.height).ok_or(
            RenderError::PixmapCreationFailed {
                width: canvas.width,
                height: canvas.height,
            },
        )?;
        pixmap.fill(tiny_skia::Color::WHITE);
        draw_ruler(&mut pixmap);

        let ppem = self.config.pixels_per_em();
        let metrics = LineMetrics::from_config(self.config);
        let ink = paint_for(Color::black(), true);

        let face = Face::new(font, ppem, self.config.hinting)?;
        log::debug!(
            "{}: {:.2}px per em, {}",
            font.source(),
            face.ppem(),
            if face.is_hinted() { "hinted" } else { "unhinted" }
        );
        let mut title_width = face.measure(title);
        log::info!("Measured \"{}\" at {:.2}px", title, title_width);

        let scale = match self.config.title_fit {
            TitleFit::Center => 1.0,
            TitleFit::ShrinkToFit => layout::fit_scale(canvas.width, title_width),
        };
        let title_x;
        let title_ppem;
        if scale < 1.0 {
            let shrunk = Face::new(font, ppem * scale, self.config.hinting)?;
            title_width = shrunk.measure(title);
            title_ppem = shrunk.ppem();
            // Rounded hinted advances can leave the shrunk title a pixel too wide
            title_x = layout::centered_x(canvas.width, title_width).max(0.0);
            log::info!(
                "Title shrunk to {:.2}px per em, measured at {:.2}px",
                title_ppem,
                title_width
            );
            shrunk.draw(&mut pixmap, title, title_x, metrics.title_baseline() as f32, &ink);
        } else {
            title_ppem = ppem;
            title_x = layout::centered_x(canvas.width, title_width);
            face.draw(&mut pixmap, title, title_x, metrics.title_baseline() as f32, &ink);
        }

        for (index, line) in self.config.sample_lines.iter().enumerate() {
            let baseline = metrics.sample_baseline(index);
            log::info!("Measured \"{}\" at {:.2}px", line, face.measure(line));
            log::debug!("Sample line {} on baseline y={}", index, baseline);
            face.draw(&mut pixmap, line, layout::MARGIN as f32, baseline as f32, &ink);
        }

        let reference_face = Face::new(reference, ppem, self.config.hinting)?;
        reference_face.draw(
            &mut pixmap,
            title,
            layout::REFERENCE_LABEL_X,
            metrics.reference_baseline() as f32,
            &ink,
        );

        Ok(RenderedSpecimen {
            bitmap: to_bitmap(&pixmap),
            title: title.to_string(),
            title_width,
            title_x,
            title_ppem,
            layout: metrics,
        })
    }
}

fn paint_for(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = anti_alias;
    paint
}

/// Two 1px arms from (10, 10): one down, one to the right
fn draw_ruler(pixmap: &mut Pixmap) {
    let paint = paint_for(Color::ruler(), false);
    let margin = layout::MARGIN as f32;
    let length = layout::RULER_LENGTH as f32;
    let arms = [
        Rect::from_xywh(margin, margin, 1.0, length),
        Rect::from_xywh(margin, margin, length, 1.0),
    ];
    for arm in arms.into_iter().flatten() {
        pixmap.fill_rect(arm, &paint, Transform::identity(), None);
    }
}

/// Straight RGBA out of tiny-skia's premultiplied storage
fn to_bitmap(pixmap: &Pixmap) -> BitmapData {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    BitmapData {
        width: pixmap.width(),
        height: pixmap.height(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_core::CanvasSize;
    use specimen_fontdb::{EmbeddedReference, ReferenceFontProvider};

    #[test]
    fn test_ruler_pixels() {
        let mut pixmap = Pixmap::new(300, 300).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);
        draw_ruler(&mut pixmap);
        let bitmap = to_bitmap(&pixmap);

        let gray = Some([0xdd, 0xdd, 0xdd, 0xff]);
        let white = Some([0xff, 0xff, 0xff, 0xff]);
        assert_eq!(bitmap.pixel(10, 10), gray);
        assert_eq!(bitmap.pixel(10, 209), gray);
        assert_eq!(bitmap.pixel(209, 10), gray);
        assert_eq!(bitmap.pixel(10, 210), white);
        assert_eq!(bitmap.pixel(210, 10), white);
        assert_eq!(bitmap.pixel(11, 11), white);
        assert_eq!(bitmap.pixel(9, 10), white);
    }

    #[test]
    fn test_ruler_clipped_on_tiny_canvas() {
        let mut pixmap = Pixmap::new(50, 50).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);
        draw_ruler(&mut pixmap);
        let bitmap = to_bitmap(&pixmap);
        assert_eq!(bitmap.pixel(10, 49), Some([0xdd, 0xdd, 0xdd, 0xff]));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_drawing() {
        let config = SpecimenConfig {
            canvas: CanvasSize { width: 0, height: 10 },
            ..SpecimenConfig::default()
        };
        let font = EmbeddedReference.load().unwrap();
        let renderer = SpecimenRenderer::new(&config);
        assert!(renderer.render(&font, "Title", &font).is_err());
    }
}

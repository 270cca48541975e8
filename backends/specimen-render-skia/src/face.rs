// this_file: backends/specimen-render-skia/src/face.rs

//! A font bound to a pixel size and hinting mode
//!
//! Measuring and drawing go through the same advances, so a measured width
//! is exactly the distance the pen travels when the string is drawn.

use skrifa::{
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    outline::{DrawSettings, HintingInstance, HintingOptions, OutlineGlyphCollection, OutlinePen},
    GlyphId, MetadataProvider,
};
use specimen_core::{Hinting, Result};
use specimen_fontdb::Font;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

pub struct Face<'a> {
    charmap: Charmap<'a>,
    metrics: GlyphMetrics<'a>,
    outlines: OutlineGlyphCollection<'a>,
    hinter: Option<HintingInstance>,
    ppem: f32,
}

impl<'a> Face<'a> {
    /// Binds `font` to `ppem` pixels per em.
    ///
    /// Fonts that cannot be hinted fall back to unhinted outlines.
    pub fn new(font: &'a Font, ppem: f32, hinting: Hinting) -> Result<Self> {
        let font_ref = font.font_ref()?;
        let size = Size::new(ppem);
        let outlines = font_ref.outline_glyphs();

        let hinter = match hinting {
            Hinting::None => None,
            Hinting::Full => {
                match HintingInstance::new(
                    &outlines,
                    size,
                    LocationRef::default(),
                    HintingOptions::default(),
                ) {
                    Ok(instance) => Some(instance),
                    Err(err) => {
                        log::debug!(
                            "{}: hinting unavailable ({}), drawing unhinted",
                            font.source(),
                            err
                        );
                        None
                    },
                }
            },
        };

        Ok(Self {
            charmap: font_ref.charmap(),
            metrics: font_ref.glyph_metrics(size, LocationRef::default()),
            outlines,
            hinter,
            ppem,
        })
    }

    pub fn ppem(&self) -> f32 {
        self.ppem
    }

    pub fn is_hinted(&self) -> bool {
        self.hinter.is_some()
    }

    fn glyph_id(&self, ch: char) -> GlyphId {
        self.charmap.map(ch).unwrap_or(GlyphId::NOTDEF)
    }

    /// Horizontal advance in pixels, whole pixels when hinted
    fn advance(&self, glyph_id: GlyphId) -> f32 {
        let advance = self.metrics.advance_width(glyph_id).unwrap_or(0.0);
        if self.hinter.is_some() {
            advance.round()
        } else {
            advance
        }
    }

    /// Pixel width of `text` when drawn with this face
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.advance(self.glyph_id(ch))).sum()
    }

    /// Fills `text` onto `pixmap` with its baseline origin at `(x, baseline)`
    pub fn draw(&self, pixmap: &mut Pixmap, text: &str, x: f32, baseline: f32, paint: &Paint) {
        let origin_x = if self.hinter.is_some() { x.round() } else { x };
        let mut pen = BaselinePen {
            builder: PathBuilder::new(),
            x: origin_x,
            y: baseline,
        };

        for ch in text.chars() {
            let glyph_id = self.glyph_id(ch);
            if let Some(glyph) = self.outlines.get(glyph_id) {
                let settings = match &self.hinter {
                    Some(instance) => DrawSettings::hinted(instance, false),
                    None => DrawSettings::unhinted(Size::new(self.ppem), LocationRef::default()),
                };
                if let Err(err) = glyph.draw(settings, &mut pen) {
                    log::debug!("glyph {} of {:?} not drawn: {}", glyph_id.to_u32(), ch, err);
                }
            }
            pen.x += self.advance(glyph_id);
        }

        // Whitespace-only text produces no path
        if let Some(path) = pen.builder.finish() {
            pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

/// Places y-up font outlines on a y-down canvas at a pen position
struct BaselinePen {
    builder: PathBuilder,
    x: f32,
    y: f32,
}

impl OutlinePen for BaselinePen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

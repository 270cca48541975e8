// this_file: crates/specimen-core/src/lib.rs

//! Specimen Core: shared types for rendering font specimen sheets
//!
//! A specimen sheet is produced in four steps, each owned by its own crate:
//!
//! 1. **Load** - font bytes are parsed and their name table read (`specimen-fontdb`)
//! 2. **Measure** - string widths decide where the title goes (`specimen-render-skia`)
//! 3. **Rasterize** - ruler, title, label and sample lines land on a canvas
//! 4. **Write** - the canvas becomes `<outdir>/<font basename>.png` (`specimen-export`)
//!
//! This crate holds what those steps share: [`SpecimenConfig`], the
//! [`layout`] arithmetic, the error types and the [`Exporter`] seam.

pub mod config;
pub mod error;
pub mod layout;
pub mod traits;

pub use config::{split_sample_text, CanvasSize, Hinting, SpecimenConfig, TitleFit};
pub use error::{Result, SpecimenError};
pub use layout::LineMetrics;
pub use traits::Exporter;

pub mod types {
    /// Straight (non-premultiplied) RGBA8 pixels, row major
    #[derive(Debug, Clone, PartialEq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub data: Vec<u8>,
    }

    impl BitmapData {
        /// RGBA of the pixel at `(x, y)`, if inside the bitmap
        pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let idx = (y as usize * self.width as usize + x as usize) * 4;
            let px = self.data.get(idx..idx + 4)?;
            Some([px[0], px[1], px[2], px[3]])
        }
    }
}

/// An opaque RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    /// Light gray of the corner guide lines
    pub const fn ruler() -> Self {
        Self::rgba(0xdd, 0xdd, 0xdd, 0xff)
    }
}

// this_file: crates/specimen-core/src/traits.rs

//! Seams between pipeline stages

use crate::{error::Result, types::BitmapData};

/// Turns a finished canvas into file bytes
///
/// ```ignore
/// struct RawExporter;
///
/// impl Exporter for RawExporter {
///     fn name(&self) -> &'static str { "raw" }
///     fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> { Ok(bitmap.data.clone()) }
///     fn extension(&self) -> &'static str { "rgba" }
///     fn mime_type(&self) -> &'static str { "application/octet-stream" }
/// }
/// ```
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

// this_file: crates/specimen-fontdb/src/names.rs

//! Name-table metadata
//!
//! See <https://learn.microsoft.com/typography/opentype/spec/name#name-ids>.

use skrifa::{string::StringId, MetadataProvider};
use specimen_core::Result;

use crate::Font;

/// Name IDs reported for every font, in order
pub const NAME_IDS: std::ops::RangeInclusive<u16> = 0..=25;

/// Name ID of the full font name, used as the specimen title
pub const FULL_NAME_ID: u16 = 4;

/// Human-readable label for a predefined name ID
pub fn name_label(id: u16) -> &'static str {
    match id {
        0 => "Copyright",
        1 => "Family",
        2 => "Subfamily",
        3 => "UniqueIdentifier",
        4 => "Full",
        5 => "Version",
        6 => "PostScript",
        7 => "Trademark",
        8 => "Manufacturer",
        9 => "Designer",
        10 => "Description",
        11 => "VendorURL",
        12 => "DesignerURL",
        13 => "License",
        14 => "LicenseURL",
        15 => "Reserved",
        16 => "TypographicFamily",
        17 => "TypographicSubfamily",
        18 => "CompatibleFull",
        19 => "SampleText",
        20 => "PostScriptCID",
        21 => "WWSFamily",
        22 => "WWSSubfamily",
        23 => "LightBackgroundPalette",
        24 => "DarkBackgroundPalette",
        25 => "VariationsPostScriptPrefix",
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub id: u16,
    pub label: &'static str,
    /// English string if present, otherwise the first one; empty when absent
    pub value: String,
}

/// The predefined name-table strings of one font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNames {
    entries: Vec<NameEntry>,
}

impl FontNames {
    pub fn from_font(font: &Font) -> Result<Self> {
        let font_ref = font.font_ref()?;
        let entries = NAME_IDS
            .map(|id| {
                let value = font_ref
                    .localized_strings(StringId::new(id))
                    .english_or_first()
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                NameEntry {
                    id,
                    label: name_label(id),
                    value,
                }
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Value for `id`, empty when the font does not carry it
    pub fn get(&self, id: u16) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.value.as_str())
            .unwrap_or("")
    }

    pub fn full_name(&self) -> &str {
        self.get(FULL_NAME_ID)
    }

    /// Reports every entry at info level
    pub fn log(&self) {
        for entry in &self.entries {
            log::info!("    {}: <{}>", entry.label, entry.value);
        }
    }
}

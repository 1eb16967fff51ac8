//! The fixed set of expense categories and their display metadata.
//!
//! Records store the category by name. Resolution back to metadata is an
//! exact-name lookup; anything unknown renders as [`fallback`] without the
//! stored name ever being rewritten.

/// Display metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Single glyph shown in the list and the picker.
    pub icon: &'static str,
    /// Tile color as RGB.
    pub color: (u8, u8, u8),
}

pub static CATEGORIES: [Category; 6] = [
    Category { name: "Food", icon: "食", color: (0x7B, 0x9E, 0x87) },
    Category { name: "Transport", icon: "車", color: (0x8B, 0x73, 0x55) },
    Category { name: "Shopping", icon: "買", color: (0xA6, 0x7B, 0x5B) },
    Category { name: "Bills", icon: "費", color: (0x6B, 0x7B, 0x8C) },
    Category { name: "Entertainment", icon: "遊", color: (0x9B, 0x7B, 0x9B) },
    Category { name: "Other", icon: "他", color: (0x7B, 0x8B, 0x7B) },
];

pub const DEFAULT_CATEGORY: &str = "Food";

const FALLBACK_INDEX: usize = 5;

/// The "Other" category, used for any name not in [`CATEGORIES`].
pub fn fallback() -> &'static Category {
    &CATEGORIES[FALLBACK_INDEX]
}

/// Index of `name` in [`CATEGORIES`], matching exactly.
pub fn position(name: &str) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.name == name)
}

/// Metadata for `name`, or [`fallback`] when the name is unknown.
pub fn resolve(name: &str) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(fallback)
}

//! # Character Catalog
//!
//! The immutable dataset the whole application is built around: an ordered
//! list of categories, each holding an ordered list of characters.
//!
//! ## Partitions
//!
//! The catalog is assembled from three static partitions, concatenated in a
//! fixed order:
//!
//! | Partition | Contents |
//! |-----------|----------|
//! | [`base`] | Punctuation, currency, math, arrows, legal marks |
//! | [`extra`] | Stars, shapes, box drawing, checkmarks, misc symbols |
//! | [`extra2`] | Emoji (smileys, animals, food, travel, objects) |
//!
//! The dataset is constructed once at startup via [`Dataset::load`] and passed
//! by reference into the filter engine, the renderer, and the exporter. It is
//! never mutated and never reached through a global.
//!
//! Every category carries a stable `id` distinct from its display name, so
//! tab selection and export grouping stay unambiguous even if two partitions
//! ever ship the same display name.

mod base;
mod extra;
mod extra2;
pub mod filter;

/// A single catalog entry: one user-perceived character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// The display string copied to the clipboard (one or more code units).
    pub glyph: String,
    /// The Unicode scalar value.
    pub code_point: u32,
    /// Human-readable label, e.g. "Leftwards arrow".
    pub description: String,
}

impl Character {
    /// Build a character from a code point, deriving its glyph.
    /// Returns `None` for values that are not Unicode scalar values.
    pub fn from_code_point(code_point: u32, description: &str) -> Option<Self> {
        char::from_u32(code_point).map(|c| Self {
            glyph: c.to_string(),
            code_point,
            description: description.to_string(),
        })
    }

    /// The HTML numeric character reference, e.g. `&#9786;`.
    pub fn entity(&self) -> String {
        format!("&#{};", self.code_point)
    }

    /// The `U+XXXX` label: uppercase hex, zero-padded to at least 4 digits.
    pub fn hex_label(&self) -> String {
        format!("U+{:04X}", self.code_point)
    }
}

/// A named, icon-tagged grouping of characters; the unit of tab selection,
/// collapse, and export grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier, unique across the whole dataset.
    pub id: String,
    /// Display label shown in the tab strip and section headers.
    pub name: String,
    /// Short display string shown next to the name.
    pub icon: String,
    pub items: Vec<Character>,
}

/// The full, immutable catalog.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Assemble the catalog from its three partitions, in fixed order.
    pub fn load() -> Self {
        let mut categories = base::categories();
        categories.extend(extra::categories());
        categories.extend(extra2::categories());
        Self { categories }
    }

    /// Total number of characters across all categories.
    pub fn total_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Look up a category by its stable id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Build a category from a static table of (code point, description) pairs.
/// Entries that are not valid scalar values are dropped.
pub(crate) fn build_category(id: &str, name: &str, icon: &str, table: &[(u32, &str)]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        items: table
            .iter()
            .filter_map(|&(cp, desc)| Character::from_code_point(cp, desc))
            .collect(),
    }
}

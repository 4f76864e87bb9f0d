//! # Filter Engine
//!
//! Stable, read-only filtering of the catalog by free-text query and active
//! category. The same predicate drives the on-screen view and the PDF
//! exporter, so both always agree on what "the current view" is.

use super::{Category, Character, Dataset};

/// Which categories the view is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Every category (the "All" tab).
    #[default]
    All,
    /// A single category, addressed by its stable id.
    One(String),
}

impl Selector {
    fn keeps(&self, category: &Category) -> bool {
        match self {
            Selector::All => true,
            Selector::One(id) => &category.id == id,
        }
    }
}

/// One surviving category together with its surviving items, borrowing from
/// the dataset. Item order is the dataset's order (stable filter, no sort).
#[derive(Debug)]
pub struct FilteredCategory<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a Character>,
}

/// Filter the catalog.
///
/// Category selection keeps a category iff the selector does. Item selection
/// applies only when the trimmed query is non-empty; a category left with
/// zero items is dropped entirely. Ordering of categories and items is
/// preserved.
pub fn filter<'a>(
    dataset: &'a Dataset,
    query: &str,
    selector: &Selector,
) -> Vec<FilteredCategory<'a>> {
    let raw = query.trim();
    let lowered = raw.to_lowercase();

    dataset
        .categories
        .iter()
        .filter(|category| selector.keeps(category))
        .filter_map(|category| {
            let items: Vec<&Character> = category
                .items
                .iter()
                .filter(|item| raw.is_empty() || matches(item, raw, &lowered))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(FilteredCategory { category, items })
            }
        })
        .collect()
}

/// The match predicate: a character survives a non-empty query iff any of
/// its description, raw glyph, HTML entity, decimal code point, or `U+XXXX`
/// hex label contains the query (text clauses case-insensitively, the glyph
/// clause as a literal substring of the raw query).
fn matches(item: &Character, raw: &str, lowered: &str) -> bool {
    item.description.to_lowercase().contains(lowered)
        || item.glyph.contains(raw)
        || item.entity().to_lowercase().contains(lowered)
        || item.code_point.to_string().contains(lowered)
        || item.hex_label().to_lowercase().contains(lowered)
}

/// Number of characters across a filtered view.
pub fn filtered_count(result: &[FilteredCategory<'_>]) -> usize {
    result.iter().map(|fc| fc.items.len()).sum()
}

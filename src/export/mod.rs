//! # Document Exporter
//!
//! Renders the currently filtered view into a paginated A4 PDF, one table
//! per surviving category, and writes it to disk.
//!
//! The exporter recomputes the filter predicate through
//! [`crate::dataset::filter::filter`] rather than reusing a cached view, so
//! the document always matches the screen exactly. Table planning
//! ([`build_tables`]) is pure and separately testable; [`export_document`]
//! lays the plan out with a running top-down Y cursor and writes page
//! footers once all content is final.

use crate::dataset::filter::{self, Selector};
use crate::dataset::Dataset;
use anyhow::{anyhow, Context, Result};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Default name of the exported file.
pub const EXPORT_FILE_NAME: &str = "unicode-emoji-reference.pdf";

const DOC_TITLE: &str = "Unicode & Emoji Reference";
const DOC_SUBTITLE: &str = "for Web Development";
const FOOTER_PREFIX: &str = "Unicode & Emoji Reference for Web Dev - Page";

// Page geometry: A4 portrait, millimetres, cursor measured from the top edge.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const TOP_MARGIN: f32 = 20.0;
/// A table row past this offset breaks the table onto a new page.
const ROW_BREAK: f32 = 280.0;
/// A category heading past this offset starts on a new page instead: the
/// heading, its column header row, and at least one data row must all fit,
/// so a table never opens empty at a page bottom.
const NEAR_BOTTOM: f32 = ROW_BREAK - HEADING_HEIGHT - ROW_HEIGHT;
const FOOTER_Y: f32 = 290.0;
const TABLE_GAP: f32 = 10.0;
const ROW_HEIGHT: f32 = 7.0;
const HEADING_HEIGHT: f32 = 8.0;

// Column layout: centered narrow glyph, wide description, centered bold
// entity, centered hex code point.
const TABLE_LEFT: f32 = 15.0;
const TABLE_RIGHT: f32 = 195.0;
const COL_CHAR_CENTER: f32 = 25.0;
const COL_DESC_LEFT: f32 = 42.0;
const COL_ENTITY_CENTER: f32 = 148.0;
const COL_HEX_CENTER: f32 = 180.0;

const PT_TO_MM: f32 = 0.352_778;
/// Widest description that fits its column at 9pt.
const DESC_MAX_CHARS: usize = 54;

/// One laid-out table cell row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub glyph: String,
    pub description: String,
    pub entity: String,
    pub hex: String,
}

/// One category's table: heading plus rows, already filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    pub heading: String,
    pub rows: Vec<TableRow>,
}

/// Plan the document: apply the filter predicate and emit one table per
/// category with at least one matching item. Categories that match nothing
/// produce no table and no heading.
pub fn build_tables(dataset: &Dataset, query: &str, selector: &Selector) -> Vec<CategoryTable> {
    filter::filter(dataset, query, selector)
        .iter()
        .map(|fc| CategoryTable {
            heading: format!("{} ({})", fc.category.name, fc.items.len()),
            rows: fc
                .items
                .iter()
                .map(|item| TableRow {
                    glyph: item.glyph.clone(),
                    description: truncate(&item.description, DESC_MAX_CHARS),
                    entity: item.entity(),
                    hex: item.hex_label(),
                })
                .collect(),
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Export the current view to `path`. Layout or save failures propagate;
/// no partial file is reported as complete.
pub fn export_document(
    dataset: &Dataset,
    query: &str,
    selector: &Selector,
    total_count: usize,
    path: &Path,
) -> Result<()> {
    let tables = build_tables(dataset, query, selector);

    let mut writer = PageWriter::new(DOC_TITLE)?;

    // First-page header: centered title, subtitle, and total count.
    writer.text_centered(DOC_TITLE, 18.0, PAGE_WIDTH / 2.0, 18.0, FontKind::Bold);
    writer.text_centered(DOC_SUBTITLE, 12.0, PAGE_WIDTH / 2.0, 26.0, FontKind::Regular);
    writer.text_centered(
        &format!("{total_count} characters"),
        10.0,
        PAGE_WIDTH / 2.0,
        33.0,
        FontKind::Regular,
    );
    writer.y = 45.0;

    for table in &tables {
        writer.layout_table(table);
    }

    writer.write_footers();
    writer.save(path)
}

#[derive(Clone, Copy)]
enum FontKind {
    Regular,
    Bold,
}

/// Tracks the document, the running top-down cursor, and every page created
/// so far (footers are stamped at the end).
struct PageWriter {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    /// Offset from the top edge of the current page, in millimetres.
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("failed to register Helvetica: {e}"))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("failed to register Helvetica-Bold: {e}"))?;
        Ok(Self {
            doc,
            regular,
            bold,
            pages: vec![(page, layer)],
            y: TOP_MARGIN,
        })
    }

    fn layer(&self) -> PdfLayerReference {
        // `pages` always holds at least the first page.
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        self.pages.push((page, layer));
        self.y = TOP_MARGIN;
    }

    fn font(&self, kind: FontKind) -> &IndirectFontRef {
        match kind {
            FontKind::Regular => &self.regular,
            FontKind::Bold => &self.bold,
        }
    }

    /// Draw text at an absolute top-down offset.
    fn text(&self, text: &str, size: f32, x: f32, from_top: f32, kind: FontKind) {
        self.layer()
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - from_top), self.font(kind));
    }

    /// Draw text centered on `center_x`, using the average Helvetica
    /// advance (half an em) to estimate the string width.
    fn text_centered(&self, text: &str, size: f32, center_x: f32, from_top: f32, kind: FontKind) {
        let width = text.chars().count() as f32 * size * 0.5 * PT_TO_MM;
        self.text(text, size, center_x - width / 2.0, from_top, kind);
    }

    fn rule(&self, from_top: f32) {
        let y = Mm(PAGE_HEIGHT - from_top);
        let layer = self.layer();
        layer.set_outline_thickness(0.2);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(TABLE_LEFT), y), false),
                (Point::new(Mm(TABLE_RIGHT), y), false),
            ],
            is_closed: false,
        });
    }

    /// The column header row, repeated whenever a table starts or resumes
    /// on a page.
    fn column_headers(&mut self) {
        self.text("Char", 9.0, COL_CHAR_CENTER - 4.0, self.y, FontKind::Bold);
        self.text("Description", 9.0, COL_DESC_LEFT, self.y, FontKind::Bold);
        self.text_centered("HTML Entity", 9.0, COL_ENTITY_CENTER, self.y, FontKind::Bold);
        self.text_centered("Unicode", 9.0, COL_HEX_CENTER, self.y, FontKind::Bold);
        self.rule(self.y + 2.0);
        self.y += ROW_HEIGHT;
    }

    fn layout_table(&mut self, table: &CategoryTable) {
        // Near-bottom check before the heading: move to a fresh page.
        if self.y > NEAR_BOTTOM {
            self.new_page();
        }

        self.text(&table.heading, 13.0, TABLE_LEFT, self.y, FontKind::Bold);
        self.y += HEADING_HEIGHT;

        self.column_headers();

        for row in &table.rows {
            if self.y > ROW_BREAK {
                self.new_page();
                self.column_headers();
            }
            self.text_centered(&row.glyph, 9.0, COL_CHAR_CENTER, self.y, FontKind::Regular);
            self.text(&row.description, 9.0, COL_DESC_LEFT, self.y, FontKind::Regular);
            self.text_centered(&row.entity, 9.0, COL_ENTITY_CENTER, self.y, FontKind::Bold);
            self.text_centered(&row.hex, 9.0, COL_HEX_CENTER, self.y, FontKind::Regular);
            self.y += ROW_HEIGHT;
        }

        // Table bottom edge, then the gap before the next heading.
        self.rule(self.y - ROW_HEIGHT + 2.0);
        self.y += TABLE_GAP;
    }

    /// Stamp every physical page with its footer. Called once, after all
    /// content is laid out.
    fn write_footers(&self) {
        for (n, &(page, layer)) in self.pages.iter().enumerate() {
            let text = format!("{} {}", FOOTER_PREFIX, n + 1);
            let width = text.chars().count() as f32 * 9.0 * 0.5 * PT_TO_MM;
            self.doc.get_page(page).get_layer(layer).use_text(
                text,
                9.0,
                Mm(PAGE_WIDTH / 2.0 - width / 2.0),
                Mm(PAGE_HEIGHT - FOOTER_Y),
                &self.regular,
            );
        }
    }

    fn save(self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| anyhow!("failed to write PDF: {e}"))?;
        Ok(())
    }
}

//! Color catalog and similarity ranking
//!
//! The catalog is the fixed, named reference set of colors the ranker
//! searches. It is constructed once from an external source, handed
//! around by reference, and never mutated -- there is no process-wide
//! cached copy, callers own the value and inject it where needed.
//!
//! Ranking is a full linear scan ordered by Euclidean RGB distance. This
//! is deliberate: the catalog is small and static, the metric is the
//! plain channel distance (not a perceptual one), and ties must keep
//! catalog order. An index (k-d tree, grid) would be a valid
//! optimization only if it preserved that tie order exactly.

mod entry;

pub use entry::CatalogEntry;

use crate::color::Rgb;
use crate::query::Query;

/// Squared Euclidean distance over the three RGB channels.
///
/// Same ordering as the square-rooted form, but exact integer math: no
/// float comparisons, so equal-distance ties are genuinely equal.
#[inline]
fn distance_squared(a: Rgb, b: Rgb) -> i64 {
    let dr = a.r as i64 - b.r as i64;
    let dg = a.g as i64 - b.g as i64;
    let db = a.b as i64 - b.b as i64;
    dr * dr + dg * dg + db * db
}

/// Euclidean RGB distance, for display alongside ranked results.
///
/// Plain channel-space distance by design -- not Lab, not CIEDE2000.
#[inline]
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    (distance_squared(a, b) as f64).sqrt()
}

/// Column to order catalog results by, mirroring the explorer's sort
/// selector. Each key sorts on the entry's textual form of that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Display name, case-insensitive.
    #[default]
    Name,
    /// Canonical `#rrggbb` form. Fixed-width lowercase hex, so the
    /// lexicographic order is also the numeric channel order.
    Hex,
    /// Textual `rgb(r, g, b)` form. Lexicographic over the rendered
    /// text, so "rgb(100, ..." sorts before "rgb(2, ..." -- the order
    /// the explorer's RGB column has always shown.
    Rgb,
}

impl SortKey {
    /// All keys, in presentation order.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Hex, SortKey::Rgb];

    /// Stable lowercase name for display and CLI round trips.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Hex => "hex",
            SortKey::Rgb => "rgb",
        }
    }
}

/// Sort a result set by a catalog column. The sort is stable, so entries
/// that compare equal (duplicate names, identical colors) keep their
/// incoming order.
pub fn sort_entries(entries: &mut [&CatalogEntry], key: SortKey) {
    match key {
        SortKey::Name => entries.sort_by_key(|e| e.name().to_lowercase()),
        SortKey::Hex => entries.sort_by_key(|e| e.hex()),
        SortKey::Rgb => entries.sort_by_key(|e| e.rgb_literal()),
    }
}

/// A read-only catalog of named reference colors.
///
/// # Example
///
/// ```
/// use color_engine::{Catalog, CatalogEntry, Rgb};
///
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new("Black", Rgb::new(0, 0, 0)),
///     CatalogEntry::new("White", Rgb::new(255, 255, 255)),
/// ]);
///
/// let nearest = catalog.find_similar(Rgb::new(10, 10, 10), 1);
/// assert_eq!(nearest[0].name(), "Black");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a catalog from its entries. Order is significant: it is the
    /// tie-break order for equidistant similarity results.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Entries as a slice, in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Rank the catalog against a query color and return the closest `k`
    /// entries, ascending by Euclidean RGB distance.
    ///
    /// Equidistant entries keep their catalog order (stable sort over an
    /// integer key). `k` larger than the catalog returns everything.
    pub fn find_similar(&self, query: Rgb, k: usize) -> Vec<&CatalogEntry> {
        let mut ranked: Vec<&CatalogEntry> = self.entries.iter().collect();
        ranked.sort_by_key(|e| distance_squared(query, e.rgb()));
        ranked.truncate(k);
        ranked
    }

    /// Case-insensitive substring match on entry names, catalog order
    /// preserved.
    pub fn filter_by_name(&self, needle: &str) -> Vec<&CatalogEntry> {
        let needle = needle.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Route a classified query to the matching lookup.
    ///
    /// Color queries rank by similarity (up to `k` results), name queries
    /// substring-filter, and the no-filter query returns the whole
    /// catalog in order.
    pub fn search(&self, query: &Query, k: usize) -> Vec<&CatalogEntry> {
        match query {
            Query::Hex(c) | Query::RgbLiteral(c) => self.find_similar(*c, k),
            Query::Name(needle) => self.filter_by_name(needle),
            Query::All => self.entries.iter().collect(),
        }
    }
}

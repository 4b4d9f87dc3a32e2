//! # Catalog Module
//!
//! Parses the catalog source text into [`Item`]s and maintains the derived
//! filtered/sorted/paginated view over them.
//!
//! ## Derived View State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CatalogView                                      │
//! │                                                                         │
//! │  items (immutable, loaded once)                                         │
//! │     │                                                                   │
//! │     │  set_search(text) ──► filter by case-insensitive substring        │
//! │     ▼                       then re-apply the active sort               │
//! │  filtered (recomputed, never patched incrementally)                     │
//! │     │                                                                   │
//! │     │  set_sort(rule) ────► re-order filtered in place                  │
//! │     │  set_per_page(n) ───► resize the page window                      │
//! │     │  set_page(p) ───────► move the cursor (valid pages only)          │
//! │     ▼                                                                   │
//! │  page_items() ── the slice handed to the renderer                       │
//! │                                                                         │
//! │  Every search / sort / page-size mutation resets the cursor to 1.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The view replaces the original widget's pile of global mutables
//! (`games`, `filteredGames`, `currentPage`, `itemsPerPage`) with one owner
//! and a defined mutation API.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::types::Item;
use crate::DEFAULT_PER_PAGE;

// =============================================================================
// Sort Rule
// =============================================================================

/// How the filtered view is ordered.
///
/// The string forms (`name-asc`, `price-desc`, ...) match the sort-selector
/// values the presentation layer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRule {
    /// Name, lexicographic ascending.
    NameAsc,
    /// Name, lexicographic descending.
    NameDesc,
    /// Download size ascending.
    SizeAsc,
    /// Download size descending.
    SizeDesc,
    /// Displayed price ascending (floor and discount included).
    PriceAsc,
    /// Displayed price descending.
    PriceDesc,
}

impl SortRule {
    fn apply(self, items: &mut [Item]) {
        match self {
            SortRule::NameAsc => items.sort_by(|a, b| a.name.cmp(&b.name)),
            SortRule::NameDesc => items.sort_by(|a, b| b.name.cmp(&a.name)),
            SortRule::SizeAsc => items.sort_by(|a, b| cmp_f64(a.size_gb, b.size_gb)),
            SortRule::SizeDesc => items.sort_by(|a, b| cmp_f64(b.size_gb, a.size_gb)),
            SortRule::PriceAsc => items.sort_by_key(|i| i.price()),
            SortRule::PriceDesc => items.sort_by(|a, b| b.price().cmp(&a.price())),
        }
    }
}

impl fmt::Display for SortRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortRule::NameAsc => "name-asc",
            SortRule::NameDesc => "name-desc",
            SortRule::SizeAsc => "size-asc",
            SortRule::SizeDesc => "size-desc",
            SortRule::PriceAsc => "price-asc",
            SortRule::PriceDesc => "price-desc",
        };
        f.write_str(s)
    }
}

impl FromStr for SortRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortRule::NameAsc),
            "name-desc" => Ok(SortRule::NameDesc),
            "size-asc" => Ok(SortRule::SizeAsc),
            "size-desc" => Ok(SortRule::SizeDesc),
            "price-asc" => Ok(SortRule::PriceAsc),
            "price-desc" => Ok(SortRule::PriceDesc),
            other => Err(format!(
                "unknown sort rule '{other}' (expected one of: name-asc, name-desc, \
                 size-asc, size-desc, price-asc, price-desc)"
            )),
        }
    }
}

/// Sizes come from user-edited data; NaN never survives parsing, but the
/// comparator still has to be total.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// =============================================================================
// Catalog Parsing
// =============================================================================

/// The parsed catalog: valid items plus a count of rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    skipped: usize,
}

impl Catalog {
    /// Parses catalog source text into items.
    ///
    /// ## Format
    /// Header-row CSV with fields `name`, `size`, and optionally
    /// `discount`, in any column order. Quoted fields may contain commas
    /// and doubled quotes.
    ///
    /// ## Row Admission
    /// A row becomes an [`Item`] only if it has a non-empty `name` and a
    /// parseable, non-negative `size`. Anything else is counted in
    /// [`skipped_rows`](Catalog::skipped_rows) and excluded whole; there is
    /// no partial-item admission. A malformed `discount` value degrades to
    /// "no discount" without dropping the row.
    pub fn parse(source: &str) -> Catalog {
        let mut lines = source.lines().filter(|l| !l.trim().is_empty());

        let header = match lines.next() {
            Some(h) => h,
            None => return Catalog::default(),
        };
        let columns = Columns::from_header(header);

        let mut items = Vec::new();
        let mut skipped = 0usize;
        for line in lines {
            let fields = split_record(line);
            match columns.item_from(&fields) {
                Some(item) => items.push(item),
                None => skipped += 1,
            }
        }

        Catalog { items, skipped }
    }

    /// The admitted items, in file order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// How many rows failed admission and were excluded.
    pub fn skipped_rows(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Column positions resolved from the header row.
struct Columns {
    name: Option<usize>,
    size: Option<usize>,
    discount: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> Columns {
        let fields = split_record(header);
        let position = |wanted: &str| {
            fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case(wanted))
        };
        Columns {
            name: position("name"),
            size: position("size"),
            discount: position("discount"),
        }
    }

    fn item_from(&self, fields: &[String]) -> Option<Item> {
        let name = fields.get(self.name?)?.trim();
        if name.is_empty() {
            return None;
        }

        let size_gb: f64 = fields.get(self.size?)?.trim().parse().ok()?;
        if !size_gb.is_finite() || size_gb < 0.0 {
            return None;
        }

        let discount = self
            .discount
            .and_then(|col| fields.get(col))
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|d| *d > 0.0 && *d < 1.0);

        Some(Item {
            name: name.to_string(),
            size_gb,
            discount,
        })
    }
}

/// Splits one CSV record, honoring double-quoted fields with `""` escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}

// =============================================================================
// Catalog View
// =============================================================================

/// The catalog plus its derived view state: filter, sort, and page cursor.
#[derive(Debug, Clone)]
pub struct CatalogView {
    items: Vec<Item>,
    filtered: Vec<Item>,
    search: String,
    /// `None` until a sort is chosen; the filtered view then keeps file
    /// order, which is what the widget showed before the first sort.
    sort: Option<SortRule>,
    current_page: usize,
    per_page: usize,
}

impl CatalogView {
    /// Builds a view over a parsed catalog. The initial view shows
    /// everything in file order, page 1, default page size.
    pub fn new(catalog: Catalog) -> Self {
        let filtered = catalog.items.clone();
        CatalogView {
            items: catalog.items,
            filtered,
            search: String::new(),
            sort: None,
            current_page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Sets the search query and recomputes the filtered view.
    ///
    /// Order of operations: filter, then re-apply the active sort, then
    /// reset the cursor to page 1. An empty query admits every item.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        self.refilter();
    }

    /// Sets the sort rule and re-orders the filtered view in place.
    ///
    /// Sorting never alters the active filter; it only re-orders what the
    /// filter admitted. Resets the cursor to page 1.
    pub fn set_sort(&mut self, rule: SortRule) {
        self.sort = Some(rule);
        rule.apply(&mut self.filtered);
        self.current_page = 1;
    }

    /// Sets the page-window size (minimum 1) and resets the cursor.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.current_page = 1;
    }

    /// Moves the cursor to page `p` if `1 <= p <= total_pages()`.
    ///
    /// An out-of-range request is ignored: the caller is responsible for
    /// only offering valid pages, and a stray click must never fault.
    pub fn set_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// The slice of the filtered view for the current page, clipped to the
    /// sequence length.
    pub fn page_items(&self) -> &[Item] {
        let start = (self.current_page - 1) * self.per_page;
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.per_page).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Total pages: `ceil(filtered / per_page)`, never less than 1. An
    /// empty view still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.per_page).max(1)
    }

    /// The whole filtered, sorted view.
    pub fn filtered(&self) -> &[Item] {
        &self.filtered
    }

    /// The full catalog, untouched by filter or sort.
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortRule> {
        self.sort
    }

    /// Full recompute of `filtered` from `items`: filter, sort, reset.
    fn refilter(&mut self) {
        let needle = self.search.to_lowercase();
        self.filtered = if needle.is_empty() {
            self.items.clone()
        } else {
            self.items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        if let Some(rule) = self.sort {
            rule.apply(&mut self.filtered);
        }
        self.current_page = 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Rupiah;

    const SOURCE: &str = "\
name,size,discount
Stardew Valley,1.2,
Hades,6.4,0.2
Celeste,0.5,0.1
\"Baldur's Gate, Enhanced\",3.7,
,9.9,
Broken Row,,
";

    fn view() -> CatalogView {
        CatalogView::new(Catalog::parse(SOURCE))
    }

    #[test]
    fn test_parse_admits_valid_rows_only() {
        let catalog = Catalog::parse(SOURCE);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.skipped_rows(), 2); // missing name, missing size
    }

    #[test]
    fn test_parse_quoted_field_with_comma() {
        let catalog = Catalog::parse(SOURCE);
        assert!(catalog
            .items()
            .iter()
            .any(|i| i.name == "Baldur's Gate, Enhanced"));
    }

    #[test]
    fn test_parse_header_only_and_empty_source() {
        assert!(Catalog::parse("").is_empty());
        assert!(Catalog::parse("name,size,discount\n").is_empty());
    }

    #[test]
    fn test_parse_malformed_discount_degrades_to_none() {
        let catalog = Catalog::parse("name,size,discount\nA,1.0,huge\nB,1.0,1.5\nC,1.0,0\n");
        assert_eq!(catalog.len(), 3);
        assert!(catalog.items().iter().all(|i| i.discount.is_none()));
    }

    #[test]
    fn test_parse_without_discount_column() {
        let catalog = Catalog::parse("name,size\nA,1.0\n");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.items()[0].discount.is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut view = view();
        view.set_search("hAdEs");
        assert_eq!(view.filtered().len(), 1);
        assert_eq!(view.filtered()[0].name, "Hades");
    }

    #[test]
    fn test_empty_search_restores_full_catalog_with_sort() {
        let mut view = view();
        view.set_sort(SortRule::NameDesc);
        view.set_search("valley");
        assert_eq!(view.filtered().len(), 1);

        view.set_search("");
        assert_eq!(view.filtered().len(), 4);
        // The active sort still applies after the filter is cleared.
        assert_eq!(view.filtered()[0].name, "Stardew Valley");
    }

    #[test]
    fn test_sort_preserves_filter() {
        let mut view = view();
        view.set_search("e"); // Stardew Valley, Hades, Celeste, Baldur's...
        let before = view.filtered().len();
        view.set_sort(SortRule::SizeDesc);
        assert_eq!(view.filtered().len(), before);
        assert_eq!(view.filtered()[0].name, "Hades");
    }

    #[test]
    fn test_price_sort_uses_pricing_rule() {
        // Celeste: 0.5 GB rounds to 0 → floored base 1000, 10% off → 900.
        // Stardew Valley: 1.2 GB rounds to 1 → 2000.
        // The discounted floor price must sort below the plain price.
        let catalog = Catalog::parse("name,size,discount\nA,1.2,\nB,0.5,0.1\n");
        let mut view = CatalogView::new(catalog);
        view.set_sort(SortRule::PriceAsc);

        let names: Vec<&str> = view.filtered().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(view.filtered()[0].price(), Rupiah::new(900));
        assert_eq!(view.filtered()[1].price(), Rupiah::new(2000));
    }

    #[test]
    fn test_mutations_reset_page_cursor() {
        let mut view = view();
        view.set_per_page(1);
        view.set_page(3);
        assert_eq!(view.current_page(), 3);

        view.set_search("e");
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_sort(SortRule::NameAsc);
        assert_eq!(view.current_page(), 1);

        view.set_page(2);
        view.set_per_page(2);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_set_page_out_of_range_is_ignored() {
        let mut view = view();
        view.set_per_page(2); // 4 items → 2 pages
        view.set_page(0);
        assert_eq!(view.current_page(), 1);
        view.set_page(3);
        assert_eq!(view.current_page(), 1);
        view.set_page(2);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_page_items_clips_last_page() {
        let catalog = Catalog::parse("name,size\nA,1\nB,1\nC,1\nD,1\nE,1\n");
        let mut view = CatalogView::new(catalog);
        view.set_per_page(2);
        view.set_page(3);

        let page = view.page_items();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "E");
    }

    #[test]
    fn test_total_pages_minimum_one() {
        let mut view = CatalogView::new(Catalog::parse(""));
        assert_eq!(view.total_pages(), 1);
        assert!(view.page_items().is_empty());

        view = self::view();
        view.set_search("no such game");
        assert_eq!(view.total_pages(), 1);
        assert!(view.page_items().is_empty());
    }

    #[test]
    fn test_sort_rule_round_trips_selector_strings() {
        for rule in [
            SortRule::NameAsc,
            SortRule::NameDesc,
            SortRule::SizeAsc,
            SortRule::SizeDesc,
            SortRule::PriceAsc,
            SortRule::PriceDesc,
        ] {
            assert_eq!(rule.to_string().parse::<SortRule>(), Ok(rule));
        }
        assert!("price".parse::<SortRule>().is_err());
    }
}

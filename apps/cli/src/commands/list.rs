//! # List Command
//!
//! Catalog browsing: applies search, sort, and pagination to the loaded
//! catalog and renders the page the way the widget's grid did, with the
//! in-cart marker and the page-selector strip.

use tracing::warn;

use warung_core::pagination::{page_controls, PageControl};
use warung_core::view::project;
use warung_core::{CatalogView, SortRule};
use warung_store::{load_catalog, CartSlot};

use super::CommandResult;
use crate::config::Config;

pub fn run(
    config: &Config,
    search: &str,
    sort: Option<SortRule>,
    page: usize,
    per_page: usize,
) -> CommandResult {
    let catalog = match load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            // Missing source means an empty storefront, not a crash.
            warn!(error = %err, "catalog unavailable");
            return CommandResult::success(format!(
                "Katalog tidak tersedia ({}).\nTidak ada game untuk ditampilkan.",
                config.catalog_path.display()
            ));
        }
    };
    let cart = CartSlot::new(&config.cart_path).load_or_empty();

    let mut view = CatalogView::new(catalog);
    view.set_per_page(per_page);
    view.set_search(search);
    if let Some(rule) = sort {
        view.set_sort(rule);
    }
    // Last, so the cursor survives: every mutation above resets it to 1.
    view.set_page(page);

    let rows = project(view.page_items(), &cart);

    let mut out = format!(
        "Menampilkan {} dari {} game — Halaman {}/{}\n",
        rows.len(),
        view.filtered().len(),
        view.current_page(),
        view.total_pages()
    );

    if rows.is_empty() {
        out.push_str("\nTidak ada game yang cocok.\n");
    } else {
        let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
        out.push('\n');
        for row in &rows {
            let mark = if row.in_cart { "[x]" } else { "[ ]" };
            out.push_str(&format!(
                "  {mark} {name:<name_width$}  {size:>9}  {price:>12}",
                name = row.name,
                size = row.size_display,
                price = row.price_display,
            ));
            if let Some(original) = &row.discounted_from {
                out.push_str(&format!("  (normal {original})"));
            }
            out.push('\n');
        }
    }

    let controls = page_controls(view.current_page(), view.total_pages());
    if !controls.is_empty() {
        let strip: Vec<String> = controls
            .iter()
            .map(|control| match control {
                PageControl::Page {
                    number,
                    active: true,
                } => format!("[{number}]"),
                PageControl::Page { number, .. } => number.to_string(),
                PageControl::Ellipsis => "...".to_string(),
            })
            .collect();
        out.push('\n');
        out.push_str(&strip.join(" "));
        out.push('\n');
    }

    CommandResult::success(out)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config_in(dir: &Path) -> Config {
        Config {
            catalog_path: dir.join("games.csv"),
            cart_path: dir.join("cart.json"),
            phone: "62".to_string(),
        }
    }

    fn write_catalog(config: &Config, body: &str) {
        std::fs::write(&config.catalog_path, body).unwrap();
    }

    #[test]
    fn test_list_renders_page_and_strip() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_catalog(&config, "name,size\nA,1\nB,1\nC,1\nD,1\nE,1\n");

        let result = run(&config, "", None, 3, 2);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("Menampilkan 1 dari 5 game — Halaman 3/3"));
        assert!(result.output.contains("[ ] E"));
        assert!(result.output.contains("1 2 [3]"));
    }

    #[test]
    fn test_list_marks_cart_membership() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_catalog(&config, "name,size\nHades,6.4\n");
        std::fs::write(&config.cart_path, r#"[{"name":"Hades","size":6.4}]"#).unwrap();

        let result = run(&config, "", None, 1, 10);
        assert!(result.output.contains("[x] Hades"));
    }

    #[test]
    fn test_list_search_and_sort() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_catalog(&config, "name,size,discount\nA,1.2,\nB,0.5,0.1\n");

        let result = run(&config, "", Some(SortRule::PriceAsc), 1, 10);
        let a = result.output.find("A").unwrap();
        let b = result.output.find("B").unwrap();
        assert!(b < a, "discounted floor price sorts first");
    }

    #[test]
    fn test_missing_catalog_is_an_empty_state_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let result = run(&config, "", None, 1, 10);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("Katalog tidak tersedia"));
    }

    #[test]
    fn test_invalid_page_request_falls_back_to_first_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_catalog(&config, "name,size\nA,1\nB,1\n");

        let result = run(&config, "", None, 99, 1);
        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("Halaman 1/2"));
    }
}

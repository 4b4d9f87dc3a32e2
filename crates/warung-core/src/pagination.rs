//! # Pagination Controls
//!
//! Builds the page-selector strip for the current view: a window of page
//! numbers centered on the current page, with the first and last page
//! always reachable and ellipses marking any gaps.
//!
//! ```text
//! total=20, current=10, max_visible=5:
//!
//!   [1] [...] [8] [9] [*10*] [11] [12] [...] [20]
//!
//! total=20, current=2:
//!
//!   [1] [*2*] [3] [4] [5] [...] [20]     (no leading ellipsis: no gap)
//! ```

// =============================================================================
// Control Descriptors
// =============================================================================

/// Default width of the centered page-number window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One element of the page-selector strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A clickable page number; `active` marks the current page.
    Page { number: usize, active: bool },
    /// A gap marker between the window and an endpoint.
    Ellipsis,
}

impl PageControl {
    fn page(number: usize, current: usize) -> Self {
        PageControl::Page {
            number,
            active: number == current,
        }
    }
}

// =============================================================================
// Strip Construction
// =============================================================================

/// Builds the page-control strip with the default window width.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    page_controls_with(current, total, MAX_VISIBLE_PAGES)
}

/// Builds the page-control strip.
///
/// ## Algorithm
/// Center a `max_visible`-wide window on `current`, clamped to
/// `[1, total]`; widen back toward 1 when the clamp at the top shrank it.
/// Prepend page 1 (plus an ellipsis if the gap exceeds one page) when the
/// window starts past it, and mirror that at the `total` end.
///
/// Produces nothing when `total <= 1`: a single page needs no selector.
pub fn page_controls_with(current: usize, total: usize, max_visible: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }
    let max_visible = max_visible.max(1);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut controls = Vec::new();

    if start > 1 {
        controls.push(PageControl::page(1, current));
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    for number in start..=end {
        controls.push(PageControl::page(number, current));
    }

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::page(total, current));
    }

    controls
}

// =============================================================================
// Unit Tests
// =============================================================================

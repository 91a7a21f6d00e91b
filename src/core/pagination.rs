/// Fixed page size for matching queries.
pub const PER_PAGE: u32 = 21;

/// Maximum number of page buttons rendered at once.
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Whether `page` is a valid target for a page change.
///
/// Valid targets lie in [1, total_pages] and differ from the current page.
pub fn is_valid_page_change(page: u32, current: u32, total_pages: u32) -> bool {
    page >= 1 && page <= total_pages && page != current
}

/// Compute the window of page-number buttons to display.
///
/// At most [`MAX_PAGE_BUTTONS`] buttons. All pages when they fit; otherwise the
/// window is anchored so the current page stays visible: pages 1..=5 near the
/// start, the last five near the end, and a window centered on the current
/// page in between.
pub fn page_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).collect();
    }

    let (start, end) = if current <= 3 {
        (1, MAX_PAGE_BUTTONS)
    } else if current >= total_pages - 2 {
        (total_pages - MAX_PAGE_BUTTONS + 1, total_pages)
    } else {
        (current - 2, current + 2)
    };

    (start..=end).collect()
}

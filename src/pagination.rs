//! Page counters and the numbered pager window shown under the table.

use serde::Serialize;

/// Page numbers to show in a pager, `None` standing for an ellipsis.
///
/// Shows `edge` pages at both ends and a window of `before`/`after` pages
/// around the current one.
fn page_window(
    total_pages: usize,
    current_page: usize,
    edge: usize,
    before: usize,
    after: usize,
) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let head_end = (1 + edge).min(total_pages + 1);
    pages.extend((1..head_end).map(Some));

    let mid_start = head_end.max(current_page.saturating_sub(before));
    let mid_end = (current_page + after + 1).min(total_pages + 1);
    if mid_start > head_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let tail_start = mid_end.max(total_pages.saturating_sub(edge) + 1);
    if tail_start > mid_end {
        pages.push(None);
    }
    pages.extend((tail_start..=total_pages).map(Some));

    pages
}

/// Pagination summary of the currently rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    /// Total matching records.
    pub total: u64,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl PageInfo {
    pub fn new(page: usize, page_size: usize, total: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = usize::try_from(total)
            .unwrap_or(usize::MAX)
            .div_ceil(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            pages: page_window(total_pages, page, 2, 2, 2),
        }
    }

    /// Text of the page-info element.
    pub fn label(&self) -> String {
        format!("Page {} \u{2022} {} total", self.page, self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

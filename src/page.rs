//! Fixed-size page slicing over an already-filtered list.

/// Slices a filtered record list into fixed-size, 1-indexed pages.
///
/// Owns only the page size; the filtered list is passed in per call so
/// page navigation never re-runs the query evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// Paginator with `page_size` items per page (raised to 1 when 0).
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for `filtered_len` items.
    ///
    /// Zero results still report one page (containing zero items) so a
    /// renderer never sees "page 0 of 0".
    pub fn total_pages(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size).max(1)
    }

    /// Clamp a requested 1-indexed page into the valid range for
    /// `filtered_len` items.
    pub fn clamp_page(&self, page: usize, filtered_len: usize) -> usize {
        page.clamp(1, self.total_pages(filtered_len))
    }

    /// Items visible on `page` (1-indexed; out-of-range pages are clamped).
    pub fn page_items<'a, T>(&self, filtered: &'a [T], page: usize) -> &'a [T] {
        let page = self.clamp_page(page, filtered.len());
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(filtered.len());
        &filtered[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_still_reports_one_page() {
        let paginator = Paginator::new(12);
        assert_eq!(paginator.total_pages(0), 1);
        let empty: [u32; 0] = [];
        assert!(paginator.page_items(&empty, 1).is_empty());
        assert!(paginator.page_items(&empty, 7).is_empty());
    }

    #[test]
    fn pages_cover_the_list_without_overlap() {
        let paginator = Paginator::new(2);
        let items = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(paginator.total_pages(items.len()), 3);
        assert_eq!(paginator.page_items(&items, 1), &['a', 'b']);
        assert_eq!(paginator.page_items(&items, 2), &['c', 'd']);
        assert_eq!(paginator.page_items(&items, 3), &['e']);
    }

    #[test]
    fn out_of_range_pages_clamp_to_the_edges() {
        let paginator = Paginator::new(2);
        let items = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(paginator.clamp_page(0, items.len()), 1);
        assert_eq!(paginator.clamp_page(4, items.len()), 3);
        assert_eq!(paginator.page_items(&items, 4), &['e']);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.total_pages(3), 3);
    }
}

use serde::Serialize;

/// One page of a list plus where it sits in the whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Zero-based index of this page.
    pub page_index: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl PageInfo {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }
}

/// Slice `items` into the page at `page_index`.
///
/// A zero `page_size` is treated as one. An index past the last page lands
/// on the last page.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_index: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size);
    let page_index = page_index.min(total_pages.saturating_sub(1));

    let start = page_index * page_size;
    let end = (start + page_size).min(total_count);

    Page {
        items: items.get(start..end).unwrap_or_default().to_vec(),
        page_info: PageInfo {
            page_index,
            page_size,
            total_count,
            total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.page_info.total_pages, 3);
        assert!(page.page_info.has_next());
        assert!(page.page_info.has_previous());
    }

    #[test]
    fn last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert!(!page.page_info.has_next());
    }

    #[test]
    fn index_past_the_end_is_clamped() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 9, 10);
        assert_eq!(page.page_info.page_index, 2);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn empty_list() {
        let page = paginate::<u32>(&[], 3, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.page_info.total_pages, 0);
        assert_eq!(page.page_info.page_index, 0);
        assert!(!page.page_info.has_next());
    }

    #[test]
    fn zero_page_size_is_one() {
        let page = paginate(&[1, 2, 3], 1, 0);
        assert_eq!(page.items, vec![2]);
        assert_eq!(page.page_info.page_size, 1);
    }
}

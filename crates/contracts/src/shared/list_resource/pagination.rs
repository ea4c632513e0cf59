use serde::{Deserialize, Serialize};

/// Allowed page sizes of the list tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| format!("Unsupported page size {}, expected one of 10, 25, 50, 100", value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// `max(1, ceil(count / page_size))`
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Rows of the 1-based `page_index`; out-of-range pages are empty
pub fn page_slice<T>(rows: &[T], page_index: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_sub(1).saturating_mul(page_size);
    if page_index == 0 || start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Page window over the filtered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: PageSize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Paginator {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_index: 1,
            page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn can_go_prev(&self, loading: bool) -> bool {
        self.page_index > 1 && !loading
    }

    pub fn can_go_next(&self, total_pages: usize, loading: bool) -> bool {
        !loading && self.page_index < total_pages
    }

    /// Returns `true` if the page changed
    pub fn prev(&mut self, loading: bool) -> bool {
        if !self.can_go_prev(loading) {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Returns `true` if the page changed
    pub fn next(&mut self, total_pages: usize, loading: bool) -> bool {
        if !self.can_go_next(total_pages, loading) {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page_index = 1;
    }

    pub fn reset(&mut self) {
        self.page_index = 1;
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        page_slice(rows, self.page_index, self.page_size.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_three_rows_by_ten() {
        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(total_pages(rows.len(), 10), 3);
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 3, 10), &[21, 22, 23]);
        assert!(page_slice(&rows, 4, 10).is_empty());
    }

    #[test]
    fn empty_collection_has_one_page() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(total_pages(0, 25), 1);
        assert!(page_slice(&rows, 1, 25).is_empty());
    }

    #[test]
    fn pages_concatenate_back_to_the_rows() {
        for count in [0usize, 1, 9, 10, 11, 57, 100] {
            let rows: Vec<usize> = (0..count).collect();
            for size in [1usize, 3, 10, 25, 50, 100, 101] {
                let rebuilt: Vec<usize> = (1..=total_pages(count, size))
                    .flat_map(|page| page_slice(&rows, page, size).iter().copied())
                    .collect();
                assert_eq!(rebuilt, rows, "count {count}, size {size}");
            }
        }
    }

    #[test]
    fn out_of_range_indexes_are_empty() {
        let rows = vec![1, 2, 3];
        assert!(page_slice(&rows, 0, 10).is_empty());
        assert!(page_slice(&rows, usize::MAX, 10).is_empty());
    }

    #[test]
    fn navigation_is_gated_by_bounds_and_loading() {
        let mut pager = Paginator::new(PageSize::Ten);
        assert!(!pager.prev(false));
        assert!(pager.next(3, false));
        assert!(pager.next(3, false));
        assert!(!pager.next(3, false));
        assert_eq!(pager.page_index(), 3);

        assert!(!pager.prev(true));
        assert!(!pager.can_go_next(5, true));
        assert!(pager.prev(false));
        assert_eq!(pager.page_index(), 2);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut pager = Paginator::new(PageSize::Ten);
        pager.next(5, false);
        pager.next(5, false);
        pager.set_page_size(PageSize::Fifty);
        assert_eq!(pager.page_index(), 1);
        assert_eq!(pager.page_size().get(), 50);
    }

    #[test]
    fn page_size_accepts_only_known_values() {
        assert_eq!(PageSize::try_from(25), Ok(PageSize::TwentyFive));
        assert!(PageSize::try_from(20).is_err());
        let parsed: PageSize = serde_json::from_str("100").unwrap();
        assert_eq!(parsed, PageSize::Hundred);
        assert!(serde_json::from_str::<PageSize>("7").is_err());
    }
}

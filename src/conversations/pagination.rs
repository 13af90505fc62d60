use std::ops::Range;

/// Conversations per page
pub const PAGE_SIZE: usize = 5;

/// Order-preserving partition of a conversation sequence into fixed-size pages
///
/// Pages are 1-indexed. There is always at least one page, even for an empty
/// sequence, so navigation never points at a page that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
}

impl Pagination {
    /// A zero `page_size` is treated as one item per page
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self { total_items, page_size: page_size.max(1) }
    }

    pub fn with_default_size(total_items: usize) -> Self {
        Self::new(total_items, PAGE_SIZE)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Half-open index range owned by page `page`, or `None` if out of range
    pub fn page_range(&self, page: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.total_pages() {
            return None;
        }
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        Some(start..end)
    }

    /// The items of `page` taken from `items`
    pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> Option<&'a [T]> {
        self.page_range(page).and_then(|range| items.get(range))
    }

    /// Ranges of every page, in order
    pub fn pages(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (1..=self.total_pages()).filter_map(move |page| self.page_range(page))
    }

    /// Page that owns the item at `index`
    pub fn page_of(&self, index: usize) -> Option<usize> {
        (index < self.total_items).then(|| index / self.page_size + 1)
    }
}

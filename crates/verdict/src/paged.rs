use crate::ext::OutcomeExt;
use crate::header::Header;
use crate::list::ListOutcome;

/// A list outcome for one page of a larger result set.
#[derive(Debug, Clone)]
pub struct PagedOutcome<T> {
    list: ListOutcome<T>,
    page_index: i64,
    page_size: i64,
    total_rows: i64,
}

impl<T> PagedOutcome<T> {
    pub fn new(list: ListOutcome<T>, page_index: i64, page_size: i64, total_rows: i64) -> Self {
        Self {
            list,
            page_index,
            page_size,
            total_rows,
        }
    }

    /// 1-based index of this page.
    pub fn page_index(&self) -> i64 {
        self.page_index
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Row count across all pages.
    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    #[must_use]
    pub fn with_paging(mut self, page_index: i64, page_size: i64, total_rows: i64) -> Self {
        self.page_index = page_index;
        self.page_size = page_size;
        self.total_rows = total_rows;
        self
    }

    /// Number of pages needed for `total_rows`; 0 if either the row count
    /// or the page size is not positive.
    pub fn page_count(&self) -> i64 {
        if self.total_rows <= 0 || self.page_size <= 0 {
            return 0;
        }
        let full = self.total_rows / self.page_size;
        if self.total_rows % self.page_size == 0 {
            full
        } else {
            full + 1
        }
    }

    /// Rows before this page.
    pub fn skip(&self) -> i64 {
        self.page_index
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }

    pub fn count(&self) -> usize {
        self.list.count()
    }

    pub fn is_list_empty(&self) -> bool {
        self.list.is_list_empty()
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    pub fn data(&self) -> Option<&Vec<T>> {
        self.list.data()
    }

    pub fn as_list(&self) -> &ListOutcome<T> {
        &self.list
    }

    pub fn into_list(self) -> ListOutcome<T> {
        self.list
    }
}

impl<T> OutcomeExt for PagedOutcome<T> {
    fn header(&self) -> &Header {
        self.list.header()
    }

    fn header_mut(&mut self) -> &mut Header {
        self.list.header_mut()
    }

    fn has_data(&self) -> bool {
        self.list.has_data()
    }
}

impl<T> std::fmt::Display for PagedOutcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | page {}/{}",
            self.list,
            self.page_index,
            self.page_count()
        )
    }
}

//! Filter types for querying the catalog.

/// Stock-status filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    /// All books regardless of stock status
    #[default]
    All,

    /// Only books currently on the shelf
    InStock,

    /// Only books currently out on loan
    OnLoan,
}

/// Filter options for querying books.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    /// Substring match against title, author, or ISBN (case-insensitive)
    pub text: Option<String>,

    /// Filter by exact genre label
    pub genre: Option<String>,

    /// Filter by stock status
    pub stock: StockFilter,
}

impl BookFilter {
    /// True when the filter selects every book.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.genre.is_none() && self.stock == StockFilter::All
    }
}

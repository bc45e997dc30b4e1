use thiserror::Error;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("page must be a positive integer, got {0}")]
    InvalidPage(i64),
}

/// Half-open window `[start, end)` over an id-ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: i64,
    pub end: i64,
}

impl PageWindow {
    /// Compute the window for a 1-indexed page number.
    ///
    /// Page `P` covers `[(P - 1) * 10, (P - 1) * 10 + 10)`. A page past the end of
    /// the data is still a valid window; it just selects nothing. Offsets beyond
    /// `i64::MAX` saturate, which selects nothing too.
    ///
    /// # Examples
    /// ```
    /// use trivia_quiz::PageWindow;
    ///
    /// let window = PageWindow::for_page(3).unwrap();
    /// assert_eq!((window.start, window.end), (20, 30));
    /// assert!(PageWindow::for_page(0).is_err());
    /// ```
    pub fn for_page(page: i64) -> Result<Self, PageError> {
        if page < 1 {
            return Err(PageError::InvalidPage(page));
        }

        let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
        let end = start.saturating_add(QUESTIONS_PER_PAGE);

        Ok(Self { start, end })
    }

    /// Rows to skip, for `OFFSET`.
    pub const fn offset(&self) -> i64 {
        self.start
    }

    /// Rows to take, for `LIMIT`.
    pub const fn limit(&self) -> i64 {
        self.end - self.start
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            start: 0,
            end: QUESTIONS_PER_PAGE,
        }
    }
}

use std::num::IntErrorKind;

use serde::Deserialize;
use trivia_quiz::PageWindow;

use crate::error::ApiError;

/// `?page=N` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Requested page; absent or non-numeric values fall back to page 1.
    ///
    /// Integers outside `i64` clamp to its bounds, so a huge page is still past the end.
    pub fn page(&self) -> i64 {
        let Some(page) = self.page.as_deref() else {
            return 1;
        };

        match page.trim().parse::<i64>() {
            Ok(page) => page,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
        }
    }

    pub fn window(&self) -> Result<PageWindow, ApiError> {
        Ok(PageWindow::for_page(self.page())?)
    }
}

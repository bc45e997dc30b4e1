//! Quiz domain logic for Trivia
//!
//! This crate holds the rules that do not depend on storage or HTTP: how a
//! 1-indexed page number maps onto a window of questions, and how the next
//! quiz question is picked from a category.

pub mod pagination;
pub mod selection;

pub use pagination::{PageError, PageWindow, QUESTIONS_PER_PAGE};
pub use selection::{QuizError, remaining_questions, select_next_question};

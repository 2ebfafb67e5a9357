use super::model::id::BookId;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    #[error("invalid search field: {0} (expected title/author/year)")]
    InvalidSearchField(String),

    #[error("invalid status: {0} (expected available/checked_out)")]
    InvalidStatus(String),

    #[error("no book ids left to assign")]
    IdSpaceExhausted,
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::BookId;
use crate::domain::error::DomainError;

/// 貸出状態。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// 在庫あり
    #[default]
    Available,
    /// 貸出中
    CheckedOut,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::CheckedOut];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 永続化形式と同じ綴りのみ受け付ける。正規化は呼び出し側の責務。
impl FromStr for BookStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::InvalidStatus(s.to_string()))
    }
}

/// 蔵書レコード。Catalogが所有し、Catalogを通じて操作する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    /// 出版年。検証しない自由テキスト。
    year: String,
    status: BookStatus,
}

impl Book {
    pub(crate) fn new(id: BookId, title: String, author: String, year: String) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: BookStatus::default(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: BookStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_is_available() {
        let book = Book::new(BookId::new(7), "Dune".into(), "Herbert".into(), "1965".into());
        assert_eq!(book.id(), BookId::new(7));
        assert_eq!(book.status(), BookStatus::Available);
    }

    #[test]
    fn status_parses_wire_names_only() {
        assert_eq!("available".parse::<BookStatus>().unwrap(), BookStatus::Available);
        assert_eq!(
            "checked_out".parse::<BookStatus>().unwrap(),
            BookStatus::CheckedOut
        );
        assert!(matches!(
            "loaned".parse::<BookStatus>(),
            Err(DomainError::InvalidStatus(s)) if s == "loaned"
        ));
        assert!("Available".parse::<BookStatus>().is_err());
    }

    #[test]
    fn book_serializes_with_flat_keys() {
        let mut book = Book::new(BookId::new(2), "1984".into(), "Orwell".into(), "1949".into());
        book.set_status(BookStatus::CheckedOut);

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 2,
                "title": "1984",
                "author": "Orwell",
                "year": "1949",
                "status": "checked_out"
            })
        );
    }

    #[test]
    fn unknown_status_fails_deserialization() {
        let json = r#"{"id":1,"title":"T","author":"A","year":"Y","status":"lost"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::book::{Book, BookStatus};
use super::id::BookId;
use super::search::SearchField;
use crate::domain::error::DomainError;

/// 蔵書目録 — 集約ルート。全レコード操作はここを経由する。
///
/// 並び順は挿入順（＝表示順）。`next_id` は保存せず、読み込み時に
/// `max(id) + 1` から導出する。u64を使い切った後はNoneで、追加は失敗する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: Option<BookId>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: Some(BookId::FIRST),
        }
    }

    /// 既存レコードから復元する。スキーマ検証は行わない。
    pub fn from_books(books: Vec<Book>) -> Self {
        let next_id = books
            .iter()
            .map(Book::id)
            .max()
            .map_or(Some(BookId::FIRST), |max| max.next());
        Self { books, next_id }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn next_id(&self) -> Option<BookId> {
        self.next_id
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    /// 新しいレコードを末尾に追加し、作成したレコードを返す。内容は検証しない。
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Book, DomainError> {
        let id = self.next_id.ok_or(DomainError::IdSpaceExhausted)?;
        let book = Book::new(id, title.into(), author.into(), year.into());
        self.books.push(book.clone());
        self.next_id = id.next();
        Ok(book)
    }

    /// 最初に一致したレコードを削除して返す。IDは再利用しない。
    pub fn remove(&mut self, id: BookId) -> Result<Book, DomainError> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        Ok(self.books.remove(pos))
    }

    /// 指定属性で検索する（大文字小文字を無視した完全一致、目録順）。
    pub fn search(&self, field: SearchField, value: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| field.matches(b, value))
            .collect()
    }

    pub fn set_status(&mut self, id: BookId, status: BookStatus) -> Result<&Book, DomainError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        book.set_status(status);
        Ok(book)
    }
}

/// 永続化形式はレコード配列そのもの。
impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.books.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Book>::deserialize(deserializer).map(Self::from_books)
    }
}

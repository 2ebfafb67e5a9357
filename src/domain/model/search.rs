use std::fmt;
use std::str::FromStr;

use super::book::Book;
use crate::domain::error::DomainError;

/// 検索可能な属性。閉じた集合で、各属性に取り出し関数が対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

type Extractor = fn(&Book) -> &str;

/// 入力名 → 属性 → 取り出し関数 の対応表
static FIELDS: [(&str, SearchField, Extractor); 3] = [
    ("title", SearchField::Title, Book::title),
    ("author", SearchField::Author, Book::author),
    ("year", SearchField::Year, Book::year),
];

impl SearchField {
    pub fn name(&self) -> &'static str {
        self.entry().0
    }

    /// 属性値を文字列として取り出す。
    pub fn extract<'a>(&self, book: &'a Book) -> &'a str {
        (self.entry().2)(book)
    }

    /// 大文字小文字を無視した完全一致。
    pub fn matches(&self, book: &Book, value: &str) -> bool {
        self.extract(book).to_lowercase() == value.to_lowercase()
    }

    fn entry(&self) -> &'static (&'static str, SearchField, Extractor) {
        // FIELDSは全variantを網羅している
        match self {
            SearchField::Title => &FIELDS[0],
            SearchField::Author => &FIELDS[1],
            SearchField::Year => &FIELDS[2],
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        FIELDS
            .iter()
            .find(|(name, _, _)| *name == key)
            .map(|(_, field, _)| *field)
            .ok_or_else(|| DomainError::InvalidSearchField(s.to_string()))
    }
}

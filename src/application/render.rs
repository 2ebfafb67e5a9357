use std::fmt;

use crate::domain::model::book::Book;

/// 1レコード = 1行の表示形式。
pub struct BookLine<'a>(pub &'a Book);

impl fmt::Display for BookLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        write!(
            f,
            "ID: {}, title: {}, author: {}, year: {}, status: {}",
            book.id(),
            book.title(),
            book.author(),
            book.year(),
            book.status()
        )
    }
}

/// レコード列を改行区切りで描画する（末尾改行なし）。
pub fn render_lines<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    books
        .into_iter()
        .map(|b| BookLine(b).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

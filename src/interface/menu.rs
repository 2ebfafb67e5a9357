//! Interactive text menu for book-shelf
//!
//! stdin / stdout <-> application::BookStore
//!
//! 6 actions: add, delete, search, list, change status, exit

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use anyhow::Context;

use crate::application::error::AppError;
use crate::application::render::{render_lines, BookLine};
use crate::application::store::BookStore;
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::model::id::BookId;
use crate::domain::repository::CatalogRepository;
use crate::infra::json_store::JsonCatalogRepository;

// =============================================================================
// Public entry point
// =============================================================================

/// 設定された保存先でStoreを開き、標準入出力でメニューを回す。
pub fn run(config: &Config) -> anyhow::Result<()> {
    let repo = JsonCatalogRepository::new(&config.library);
    let store = BookStore::open(repo)
        .with_context(|| format!("failed to load library {}", config.library.display()))?;
    log::info!(
        "opened {} with {} book(s)",
        store.repository().path().display(),
        store.catalog().len()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(store, stdin.lock(), stdout.lock());
    menu.run()?;
    Ok(())
}

// =============================================================================
// Menu actions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Delete,
    Search,
    List,
    ChangeStatus,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Add,
        MenuAction::Delete,
        MenuAction::Search,
        MenuAction::List,
        MenuAction::ChangeStatus,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Add => "Add book",
            MenuAction::Delete => "Delete book",
            MenuAction::Search => "Search books",
            MenuAction::List => "List books",
            MenuAction::ChangeStatus => "Change book status",
            MenuAction::Exit => "Exit",
        }
    }
}

impl FromStr for MenuAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.trim().parse().map_err(|_| ())?;
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(())
    }
}

// =============================================================================
// Menu loop
// =============================================================================

/// 入出力を差し替え可能なメニュー。入力終端はExitとして扱う。
pub struct Menu<R: CatalogRepository, I, O> {
    store: BookStore<R>,
    input: I,
    output: O,
}

impl<R: CatalogRepository, I: BufRead, O: Write> Menu<R, I, O> {
    pub fn new(store: BookStore<R>, input: I, output: O) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (BookStore<R>, O) {
        (self.store, self.output)
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Your choice: ")? else {
                return Ok(());
            };
            let flow = match choice.parse::<MenuAction>() {
                Ok(MenuAction::Add) => self.add_book()?,
                Ok(MenuAction::Delete) => self.delete_book()?,
                Ok(MenuAction::Search) => self.search_books()?,
                Ok(MenuAction::List) => self.list_books()?,
                Ok(MenuAction::ChangeStatus) => self.change_status()?,
                Ok(MenuAction::Exit) => ControlFlow::Break(()),
                Err(()) => {
                    writeln!(self.output, "Invalid choice, please try again")?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                return Ok(());
            }
        }
    }

    // --- actions ---

    fn add_book(&mut self) -> io::Result<ControlFlow<()>> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(year) = self.prompt("Year: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        match self.store.add(&title, &author, &year) {
            Ok(book) => writeln!(self.output, "Book added: {}", BookLine(&book))?,
            Err(e) => Self::report(&mut self.output, &e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn delete_book(&mut self) -> io::Result<ControlFlow<()>> {
        let id = match self.prompt_id("Book ID to delete: ")? {
            ControlFlow::Continue(Some(id)) => id,
            ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };
        match self.store.remove(id) {
            Ok(_) => writeln!(self.output, "Book deleted")?,
            Err(e) => Self::report(&mut self.output, &e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn search_books(&mut self) -> io::Result<ControlFlow<()>> {
        let Some(field) = self.prompt("Search by (title/author/year): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(value) = self.prompt("Value: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let field = field.trim().to_lowercase();
        match self.store.search(&field, &value) {
            Ok(found) if found.is_empty() => writeln!(self.output, "No books found")?,
            Ok(found) => writeln!(self.output, "{}", render_lines(found))?,
            Err(e) => Self::report(&mut self.output, &e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn list_books(&mut self) -> io::Result<ControlFlow<()>> {
        let books = self.store.list_all();
        if books.is_empty() {
            writeln!(self.output, "Library is empty")?;
        } else {
            writeln!(self.output, "{}", render_lines(books))?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn change_status(&mut self) -> io::Result<ControlFlow<()>> {
        let id = match self.prompt_id("Book ID to update: ")? {
            ControlFlow::Continue(Some(id)) => id,
            ControlFlow::Continue(None) => return Ok(ControlFlow::Continue(())),
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        };
        let Some(status) = self.prompt("New status (available/checked_out): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let status = status.trim().to_lowercase();
        match self.store.set_status(id, &status) {
            Ok(_) => writeln!(self.output, "Status updated")?,
            Err(e) => Self::report(&mut self.output, &e)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    // --- I/O helpers ---

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Choose an action:")?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, action.label())?;
        }
        Ok(())
    }

    /// 1行読む。入力終端ならNone。行末の改行は除去する。
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// ID入力。解釈できなければメッセージを出して `Continue(None)`。
    fn prompt_id(&mut self, message: &str) -> io::Result<ControlFlow<(), Option<BookId>>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(ControlFlow::Break(()));
        };
        match raw.parse::<BookId>() {
            Ok(id) => Ok(ControlFlow::Continue(Some(id))),
            Err(_) => {
                writeln!(self.output, "Invalid id: {raw}")?;
                Ok(ControlFlow::Continue(None))
            }
        }
    }

    fn report(output: &mut O, e: &AppError) -> io::Result<()> {
        match e {
            AppError::Domain(DomainError::BookNotFound(id)) => {
                writeln!(output, "Book with id {id} not found")
            }
            AppError::Domain(DomainError::InvalidSearchField(field)) => writeln!(
                output,
                "Invalid search field: {field} (expected title/author/year)"
            ),
            AppError::Domain(DomainError::InvalidStatus(status)) => writeln!(
                output,
                "Invalid status: {status} (expected available/checked_out)"
            ),
            AppError::Domain(DomainError::IdSpaceExhausted) => {
                writeln!(output, "Cannot add book: no ids left to assign")
            }
            AppError::Storage(inner) => writeln!(output, "Storage error: {inner}"),
        }
    }
}

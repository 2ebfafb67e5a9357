//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use book_shelf::application::store::BookStore;
use book_shelf::domain::model::catalog::Catalog;
use book_shelf::domain::repository::CatalogRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error: {0}")]
pub struct InMemoryError(String);

/// ファイルI/O不要のインメモリリポジトリ。保存回数も数える。
/// `fail_saves` を立てると以降のsaveが失敗する。
pub struct InMemoryRepo {
    stored: RefCell<Option<String>>,
    saves: Cell<usize>,
    pub fail_saves: Cell<bool>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(None),
            saves: Cell::new(0),
            fail_saves: Cell::new(false),
        }
    }

    pub fn with_catalog(catalog: &Catalog) -> Self {
        let repo = Self::new();
        repo.save(catalog).unwrap();
        repo.saves.set(0);
        repo
    }

    /// 任意の文字列を保存済みデータとして置く。
    pub fn overwrite_raw(&self, json: &str) {
        *self.stored.borrow_mut() = Some(json.to_string());
    }

    /// 最後に保存されたJSON
    pub fn stored_json(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CatalogRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Catalog>, Self::Error> {
        match self.stored.borrow().as_deref() {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| InMemoryError(e.to_string())),
            None => Ok(None),
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), Self::Error> {
        if self.fail_saves.get() {
            return Err(InMemoryError("disk full".into()));
        }
        let json = serde_json::to_string(catalog).unwrap();
        *self.stored.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// =============================================================================
// TestLibrary — 構造化済みテスト用目録
// =============================================================================

pub struct TestLibrary;

impl TestLibrary {
    /// 標準的なテスト用目録:
    /// ```text
    /// 1. Dune / Herbert / 1965
    /// 2. 1984 / Orwell / 1949
    /// 3. Animal Farm / Orwell / 1945 (checked_out)
    /// ```
    pub fn standard() -> Catalog {
        let json = r#"[
            {"id": 1, "title": "Dune", "author": "Herbert", "year": "1965", "status": "available"},
            {"id": 2, "title": "1984", "author": "Orwell", "year": "1949", "status": "available"},
            {"id": 3, "title": "Animal Farm", "author": "Orwell", "year": "1945", "status": "checked_out"}
        ]"#;
        serde_json::from_str(json).unwrap()
    }

    /// InMemoryRepoに目録を保存してBookStoreを返す。
    pub fn store_with(catalog: &Catalog) -> BookStore<InMemoryRepo> {
        BookStore::open(InMemoryRepo::with_catalog(catalog)).unwrap()
    }

    pub fn empty_store() -> BookStore<InMemoryRepo> {
        BookStore::open(InMemoryRepo::new()).unwrap()
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}

/// 目録のIDを順に取り出す。
pub fn ids<'a>(books: impl IntoIterator<Item = &'a book_shelf::domain::model::book::Book>) -> Vec<u64> {
    books.into_iter().map(|b| b.id().get()).collect()
}

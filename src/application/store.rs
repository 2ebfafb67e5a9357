use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, BookStatus};
use crate::domain::model::catalog::Catalog;
use crate::domain::model::id::BookId;
use crate::domain::model::search::SearchField;
use crate::domain::repository::CatalogRepository;

use super::error::AppError;

/// 蔵書目録に対するユースケース。
///
/// 生成時に一度だけ読み込み、以降はメモリ上の目録を正とする。
/// 変更系の操作は目録の複製に適用して保存し、保存に成功した時点で
/// メモリ側を差し替える（保存失敗時はメモリもファイルも変化しない）。
pub struct BookStore<R: CatalogRepository> {
    repo: R,
    catalog: Catalog,
}

impl<R: CatalogRepository> BookStore<R> {
    /// 保存先から目録を読み込む。保存先が無ければ空で開始する。
    pub fn open(repo: R) -> Result<Self, AppError> {
        let catalog = repo.load().map_err(AppError::storage)?.unwrap_or_default();
        Ok(Self { repo, catalog })
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 書籍を追加する。
    pub fn add(&mut self, title: &str, author: &str, year: &str) -> Result<Book, AppError> {
        let mut staged = self.catalog.clone();
        let book = staged
            .add(title, author, year)
            .inspect_err(|e| log::warn!("{e}"))?;
        self.commit(staged)?;
        log::info!("added book {}: {title:?}", book.id());
        Ok(book)
    }

    /// 書籍を削除する。
    pub fn remove(&mut self, id: BookId) -> Result<Book, AppError> {
        let mut staged = self.catalog.clone();
        let book = staged.remove(id).inspect_err(|e| log::warn!("{e}"))?;
        self.commit(staged)?;
        log::info!("removed book {id}");
        Ok(book)
    }

    /// 属性名を検証してから検索する。一致なしは空のVec。
    pub fn search(&self, field: &str, value: &str) -> Result<Vec<&Book>, AppError> {
        let field: SearchField = field.parse().inspect_err(|e| log::warn!("{e}"))?;
        Ok(self.catalog.search(field, value))
    }

    pub fn list_all(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.catalog.get(id)
    }

    /// 状態を変更する。ID検索が先で、存在するIDに対してのみ状態値を検証する。
    pub fn set_status(&mut self, id: BookId, new_status: &str) -> Result<Book, AppError> {
        if self.catalog.get(id).is_none() {
            let e = DomainError::BookNotFound(id);
            log::warn!("{e}");
            return Err(e.into());
        }
        let status: BookStatus = new_status.parse().inspect_err(|e| log::warn!("{e}"))?;
        let mut staged = self.catalog.clone();
        let book = staged.set_status(id, status)?.clone();
        self.commit(staged)?;
        log::info!("book {id} is now {status}");
        Ok(book)
    }

    // --- private ---

    fn commit(&mut self, staged: Catalog) -> Result<(), AppError> {
        self.repo.save(&staged).map_err(AppError::storage)?;
        self.catalog = staged;
        Ok(())
    }
}

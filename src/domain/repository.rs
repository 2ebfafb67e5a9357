use super::model::catalog::Catalog;

/// 永続化の抽象。Infra層が実装する。
pub trait CatalogRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 保存先が存在しなければNone。
    fn load(&self) -> Result<Option<Catalog>, Self::Error>;
    /// コレクション全体を上書き保存する（スナップショット書き込み）。
    fn save(&self, catalog: &Catalog) -> Result<(), Self::Error>;
}

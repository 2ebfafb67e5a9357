use crate::domain::error::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 呼び出し側に見せるエラー分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 対象IDが目録にない
    NotFound,
    /// 検索属性・状態が既知の集合にない
    InvalidParameter,
    /// 採番できるIDが残っていない
    Exhausted,
    /// 保存先の読み書きに失敗
    Persistence,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Domain(DomainError::BookNotFound(_)) => ErrorKind::NotFound,
            AppError::Domain(DomainError::InvalidSearchField(_))
            | AppError::Domain(DomainError::InvalidStatus(_)) => ErrorKind::InvalidParameter,
            AppError::Domain(DomainError::IdSpaceExhausted) => ErrorKind::Exhausted,
            AppError::Storage(_) => ErrorKind::Persistence,
        }
    }

    pub(crate) fn storage(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Storage(Box::new(e))
    }
}

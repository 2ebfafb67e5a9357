use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID。Storeが採番する正の連番で、作成後は変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    pub const FIRST: BookId = BookId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// 次の連番。u64を使い切ったらNone。
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 正の整数のみ受け付ける（0は `IntErrorKind::Zero`）。
impl std::str::FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<std::num::NonZeroU64>()
            .map(|n| Self(n.get()))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// BWT 列中的元素：真实符号或哨兵。
///
/// 哨兵用独立的枚举分支表示，而不是在字母表中预留一个值（如 0 或 `$`），
/// 因此任意字母表（包括已用满全部 256 个字节值的原始字节）都可以安全变换。
///
/// 派生的全序中 `Sentinel` 排在所有 `Value(_)` 之前。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol<T> {
    Sentinel,
    Value(T),
}

impl<T> Symbol<T> {
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Symbol::Sentinel)
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Symbol::Sentinel => None,
            Symbol::Value(v) => Some(v),
        }
    }

    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Symbol::Sentinel => None,
            Symbol::Value(v) => Some(v),
        }
    }
}

impl<T> From<T> for Symbol<T> {
    fn from(v: T) -> Self {
        Symbol::Value(v)
    }
}

impl<T: fmt::Display> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Sentinel => f.write_str("$"),
            Symbol::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// 统计序列中哨兵的个数。
pub fn count_sentinels<T>(col: &[Symbol<T>]) -> usize {
    col.iter().filter(|s| s.is_sentinel()).count()
}

use thiserror::Error;

/// 索引构建与逆变换过程中的错误。
///
/// 空输入不是错误：各阶段对空输入都返回空结果。
#[derive(Debug, Error)]
pub enum Error {
    /// BWT 列中哨兵个数不为 1，逆变换无定义
    #[error("malformed BWT column: expected exactly one sentinel, found {sentinels}")]
    MalformedIndex { sentinels: usize },

    /// 哨兵唯一，但 LF 映射在恢复全部符号之前就回到了哨兵
    #[error("column is not a BWT: LF cycle closed after {decoded} of {expected} symbols")]
    NotABwt { decoded: usize, expected: usize },

    /// 后缀数组长度与（带哨兵的）文本长度不一致
    #[error("suffix array length mismatch: expected {expected}, got {actual}")]
    SuffixArrayMismatch { expected: usize, actual: usize },

    /// 输入文本中含有用来显示哨兵的字符，渲染后的列无法再解析回来
    #[error("input contains the sentinel character {sentinel:?} at char {position}; choose another --sentinel")]
    SentinelInInput { sentinel: char, position: usize },

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

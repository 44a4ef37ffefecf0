//! 字节串 / 文本与核心符号序列之间的薄适配层。

use crate::error::{Error, Result};
use crate::index::bwt;
use crate::index::symbol::Symbol;

pub fn bytes_to_bwt(data: &[u8]) -> Vec<Symbol<u8>> {
    bwt::forward(data)
}

pub fn bwt_to_bytes(column: &[Symbol<u8>]) -> Result<Vec<u8>> {
    bwt::inverse_bwt(column)
}

pub fn text_to_bwt(text: &str) -> Vec<Symbol<char>> {
    let chars: Vec<char> = text.chars().collect();
    bwt::forward(&chars)
}

pub fn bwt_to_text(column: &[Symbol<char>]) -> Result<String> {
    Ok(bwt::inverse_bwt(column)?.into_iter().collect())
}

/// 对字节 BWT 逆变换后再按 UTF-8 解码；结果不是合法 UTF-8 时返回 `InvalidUtf8`。
pub fn bwt_bytes_to_text(column: &[Symbol<u8>]) -> Result<String> {
    let bytes = bwt::inverse_bwt(column)?;
    Ok(String::from_utf8(bytes)?)
}

/// 确认文本中不含 `sentinel` 字符，否则渲染出的列会出现多个"哨兵"。
pub fn ensure_no_sentinel(text: &str, sentinel: char) -> Result<()> {
    match text.chars().position(|ch| ch == sentinel) {
        Some(position) => Err(Error::SentinelInInput { sentinel, position }),
        None => Ok(()),
    }
}

/// 将 BWT 列渲染为字符串，哨兵用 `sentinel` 表示（仅用于展示）。
pub fn render_column(column: &[Symbol<char>], sentinel: char) -> String {
    column
        .iter()
        .map(|s| match s {
            Symbol::Sentinel => sentinel,
            Symbol::Value(ch) => *ch,
        })
        .collect()
}

/// [`render_column`] 的逆过程：`sentinel` 字符解析为哨兵，其余字符原样保留。
pub fn parse_column(s: &str, sentinel: char) -> Vec<Symbol<char>> {
    s.chars()
        .map(|ch| if ch == sentinel { Symbol::Sentinel } else { Symbol::Value(ch) })
        .collect()
}

use crate::index::symbol::Symbol;

/// BWT 矩阵：终止文本（末尾追加哨兵）全部旋转按字典序排列后的各行。
///
/// 仅用于展示，不经过后缀数组构建；最后一列即 BWT 列。
pub fn bwt_matrix<T: Ord + Clone>(text: &[T]) -> Vec<Vec<Symbol<T>>> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut t: Vec<Symbol<T>> = text.iter().cloned().map(Symbol::Value).collect();
    t.push(Symbol::Sentinel);
    let n = t.len();
    let mut rows: Vec<Vec<Symbol<T>>> = (0..n)
        .map(|i| t[i..].iter().chain(t[..i].iter()).cloned().collect())
        .collect();
    rows.sort();
    rows
}

/// 将矩阵格式化为多行文本，每行一个旋转。
pub fn format_matrix(text: &str, sentinel: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for row in bwt_matrix(&chars) {
        for s in &row {
            out.push(match s {
                Symbol::Sentinel => sentinel,
                Symbol::Value(ch) => *ch,
            });
        }
        out.push('\n');
    }
    out
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::symbol::Symbol;

/// C 表的一项：`count` 为扫描序列中该值首次出现之前的元素个数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CEntry<T> {
    pub count: usize,
    pub symbol: Symbol<T>,
}

/// Occ 表中的一条记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccEntry<T> {
    /// 前缀长度 k（从 1 开始，等于元素下标 + 1）
    pub pos: usize,
    /// 前 k 个元素中该符号的出现次数
    pub rank: usize,
    /// 位置 k 处的原始符号
    pub symbol: Symbol<T>,
}

/// 单个符号的 Occ 分组：该符号每出现一次追加一条记录，pos 与 rank 均严格递增。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccGroup<T> {
    pub symbol: Symbol<T>,
    pub entries: Vec<OccEntry<T>>,
}

/// 按首次出现顺序列出互不相同的值（保留第一次出现，不排序）。
fn distinct_in_order<T: Ord>(input: &[Symbol<T>]) -> Vec<&Symbol<T>> {
    let mut seen: BTreeSet<&Symbol<T>> = BTreeSet::new();
    let mut order = Vec::new();
    for s in input {
        if seen.insert(s) {
            order.push(s);
        }
    }
    order
}

/// 输入是否已按符号值（哨兵最小）非降序排列，即 [`build_c`] 的前置条件。
pub fn is_sorted_by_symbol<T: Ord>(input: &[Symbol<T>]) -> bool {
    input.windows(2).all(|w| w[0] <= w[1])
}

/// 构建 C 表。
///
/// 按首次出现顺序枚举 `input` 中互不相同的值 y，记录 `(y 首次出现之前的元素个数, y)`。
///
/// **前置条件（由调用方保证，不做校验）**：`input` 必须已按符号值排序
/// （即排序后的 BWT 列，而不是原始 BWT 列）。只有这样，"首次出现之前的元素个数"
/// 才等于"全文中严格小于 y 的符号个数"，也就是 FM 索引所需的 C 值。
/// 对未排序的输入，结果依然内部一致，但不具备累计计数的含义。
/// 可以用 [`is_sorted_by_symbol`] 检查；[`FMIndex::build`] 会自行排序。
pub fn build_c<T: Ord + Clone>(input: &[Symbol<T>]) -> Vec<CEntry<T>> {
    let mut seen: BTreeSet<&Symbol<T>> = BTreeSet::new();
    let mut c = Vec::new();
    // 单遍扫描：首次遇到 y 时的下标就是它之前的元素个数
    for (i, s) in input.iter().enumerate() {
        if seen.insert(s) {
            c.push(CEntry { count: i, symbol: s.clone() });
        }
    }
    c
}

/// 构建 Occ 表。
///
/// 分组顺序与 [`build_c`] 相同（首次出现顺序）。对输入中下标为 i 的元素 y，
/// 向 y 的分组追加 `(i + 1, 该组已有记录数 + 1, y)`；每组长度等于 y 的出现次数。
///
/// 与 [`build_c`] 一样对输入顺序不做校验：Occ 按原样扫描输入，通常传入原始 BWT 列。
pub fn build_occ<T: Ord + Clone>(input: &[Symbol<T>]) -> Vec<OccGroup<T>> {
    let order = distinct_in_order(input);
    let group_of: BTreeMap<&Symbol<T>, usize> =
        order.iter().enumerate().map(|(gi, &s)| (s, gi)).collect();
    let mut occ: Vec<OccGroup<T>> = order
        .into_iter()
        .map(|s| OccGroup { symbol: s.clone(), entries: Vec::new() })
        .collect();
    for (i, s) in input.iter().enumerate() {
        let group = &mut occ[group_of[s]];
        let rank = group.entries.len() + 1;
        group.entries.push(OccEntry { pos: i + 1, rank, symbol: s.clone() });
    }
    occ
}

/// FM 索引：由同一 BWT 列构建的 (C 表, Occ 表)。
///
/// 两张表必须来自同一列，因此字段不公开，只能经 [`FMIndex::build`] 一次性构建。
///
/// 两张表的顺序不同：C 表扫描的是排序后的列，所以按符号值升序（`$abcdr`）；
/// Occ 表扫描原始列，按符号在 BWT 列中首次出现的顺序分组（`ard$cb`）。
/// [`FMIndex::extract`] 取的"第一个分组"指 Occ 表的顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FMIndex<T> {
    c: Vec<CEntry<T>>,
    occ: Vec<OccGroup<T>>,
}

impl<T: Ord + Clone> FMIndex<T> {
    /// 从 BWT 列构建 FM 索引：C 表取自排序后的列（满足 [`build_c`] 的前置条件），
    /// Occ 表取自原始列。空列得到两张空表。
    pub fn build(bwt: &[Symbol<T>]) -> Self {
        let mut sorted = bwt.to_vec();
        sorted.sort();
        Self { c: build_c(&sorted), occ: build_occ(bwt) }
    }

    /// C 表（按符号值升序）
    pub fn c_table(&self) -> &[CEntry<T>] {
        &self.c
    }

    /// Occ 表（按 BWT 列中首次出现的顺序分组）
    pub fn occ_table(&self) -> &[OccGroup<T>] {
        &self.occ
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.c.is_empty() || self.occ.is_empty()
    }

    /// 该符号在 C 表中的值：全文中严格小于它的符号个数。符号不存在时返回 None。
    pub fn count_smaller(&self, sym: &Symbol<T>) -> Option<usize> {
        self.c.iter().find(|e| &e.symbol == sym).map(|e| e.count)
    }

    /// 返回列的前 k 个元素中 `sym` 的出现次数（k 为前缀长度）。
    pub fn occ(&self, sym: &Symbol<T>, k: usize) -> usize {
        let Some(group) = self.occ.iter().find(|g| &g.symbol == sym) else {
            return 0;
        };
        // 记录按 pos 严格递增，pos <= k 的记录个数即为所求
        group.entries.partition_point(|e| e.pos <= k)
    }

    /// 从 Occ 表中取回符号序列。
    ///
    /// 只取 Occ 表的**第一个**分组（构建时遇到的第一个符号），按组内顺序投影出
    /// 每条记录的原始符号。这只恢复与该符号匹配的那些位置，并不是整个文本的逆变换；
    /// 任一表为空时返回空序列。
    pub fn extract(&self) -> Vec<Symbol<T>> {
        if self.is_empty() {
            return Vec::new();
        }
        self.occ[0].entries.iter().map(|e| e.symbol.clone()).collect()
    }
}

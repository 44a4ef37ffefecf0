use std::cmp::Ordering;

/// 比较 `text` 的两个循环旋转（分别从偏移 `i`、`j` 开始）。
///
/// 依次比较 `text[(i+t) % n]` 与 `text[(j+t) % n]`（t = 0, 1, ...），遇到第一处不同即返回。
/// 若 n 个位置全部相同（文本具有整除 n 的周期），则按偏移本身比较，
/// 较小的偏移排在前面，从而得到全序。
///
/// 单次比较最坏 O(n)。
pub fn compare_rotations<T: Ord>(text: &[T], i: usize, j: usize) -> Ordering {
    let n = text.len();
    debug_assert!(i < n && j < n, "rotation offset out of range");
    if i == j {
        return Ordering::Equal;
    }
    for t in 0..n {
        let a = &text[(i + t) % n];
        let b = &text[(j + t) % n];
        match a.cmp(b) {
            Ordering::Equal => {}
            ord => return ord,
        }
    }
    i.cmp(&j)
}

/// 朴素后缀数组：直接用 [`compare_rotations`] 排序，O(n² log n)。
/// 作为倍增法实现的参照。
pub fn naive_rotation_order<T: Ord>(text: &[T]) -> Vec<u32> {
    let mut offsets: Vec<usize> = (0..text.len()).collect();
    offsets.sort_by(|&i, &j| compare_rotations(text, i, j));
    offsets.into_iter().map(|x| x as u32).collect()
}

/// 构建循环旋转意义下的后缀数组（基于倍增法，O(n log² n)）。
///
/// 输入为任意全序符号序列，字母表不限于字节。返回 `0..n` 的一个排列，
/// 按 [`compare_rotations`](super::order::compare_rotations) 的顺序排列：
/// 旋转比较按 `% n` 循环取下标；周期文本中完全相同的旋转按偏移升序排列。
///
/// # Panics
///
/// 当 `text.len() > u32::MAX` 时 panic。
pub fn build_sa<T: Ord>(text: &[T]) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    assert!(u32::try_from(n).is_ok(), "text too long for u32 suffix array");

    // 初始秩：按符号值的稠密排名，字母表无需预先编码
    let mut sa: Vec<usize> = (0..n).collect();
    sa.sort_by(|&i, &j| text[i].cmp(&text[j]));
    let mut rank: Vec<usize> = vec![0; n];
    for w in 1..n {
        let bump = usize::from(text[sa[w]] != text[sa[w - 1]]);
        rank[sa[w]] = rank[sa[w - 1]] + bump;
    }
    let mut tmp: Vec<usize> = vec![0; n];

    // k 为当前秩所覆盖的循环前缀长度
    let mut k = 1usize;
    while k < n && rank[sa[n - 1]] != n - 1 {
        sa.sort_unstable_by_key(|&i| (rank[i], rank[(i + k) % n]));

        tmp[sa[0]] = 0;
        for w in 1..n {
            let a = sa[w - 1];
            let b = sa[w];
            let prev = (rank[a], rank[(a + k) % n]);
            let curr = (rank[b], rank[(b + k) % n]);
            tmp[b] = tmp[a] + usize::from(curr != prev);
        }

        // 复制回 rank
        rank.copy_from_slice(&tmp);
        k <<= 1;
    }

    // 覆盖长度 >= n 后秩相同即旋转相同，按偏移打破平局
    sa.sort_unstable_by_key(|&i| (rank[i], i));
    sa.into_iter().map(|x| x as u32).collect()
}

use super::sa::build_sa;
use super::symbol::{count_sentinels, Symbol};
use crate::error::{Error, Result};

/// 将文本提升为带哨兵的终止文本：`Value(s[0]) .. Value(s[n-1]) Sentinel`。
fn terminated<T>(text: &[T]) -> Vec<Symbol<&T>> {
    let mut t: Vec<Symbol<&T>> = Vec::with_capacity(text.len() + 1);
    t.extend(text.iter().map(Symbol::Value));
    t.push(Symbol::Sentinel);
    t
}

/// 计算 BWT 所用的后缀数组：对终止文本（长度 n+1）的全部旋转排序。
///
/// 哨兵唯一且最小，因此旋转之间不会相等，结果等价于
/// 原文本所有后缀（含空后缀，排在最前）的字典序。空文本返回空数组。
pub fn suffix_array_of<T: Ord>(text: &[T]) -> Vec<u32> {
    if text.is_empty() {
        return Vec::new();
    }
    build_sa(&terminated(text))
}

fn column_from_sa<T: Clone>(text: &[T], sa: &[u32]) -> Vec<Symbol<T>> {
    let mut bwt = Vec::with_capacity(sa.len());
    for &p in sa {
        let prev = match p as usize {
            0 => Symbol::Sentinel,
            i => Symbol::Value(text[i - 1].clone()),
        };
        bwt.push(prev);
    }
    bwt
}

/// 根据后缀数组构建 BWT 列。
///
/// 第 i 行输出旋转 `sa[i]` 之前的元素；从偏移 0 开始的那一行前面没有真实符号，输出哨兵。
/// `sa` 必须是 [`suffix_array_of`] 的结果（长度 `text.len() + 1`），否则返回
/// [`Error::SuffixArrayMismatch`]。
pub fn build_bwt<T: Clone>(text: &[T], sa: &[u32]) -> Result<Vec<Symbol<T>>> {
    let n = text.len();
    if n == 0 && sa.is_empty() {
        return Ok(Vec::new());
    }
    if sa.len() != n + 1 {
        return Err(Error::SuffixArrayMismatch { expected: n + 1, actual: sa.len() });
    }
    if let Some(&p) = sa.iter().find(|&&p| p as usize > n) {
        return Err(Error::SuffixArrayMismatch { expected: n + 1, actual: p as usize + 1 });
    }
    Ok(column_from_sa(text, sa))
}

/// 正向变换的便捷入口：先算后缀数组，再生成 BWT 列。
pub fn forward<T: Ord + Clone>(text: &[T]) -> Vec<Symbol<T>> {
    let sa = suffix_array_of(text);
    column_from_sa(text, &sa)
}

/// 逆变换：通过稳定排序得到 LF 映射并回溯，不在解码时构建后缀数组。
///
/// 1. 每个元素与其位置配对；
/// 2. 按符号稳定排序（哨兵最小，相同符号保持位置升序）；
/// 3. `next[r]` = 排序后第 r 个元素的原位置；
/// 4. 从哨兵所在行出发沿 `next` 前进，依次输出途经位置上的符号。
///
/// 哨兵个数不为 1 时返回 [`Error::MalformedIndex`]，不做部分恢复；
/// 若 LF 环在输出全部符号之前回到哨兵（列不是任何文本的 BWT），返回 [`Error::NotABwt`]。
pub fn inverse_bwt<T: Ord + Clone>(bwt: &[Symbol<T>]) -> Result<Vec<T>> {
    if bwt.is_empty() {
        return Ok(Vec::new());
    }
    let sentinels = count_sentinels(bwt);
    if sentinels != 1 {
        return Err(Error::MalformedIndex { sentinels });
    }

    let mut next: Vec<usize> = (0..bwt.len()).collect();
    next.sort_by(|&a, &b| bwt[a].cmp(&bwt[b]));

    let mut out = Vec::with_capacity(bwt.len() - 1);
    // next[0] 是哨兵在 BWT 中的位置，即从偏移 0 开始的那一行
    let mut row = next[0];
    for _ in 1..bwt.len() {
        row = next[row];
        match &bwt[row] {
            Symbol::Value(v) => out.push(v.clone()),
            Symbol::Sentinel => {
                return Err(Error::NotABwt { decoded: out.len(), expected: bwt.len() - 1 });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(col: &[Symbol<char>]) -> String {
        col.iter().map(ToString::to_string).collect()
    }

    fn make_text(len: usize, sigma: u32) -> Vec<u8> {
        let mut x: u32 = 42;
        (0..len)
            .map(|_| {
                x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                ((x >> 16) % sigma) as u8
            })
            .collect()
    }

    #[test]
    fn abracadabra_forward() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let sa = suffix_array_of(&text);
        assert_eq!(sa, vec![11, 10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
        let bwt = build_bwt(&text, &sa).unwrap();
        assert_eq!(render(&bwt), "ard$rcaaaabb");
        let values: String = bwt.iter().filter_map(Symbol::value).collect();
        assert_eq!(values, "ardrcaaaabb");
        assert_eq!(bwt, forward(&text));
    }

    #[test]
    fn abracadabra_round_trip() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let bwt = forward(&text);
        assert_eq!(inverse_bwt(&bwt).unwrap(), text);
    }

    #[test]
    fn sentinel_sits_at_offset_zero_rank() {
        let text = b"mississippi";
        let sa = suffix_array_of(text);
        let bwt = build_bwt(text, &sa).unwrap();
        assert_eq!(bwt.len(), text.len() + 1);
        assert_eq!(count_sentinels(&bwt), 1);
        let rank = sa.iter().position(|&p| p == 0).unwrap();
        assert!(bwt[rank].is_sentinel());
    }

    #[test]
    fn empty_input_maps_to_empty() {
        let empty: [u8; 0] = [];
        assert!(suffix_array_of(&empty).is_empty());
        assert!(build_bwt(&empty, &[]).unwrap().is_empty());
        assert!(forward(&empty).is_empty());
        assert!(inverse_bwt::<u8>(&[]).unwrap().is_empty());
    }

    #[test]
    fn single_symbol_and_repeats() {
        assert_eq!(forward(b"a"), vec![Symbol::Value(b'a'), Symbol::Sentinel]);
        assert_eq!(
            forward(b"aaa"),
            vec![Symbol::Value(b'a'), Symbol::Value(b'a'), Symbol::Value(b'a'), Symbol::Sentinel]
        );
        assert_eq!(inverse_bwt(&forward(b"aaa")).unwrap(), b"aaa".to_vec());
    }

    #[test]
    fn round_trip_random_texts() {
        for sigma in [1u32, 2, 4, 256] {
            for len in 1..=60 {
                let text = make_text(len, sigma);
                let bwt = forward(&text);
                assert_eq!(inverse_bwt(&bwt).unwrap(), text, "len={} sigma={}", len, sigma);
            }
        }
    }

    #[test]
    fn full_byte_alphabet_is_safe() {
        let text: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
        let bwt = forward(&text);
        assert_eq!(count_sentinels(&bwt), 1);
        assert_eq!(inverse_bwt(&bwt).unwrap(), text);
    }

    #[test]
    fn inverse_rejects_missing_or_extra_sentinel() {
        let none = [Symbol::Value('a'), Symbol::Value('b')];
        assert!(matches!(inverse_bwt(&none), Err(Error::MalformedIndex { sentinels: 0 })));

        let two = [Symbol::Sentinel, Symbol::Value('a'), Symbol::Sentinel];
        assert!(matches!(inverse_bwt(&two), Err(Error::MalformedIndex { sentinels: 2 })));
    }

    #[test]
    fn inverse_rejects_column_with_short_lf_cycle() {
        let col = [Symbol::Value('a'), Symbol::Sentinel, Symbol::Value('a')];
        let err = inverse_bwt(&col).unwrap_err();
        assert!(matches!(err, Error::NotABwt { decoded: 1, expected: 2 }));
    }

    #[test]
    fn build_bwt_rejects_wrong_suffix_array() {
        let text = b"banana";
        let err = build_bwt(text, &[0, 1, 2]).unwrap_err();
        assert!(matches!(err, Error::SuffixArrayMismatch { expected: 7, actual: 3 }));

        // 用原文本（不带哨兵）的后缀数组调用也会被拒绝
        let plain = build_sa(text);
        assert!(build_bwt(text, &plain).is_err());

        let out_of_range = [0u32, 1, 2, 3, 4, 5, 9];
        assert!(matches!(
            build_bwt(text, &out_of_range),
            Err(Error::SuffixArrayMismatch { .. })
        ));
    }
}

//! 演示完整流水线：后缀数组 -> BWT -> 逆变换 -> FM 索引。
//!
//! 运行方式：
//! ```bash
//! cargo run --example pipeline
//! ```

use bwt_fm::index::{bwt, fm};
use bwt_fm::util::text;
use bwt_fm::Symbol;

fn main() -> anyhow::Result<()> {
    // 1. 输入
    let input = "abracadabra";
    let chars: Vec<char> = input.chars().collect();
    println!("输入: {} ({} 个符号)", input, chars.len());

    // 2. 后缀数组与 BWT
    let sa_arr = bwt::suffix_array_of(&chars);
    let column = bwt::build_bwt(&chars, &sa_arr)?;
    println!("后缀数组: {:?}", sa_arr);
    println!("BWT: {}", text::render_column(&column, '$'));

    // 3. 逆变换
    let restored: String = bwt::inverse_bwt(&column)?.into_iter().collect();
    println!("逆变换: {}", restored);

    // 4. FM 索引
    let fm_idx = fm::FMIndex::build(&column);
    println!("\nC 表:");
    for e in fm_idx.c_table() {
        println!("  {}\t{}", e.symbol, e.count);
    }
    println!("Occ('a', 8) = {}", fm_idx.occ(&Symbol::Value('a'), 8));

    let first: String = fm_idx.extract().iter().map(ToString::to_string).collect();
    println!("首个 Occ 分组投影: {}", first);
    Ok(())
}

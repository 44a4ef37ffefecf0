//! # bwt-fm
//!
//! Burrows-Wheeler 变换（BWT）、逆变换以及 FM 索引辅助表的 Rust 实现。
//!
//! 本 crate 对任意全序字母表工作（字节、字符、整数……），包括：
//!
//! - **后缀数组**：循环旋转意义下的后缀数组（倍增法）
//! - **BWT**：基于后缀数组的正向变换；哨兵以 [`Symbol::Sentinel`] 结构化表示，不占用字母表中的值
//! - **逆 BWT**：基于稳定排序的 LF 映射回溯
//! - **FM 索引**：C 表与 Occ 表的构建，以及从 Occ 表取回符号序列
//!
//! ## 快速示例
//!
//! ```rust
//! use bwt_fm::index::{bwt, fm};
//! use bwt_fm::Symbol;
//!
//! let text: Vec<char> = "abracadabra".chars().collect();
//!
//! // 正向变换：后缀数组 -> BWT 列
//! let sa_arr = bwt::suffix_array_of(&text);
//! let bwt_arr = bwt::build_bwt(&text, &sa_arr).unwrap();
//! let shown: String = bwt_arr.iter().map(|s| s.to_string()).collect();
//! assert_eq!(shown, "ard$rcaaaabb");
//!
//! // 逆变换
//! assert_eq!(bwt::inverse_bwt(&bwt_arr).unwrap(), text);
//!
//! // FM 索引
//! let fm_idx = fm::FMIndex::build(&bwt_arr);
//! assert_eq!(fm_idx.count_smaller(&Symbol::Value('b')), Some(6));
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 旋转序、后缀数组、BWT 正/逆变换、FM 索引
//! - [`util`] — 字节串 / 文本适配、BWT 矩阵展示
//! - [`error`] — 错误类型

pub mod error;
pub mod index;
pub mod util;

pub use error::{Error, Result};
pub use index::fm::FMIndex;
pub use index::symbol::Symbol;

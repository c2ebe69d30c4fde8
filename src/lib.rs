//! # bincmp
//!
//! 二进制文件逐字节比较工具库
//!
//! ## 功能
//!
//! - 按固定块大小比较两个等长字节源，记录每个不同块的偏移和内容
//! - 比较两个目录第一层中所有同名文件，单个文件出错不会中断整批比较
//! - 输出文本报告，或导出为 TOML
//!
//! ## 使用示例
//!
//! ```no_run
//! use bincmp::compare::{CompareOptions, compare_directories};
//! use bincmp::report::write_text_report;
//! use std::num::NonZeroUsize;
//! use std::path::Path;
//!
//! let options = CompareOptions::new(NonZeroUsize::new(1).unwrap());
//! let report = compare_directories(Path::new("old"), Path::new("new"), options).unwrap();
//! write_text_report(&report, &mut std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod compare;
pub mod report;
pub mod utils;

// 重新导出常用类型
pub use compare::{ChunkPair, Comparison, DifferenceMap, FileOutcome};
pub use compare::{compare_directories, compare_files, compare_sources};

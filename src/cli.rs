use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// 按字节比较两个目录中的同名文件
#[derive(Parser, Debug)]
#[command(name = "bincmp")]
#[command(version, about = "按字节比较两个目录中的同名文件", long_about = None)]
pub struct Cli {
    /// 第一个目录
    #[arg(value_name = "DIR1")]
    pub left_dir: PathBuf,
    /// 第二个目录
    #[arg(value_name = "DIR2")]
    pub right_dir: PathBuf,
    /// 每次比较的字节数
    #[arg(short, long, default_value = "1")]
    pub chunk_size: NonZeroUsize,
    /// 同时输出两侧文件的 SHA256
    #[arg(long)]
    pub checksums: bool,
    /// 将报告另存为 TOML 文件
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,
    /// 提高日志级别 (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

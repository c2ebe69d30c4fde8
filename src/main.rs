use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::{self, Write};

use bincmp::cli::Cli;
use bincmp::compare::{CompareOptions, compare_directories};
use bincmp::report::{write_text_report, write_toml_report};

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // 用法错误输出到标准输出，以非零状态退出
        Err(err) if err.use_stderr() => {
            print!("{}", err.render());
            std::process::exit(2);
        }
        Err(err) => err.exit(),
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if !cli.left_dir.is_dir() {
        return Err(anyhow!("目录不存在: {:?}", cli.left_dir));
    }
    if !cli.right_dir.is_dir() {
        return Err(anyhow!("目录不存在: {:?}", cli.right_dir));
    }

    let options = CompareOptions::new(cli.chunk_size).with_checksums(cli.checksums);
    let report = compare_directories(&cli.left_dir, &cli.right_dir, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_text_report(&report, &mut out).with_context(|| "无法输出报告")?;
    out.flush()?;

    if let Some(path) = &cli.report {
        write_toml_report(&report, path)?;
    }

    Ok(())
}

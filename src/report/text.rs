use std::io::{self, Write};

use crate::compare::{DirectoryReport, FileOutcome, FileReport};

/// 将块内容格式化为十六进制
pub fn format_chunk(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// 输出文本报告
pub fn write_text_report<W: Write>(report: &DirectoryReport, out: &mut W) -> io::Result<()> {
    for file in &report.files {
        write_file(file, out)?;
    }
    writeln!(out, "{}", report.summary())?;
    Ok(())
}

fn write_file<W: Write>(file: &FileReport, out: &mut W) -> io::Result<()> {
    let name = file.display_name();

    match &file.outcome {
        FileOutcome::SizeMismatch { left, right } => {
            writeln!(out, "Comparing {}...", name)?;
            writeln!(
                out,
                "Files {} and {} are of different sizes ({} vs {} bytes).",
                file.left_path.display(),
                file.right_path.display(),
                left,
                right
            )?;
        }
        FileOutcome::NotAFile { path } => {
            writeln!(
                out,
                "{} is not a regular file, skipping {}.",
                path.display(),
                name
            )?;
        }
        FileOutcome::Io { detail } => {
            writeln!(out, "Failed to compare {}: {}", name, detail)?;
        }
        FileOutcome::Identical => {
            writeln!(out, "Comparing {}...", name)?;
            write_checksums(file, out)?;
            writeln!(out, "{} is identical in both folders.", name)?;
        }
        FileOutcome::Differences(differences) => {
            writeln!(out, "Comparing {}...", name)?;
            write_checksums(file, out)?;
            writeln!(out, "Differences found in {}:", name)?;
            for (offset, pair) in differences {
                writeln!(
                    out,
                    "  Byte {}: {} vs {}",
                    offset,
                    format_chunk(&pair.left),
                    format_chunk(&pair.right)
                )?;
            }
        }
    }

    Ok(())
}

fn write_checksums<W: Write>(file: &FileReport, out: &mut W) -> io::Result<()> {
    if let Some(checksums) = &file.checksums {
        writeln!(out, "  sha256 {} vs {}", checksums.left, checksums.right)?;
    }
    Ok(())
}

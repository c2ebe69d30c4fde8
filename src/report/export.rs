use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::compare::{DirectoryReport, FileOutcome, FileReport};
use crate::utils::HashResult;

/// 可导出的比较报告
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportDocument {
    pub generated_at: String,
    pub left_dir: String,
    pub right_dir: String,
    pub chunk_size: u64,
    pub only_in_left: Vec<String>,
    pub only_in_right: Vec<String>,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub status: String,
    pub left_size: Option<u64>,
    pub right_size: Option<u64>,
    pub detail: Option<String>,
    pub left_sha256: Option<HashResult>,
    pub right_sha256: Option<HashResult>,
    #[serde(default)]
    pub differences: Vec<DifferenceEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DifferenceEntry {
    pub offset: u64,
    pub left: String,
    pub right: String,
}

impl ReportDocument {
    pub fn from_report(report: &DirectoryReport) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            left_dir: report.left_dir.to_string_lossy().to_string(),
            right_dir: report.right_dir.to_string_lossy().to_string(),
            chunk_size: report.chunk_size.get() as u64,
            only_in_left: lossy_names(&report.only_in_left),
            only_in_right: lossy_names(&report.only_in_right),
            files: report.files.iter().map(FileEntry::from_file).collect(),
        }
    }
}

impl FileEntry {
    fn from_file(file: &FileReport) -> Self {
        let mut entry = Self {
            name: file.display_name(),
            status: file.outcome.status().to_string(),
            left_size: None,
            right_size: None,
            detail: None,
            left_sha256: file.checksums.as_ref().map(|c| c.left.clone()),
            right_sha256: file.checksums.as_ref().map(|c| c.right.clone()),
            differences: Vec::new(),
        };

        match &file.outcome {
            FileOutcome::Identical => {}
            FileOutcome::Differences(differences) => {
                entry.differences = differences
                    .iter()
                    .map(|(offset, pair)| DifferenceEntry {
                        offset: *offset,
                        left: hex::encode(&pair.left),
                        right: hex::encode(&pair.right),
                    })
                    .collect();
            }
            FileOutcome::SizeMismatch { left, right } => {
                entry.left_size = Some(*left);
                entry.right_size = Some(*right);
            }
            FileOutcome::NotAFile { path } => {
                entry.detail = Some(format!("{} is not a regular file", path.display()));
            }
            FileOutcome::Io { detail } => {
                entry.detail = Some(detail.clone());
            }
        }

        entry
    }
}

fn lossy_names(names: &[std::ffi::OsString]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.to_string_lossy().to_string())
        .collect()
}

/// 将报告写入 TOML 文件
pub fn write_toml_report(report: &DirectoryReport, output: &Path) -> Result<()> {
    let document = ReportDocument::from_report(report);
    let content = toml::to_string_pretty(&document).with_context(|| "无法序列化比较报告")?;
    fs::write(output, content).with_context(|| format!("无法写入报告: {:?}", output))?;
    log::info!("report written to {:?}", output);
    Ok(())
}

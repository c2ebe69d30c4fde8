use anyhow::Result;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use super::chunk::{Comparison, DifferenceMap, compare_files, compare_files_with_checksums};
use crate::utils::{FileChecksums, FileNameSet, is_regular_file, list_entry_names};

/// 目录比较选项
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    pub chunk_size: NonZeroUsize,
    /// 是否同时计算两侧文件的 SHA256
    pub checksums: bool,
}

impl CompareOptions {
    pub fn new(chunk_size: NonZeroUsize) -> Self {
        Self {
            chunk_size,
            checksums: false,
        }
    }

    pub fn with_checksums(mut self, checksums: bool) -> Self {
        self.checksums = checksums;
        self
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::new(super::chunk::DEFAULT_CHUNK_SIZE)
    }
}

/// 单个同名文件的比较结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Identical,
    Differences(DifferenceMap),
    SizeMismatch { left: u64, right: u64 },
    /// 某一侧不是普通文件
    NotAFile { path: PathBuf },
    Io { detail: String },
}

impl FileOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            FileOutcome::Identical => "identical",
            FileOutcome::Differences(_) => "different",
            FileOutcome::SizeMismatch { .. } => "size_mismatch",
            FileOutcome::NotAFile { .. } => "not_a_file",
            FileOutcome::Io { .. } => "error",
        }
    }
}

impl From<Comparison> for FileOutcome {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::SizeMismatch { left, right } => FileOutcome::SizeMismatch { left, right },
            Comparison::Compared(map) if map.is_empty() => FileOutcome::Identical,
            Comparison::Compared(map) => FileOutcome::Differences(map),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: OsString,
    pub left_path: PathBuf,
    pub right_path: PathBuf,
    pub outcome: FileOutcome,
    pub checksums: Option<FileChecksums>,
}

impl FileReport {
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().to_string()
    }

    pub fn is_identical(&self) -> bool {
        self.outcome == FileOutcome::Identical
    }
}

/// 整个目录比较的结果，文件按名称排序
#[derive(Debug, Clone)]
pub struct DirectoryReport {
    pub left_dir: PathBuf,
    pub right_dir: PathBuf,
    pub chunk_size: NonZeroUsize,
    pub files: Vec<FileReport>,
    pub only_in_left: Vec<OsString>,
    pub only_in_right: Vec<OsString>,
}

/// 各类结果的计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub identical: usize,
    pub different: usize,
    pub size_mismatch: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl DirectoryReport {
    pub fn file(&self, name: &str) -> Option<&FileReport> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for file in &self.files {
            match file.outcome {
                FileOutcome::Identical => summary.identical += 1,
                FileOutcome::Differences(_) => summary.different += 1,
                FileOutcome::SizeMismatch { .. } => summary.size_mismatch += 1,
                FileOutcome::NotAFile { .. } => summary.skipped += 1,
                FileOutcome::Io { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "identical: {}, different: {}, size mismatch: {}, skipped: {}, failed: {}",
            self.identical, self.different, self.size_mismatch, self.skipped, self.failed
        )
    }
}

/// 比较两个目录中所有同名文件
///
/// 只有列目录失败会返回错误，单个文件的问题记录在对应的 [`FileOutcome`] 中。
pub fn compare_directories(
    left_dir: &Path,
    right_dir: &Path,
    options: CompareOptions,
) -> Result<DirectoryReport> {
    let left_names = list_entry_names(left_dir)?;
    let right_names = list_entry_names(right_dir)?;

    let only_in_left = one_sided(&left_names, &right_names, left_dir);
    let only_in_right = one_sided(&right_names, &left_names, right_dir);

    let files = left_names
        .intersection(&right_names)
        .map(|name| compare_entry(left_dir, right_dir, name, options, compare_pair))
        .collect();

    Ok(DirectoryReport {
        left_dir: left_dir.to_path_buf(),
        right_dir: right_dir.to_path_buf(),
        chunk_size: options.chunk_size,
        files,
        only_in_left,
        only_in_right,
    })
}

fn one_sided(names: &FileNameSet, other: &FileNameSet, dir: &Path) -> Vec<OsString> {
    names
        .difference(other)
        .inspect(|name| log::info!("{:?} only exists in {:?}, ignored", name, dir))
        .cloned()
        .collect()
}

type PairResult = Result<(FileOutcome, Option<FileChecksums>)>;

fn compare_entry<F>(
    left_dir: &Path,
    right_dir: &Path,
    name: &OsString,
    options: CompareOptions,
    compare: F,
) -> FileReport
where
    F: Fn(&Path, &Path, CompareOptions) -> PairResult,
{
    let left_path = left_dir.join(name);
    let right_path = right_dir.join(name);

    let (outcome, checksums) = if !is_regular_file(&left_path) {
        log::info!("{:?} is not a regular file, skipped", left_path);
        (
            FileOutcome::NotAFile {
                path: left_path.clone(),
            },
            None,
        )
    } else if !is_regular_file(&right_path) {
        log::info!("{:?} is not a regular file, skipped", right_path);
        (
            FileOutcome::NotAFile {
                path: right_path.clone(),
            },
            None,
        )
    } else {
        match compare(&left_path, &right_path, options) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("failed to compare {:?}: {:#}", name, err);
                (
                    FileOutcome::Io {
                        detail: format!("{:#}", err),
                    },
                    None,
                )
            }
        }
    };

    FileReport {
        name: name.clone(),
        left_path,
        right_path,
        outcome,
        checksums,
    }
}

fn compare_pair(left: &Path, right: &Path, options: CompareOptions) -> PairResult {
    if options.checksums {
        let (comparison, checksums) =
            compare_files_with_checksums(left, right, options.chunk_size)?;
        Ok((FileOutcome::from(comparison), checksums))
    } else {
        let comparison = compare_files(left, right, options.chunk_size)?;
        Ok((FileOutcome::from(comparison), None))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::anyhow;
    use std::fs;
    use tempfile::TempDir;

    fn failing_for_broken(left: &Path, right: &Path, options: CompareOptions) -> PairResult {
        if left.ends_with("broken.bin") {
            return Err(anyhow!("无法读取文件: {:?}", left));
        }
        compare_pair(left, right, options)
    }

    #[test]
    fn read_failure_becomes_io_outcome_and_batch_continues() -> Result<()> {
        let left = TempDir::new()?;
        let right = TempDir::new()?;
        for name in ["broken.bin", "ok.bin"] {
            fs::write(left.path().join(name), b"data")?;
            fs::write(right.path().join(name), b"data")?;
        }

        let options = CompareOptions::default();
        let names = list_entry_names(left.path())?;
        let files: Vec<FileReport> = names
            .iter()
            .map(|name| {
                compare_entry(left.path(), right.path(), name, options, failing_for_broken)
            })
            .collect();

        assert_eq!(files.len(), 2);
        match &files[0].outcome {
            FileOutcome::Io { detail } => assert!(detail.contains("broken.bin")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(files[0].checksums.is_none());
        assert!(files[1].is_identical());
        Ok(())
    }

    #[test]
    fn file_removed_after_listing_is_not_compared() -> Result<()> {
        let left = TempDir::new()?;
        let right = TempDir::new()?;
        fs::write(left.path().join("gone.bin"), b"data")?;
        fs::write(right.path().join("gone.bin"), b"data")?;

        let names = list_entry_names(left.path())?;
        fs::remove_file(right.path().join("gone.bin"))?;

        let name = names.iter().next().unwrap();
        let report = compare_entry(
            left.path(),
            right.path(),
            name,
            CompareOptions::default(),
            compare_pair,
        );

        assert_eq!(
            report.outcome,
            FileOutcome::NotAFile {
                path: right.path().join("gone.bin"),
            }
        );
        Ok(())
    }

    #[test]
    fn compare_pair_fails_for_missing_files() -> Result<()> {
        let dir = TempDir::new()?;
        let result = compare_pair(
            &dir.path().join("a"),
            &dir.path().join("b"),
            CompareOptions::default(),
        );
        assert!(result.is_err());
        Ok(())
    }
}

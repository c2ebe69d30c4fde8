use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;
use walkdir::WalkDir;

/// 目录项名称集合，有序以保证输出稳定
pub type FileNameSet = BTreeSet<OsString>;

/// 列出目录第一层的所有条目名称（不递归）
pub fn list_entry_names(dir: &Path) -> Result<FileNameSet> {
    let mut names = FileNameSet::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("无法读取目录: {:?}", dir))?;
        names.insert(entry.file_name().to_os_string());
    }

    Ok(names)
}

/// 判断路径是否为普通文件（跟随符号链接）
pub fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

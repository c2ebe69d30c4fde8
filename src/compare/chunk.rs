use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::num::NonZeroUsize;
use std::path::Path;

use crate::utils::{FileChecksums, PairDigest};

/// 库默认的块大小（字节）
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

/// 同一偏移处两侧的块内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPair {
    pub left: Vec<u8>,
    pub right: Vec<u8>,
}

/// 块起始偏移 -> 不同的块内容，按偏移升序
pub type DifferenceMap = BTreeMap<u64, ChunkPair>;

/// 一次比较的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// 长度不同，未进行比较
    SizeMismatch { left: u64, right: u64 },
    /// 已比较，空表示完全相同
    Compared(DifferenceMap),
}

impl Comparison {
    pub fn differences(&self) -> Option<&DifferenceMap> {
        match self {
            Comparison::Compared(map) => Some(map),
            Comparison::SizeMismatch { .. } => None,
        }
    }

    pub fn is_identical(&self) -> bool {
        matches!(self, Comparison::Compared(map) if map.is_empty())
    }
}

/// 按块比较两个等长字节源
pub fn compare_sources<L, R>(
    left: L,
    left_len: u64,
    right: R,
    right_len: u64,
    chunk_size: NonZeroUsize,
) -> io::Result<Comparison>
where
    L: Read,
    R: Read,
{
    if left_len != right_len {
        log::info!("size mismatch: {} vs {} bytes", left_len, right_len);
        return Ok(Comparison::SizeMismatch {
            left: left_len,
            right: right_len,
        });
    }

    compare_chunks(left, right, left_len, chunk_size, None)
}

/// 按块比较两个文件，长度不同时不读取内容
pub fn compare_files(left: &Path, right: &Path, chunk_size: NonZeroUsize) -> Result<Comparison> {
    compare_paths(left, right, chunk_size, None)
}

/// 与 [`compare_files`] 相同，并在同一遍读取中计算两侧的 SHA256
///
/// 长度不同时不读取内容，也不返回校验和。
pub fn compare_files_with_checksums(
    left: &Path,
    right: &Path,
    chunk_size: NonZeroUsize,
) -> Result<(Comparison, Option<FileChecksums>)> {
    let mut digest = PairDigest::new();
    let comparison = compare_paths(left, right, chunk_size, Some(&mut digest))?;

    let checksums = match comparison {
        Comparison::SizeMismatch { .. } => None,
        Comparison::Compared(_) => Some(digest.finish()),
    };
    Ok((comparison, checksums))
}

fn compare_paths(
    left: &Path,
    right: &Path,
    chunk_size: NonZeroUsize,
    digest: Option<&mut PairDigest>,
) -> Result<Comparison> {
    let left_len = left
        .metadata()
        .with_context(|| format!("无法读取文件信息: {:?}", left))?
        .len();
    let right_len = right
        .metadata()
        .with_context(|| format!("无法读取文件信息: {:?}", right))?
        .len();

    if left_len != right_len {
        log::info!(
            "{:?} and {:?} differ in size ({} vs {})",
            left,
            right,
            left_len,
            right_len
        );
        return Ok(Comparison::SizeMismatch {
            left: left_len,
            right: right_len,
        });
    }

    let left_file = File::open(left).with_context(|| format!("无法打开文件: {:?}", left))?;
    let right_file = File::open(right).with_context(|| format!("无法打开文件: {:?}", right))?;

    compare_chunks(
        BufReader::new(left_file),
        BufReader::new(right_file),
        left_len,
        chunk_size,
        digest,
    )
    .with_context(|| format!("读取失败: {:?} / {:?}", left, right))
}

fn compare_chunks<L, R>(
    mut left: L,
    mut right: R,
    len: u64,
    chunk_size: NonZeroUsize,
    mut digest: Option<&mut PairDigest>,
) -> io::Result<Comparison>
where
    L: Read,
    R: Read,
{
    let step = chunk_size.get();
    let mut differences = DifferenceMap::new();
    let mut offset: u64 = 0;

    loop {
        let remaining = len.saturating_sub(offset);
        let chunk_left = read_chunk(&mut left, step, remaining)?;
        let chunk_right = read_chunk(&mut right, step, remaining)?;

        if chunk_left.is_empty() && chunk_right.is_empty() {
            break;
        }

        if let Some(digest) = digest.as_deref_mut() {
            digest.update(&chunk_left, &chunk_right);
        }

        if chunk_left != chunk_right {
            log::trace!("chunk at {} differs", offset);
            differences.insert(
                offset,
                ChunkPair {
                    left: chunk_left,
                    right: chunk_right,
                },
            );
        }

        offset = offset.saturating_add(step as u64);
    }

    log::debug!("compared {} bytes, {} differing chunks", len, differences.len());
    Ok(Comparison::Compared(differences))
}

// 读满一个块，除非到达末尾；预分配不超过剩余长度
fn read_chunk<R: Read>(reader: &mut R, size: usize, remaining: u64) -> io::Result<Vec<u8>> {
    let capacity = remaining.min(size as u64) as usize;
    let mut buffer = Vec::with_capacity(capacity);
    reader.by_ref().take(size as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

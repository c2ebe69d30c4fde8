mod chunk;
mod directory;

pub use chunk::{
    ChunkPair, Comparison, DEFAULT_CHUNK_SIZE, DifferenceMap, compare_files,
    compare_files_with_checksums, compare_sources,
};
pub use directory::{
    CompareOptions, DirectoryReport, FileOutcome, FileReport, Summary, compare_directories,
};

pub use crate::utils::FileChecksums;

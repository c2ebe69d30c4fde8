mod fs;
mod hash;

pub use fs::{FileNameSet, is_regular_file, list_entry_names};
pub use hash::{FileChecksums, HashResult, PairDigest};

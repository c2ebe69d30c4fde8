use sha2::{Digest, Sha256};

pub type HashResult = String;

/// 两侧文件的 SHA256
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChecksums {
    pub left: HashResult,
    pub right: HashResult,
}

/// 随逐块比较同步更新的两侧摘要，只需读取一遍文件
#[derive(Default, Clone)]
pub struct PairDigest {
    left: Sha256,
    right: Sha256,
}

impl PairDigest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, left: &[u8], right: &[u8]) {
        self.left.update(left);
        self.right.update(right);
    }

    pub fn finish(self) -> FileChecksums {
        FileChecksums {
            left: hex::encode(self.left.finalize()),
            right: hex::encode(self.right.finalize()),
        }
    }
}

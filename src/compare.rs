//! # 比较模块
//!
//! 逐字节比较两个文件的内容，用于核对编码结果与参考图像是否一致。

/// 两段字节序列的差异。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteDiff {
    /// 两者共同长度范围内取值不同的偏移量。
    pub offsets: Vec<usize>,
    pub left_len: usize,
    pub right_len: usize,
}

impl ByteDiff {
    pub fn is_identical(&self) -> bool {
        self.offsets.is_empty() && self.left_len == self.right_len
    }
}

pub fn diff_bytes(left: &[u8], right: &[u8]) -> ByteDiff {
    let offsets = left
        .iter()
        .zip(right)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect();

    ByteDiff {
        offsets,
        left_len: left.len(),
        right_len: right.len(),
    }
}

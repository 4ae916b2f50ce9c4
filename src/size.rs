use crate::constants::{BITS_PER_PIXEL, ROW_ALIGNMENT};

/// 返回不小于 `n` 的最小的 4 的倍数。
///
/// 已经对齐的值原样返回，因此 `align_to_4(align_to_4(n)) == align_to_4(n)`。
pub fn align_to_4(n: usize) -> usize {
    n + (ROW_ALIGNMENT - n % ROW_ALIGNMENT) % ROW_ALIGNMENT
}

/// 宽度为 `width` 个像素的 24 位像素行所占的字节数，已按 4 字节对齐。
///
/// 即 `ceil(24 * width / 32) * 4`。
pub fn row_size_for(width: usize) -> usize {
    let bits = BITS_PER_PIXEL as usize * width;
    bits.div_ceil(32) * ROW_ALIGNMENT
}

//! # 填充模块
//!
//! 计算像素数组在负载之后还缺多少字节，并按选定的策略生成这些字节。
//! 填充内容不会被解释，策略只影响图像的视觉和统计特征。

use crate::error::{EncodeError, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// 填充字节的生成策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// 全部为 0。
    #[default]
    Zero,
    /// 按负载中各字节值出现的频率分配填充字节。
    FrequencyWeighted,
    /// 非加密安全的随机字节。给定种子时结果可复现。
    Random { seed: Option<u64> },
}

/// 计算填充长度：`pixel_array_size - payload_len`。
///
/// # Errors
///
/// 负载比像素数组还大时返回 `EncodeError::NegativePadding`。
pub fn padding_length(pixel_array_size: usize, payload_len: usize) -> Result<usize> {
    pixel_array_size
        .checked_sub(payload_len)
        .ok_or(EncodeError::NegativePadding {
            pixel_array_size,
            payload_len,
        })
}

/// 生成 `length` 个填充字节。
///
/// `payload` 仅供 [`PaddingPolicy::FrequencyWeighted`] 统计字节频率。
pub fn fill_padding(length: usize, policy: PaddingPolicy, payload: &[u8]) -> Vec<u8> {
    match policy {
        PaddingPolicy::Zero => vec![0u8; length],
        PaddingPolicy::FrequencyWeighted => frequency_weighted(length, payload),
        PaddingPolicy::Random { seed } => {
            let mut padding = vec![0u8; length];
            match seed {
                Some(seed) => StdRng::seed_from_u64(seed).fill_bytes(&mut padding),
                None => rand::rng().fill_bytes(&mut padding),
            }
            padding
        }
    }
}

fn frequency_weighted(length: usize, payload: &[u8]) -> Vec<u8> {
    if payload.is_empty() {
        return vec![0u8; length];
    }

    let mut histogram = [0usize; 256];
    payload
        .iter()
        .for_each(|&byte| histogram[byte as usize] += 1);

    let mut padding = Vec::with_capacity(length);
    for (byte, &count) in histogram.iter().enumerate() {
        let share = (count as u128 * length as u128 / payload.len() as u128) as usize;
        padding.extend(std::iter::repeat_n(byte as u8, share));
    }

    // max_by_key 在并列时取最后一个，反向遍历以便并列时取较小的字节值
    let most_frequent = histogram
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|&(_, &count)| count)
        .map_or(0, |(byte, _)| byte as u8);
    padding.resize(length, most_frequent);

    padding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_length_is_difference() {
        assert_eq!(padding_length(48, 12).unwrap(), 36);
        assert_eq!(padding_length(12, 12).unwrap(), 0);
        assert_eq!(
            padding_length(8, 12),
            Err(EncodeError::NegativePadding {
                pixel_array_size: 8,
                payload_len: 12
            })
        );
    }

    #[test]
    fn zero_policy() {
        assert_eq!(fill_padding(5, PaddingPolicy::Zero, b"abc"), vec![0; 5]);
    }

    #[test]
    fn frequency_weighted_follows_histogram() {
        // 'a' 占 3/4，'b' 占 1/4
        let padding = fill_padding(8, PaddingPolicy::FrequencyWeighted, b"aaab");
        assert_eq!(padding, b"aaaaaabb".to_vec());
    }

    #[test]
    fn frequency_weighted_remainder_goes_to_most_frequent() {
        // 各占 1/3，每个值分到 floor(4/3) = 1 个，剩余 1 个给并列中较小的 'x'
        let padding = fill_padding(4, PaddingPolicy::FrequencyWeighted, b"zyx");
        assert_eq!(padding.len(), 4);
        assert_eq!(padding, b"xyzx".to_vec());

        let padding = fill_padding(3, PaddingPolicy::FrequencyWeighted, b"qqqqqqqqqr");
        assert_eq!(padding, b"qqq".to_vec());
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let policy = PaddingPolicy::Random { seed: Some(7) };
        let first = fill_padding(64, policy, b"");
        let second = fill_padding(64, policy, b"");
        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_padding() {
        for policy in [
            PaddingPolicy::Zero,
            PaddingPolicy::FrequencyWeighted,
            PaddingPolicy::Random { seed: None },
        ] {
            assert!(fill_padding(0, policy, b"payload").is_empty());
        }
    }
}

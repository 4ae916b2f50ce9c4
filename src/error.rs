//! # 错误类型模块
//!
//! 编码核心只返回 `EncodeError`，文件 I/O 相关的错误由 `handler` 模块通过 `anyhow` 处理。

use thiserror::Error;

/// 编码过程中可能出现的错误。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// 无法构成图像：空负载，或者宽高比不是正数。
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// 某个头部字段超出了 32 位无符号整数的范围。
    #[error("Header field `{field}` does not fit in 32 bits (value: {value})")]
    SizeOverflow { field: &'static str, value: u128 },

    /// 像素数组比负载还小。只会在几何计算有缺陷时出现。
    #[error(
        "Pixel array of {pixel_array_size} bytes cannot hold a payload of {payload_len} bytes"
    )]
    NegativePadding {
        pixel_array_size: usize,
        payload_len: usize,
    },
}

pub type Result<T> = std::result::Result<T, EncodeError>;

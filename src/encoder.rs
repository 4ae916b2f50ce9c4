//! # 编码模块
//!
//! 把负载编码为完整的 BMP 字节流：头部 ++ 负载 ++ 填充。
//! 编码是纯函数，不做任何 I/O，要么返回完整的图像，要么返回错误。

use crate::constants::BMP_HEADER_SIZE;
use crate::error::Result;
use crate::geometry::{Geometry, SidesRatio, line_geometry, rectangle_geometry};
use crate::header::BmpHeader;
use crate::padding::{PaddingPolicy, fill_padding, padding_length};

/// 编码参数。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EncodeOptions {
    /// 给出时生成矩形图像，否则生成线形图像。
    pub ratio: Option<SidesRatio>,
    pub padding: PaddingPolicy,
}

/// 编码结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    geometry: Geometry,
    padding_len: usize,
}

impl EncodedImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// 像素数组大小，即文件总长度减去 54 字节的头部。
    pub fn pixel_array_size(&self) -> usize {
        self.bytes.len() - BMP_HEADER_SIZE
    }

    pub fn padding_len(&self) -> usize {
        self.padding_len
    }
}

/// 根据负载和编码参数推导几何信息。
pub fn derive_geometry(payload_len: usize, options: &EncodeOptions) -> Result<Geometry> {
    match options.ratio {
        Some(ratio) => rectangle_geometry(payload_len, ratio),
        None => line_geometry(payload_len),
    }
}

/// 把负载编码为 BMP 图像。
///
/// # Errors
///
/// * `EncodeError::InvalidGeometry`：负载为空。
/// * `EncodeError::SizeOverflow`：某个头部字段超出 32 位。
/// * `EncodeError::NegativePadding`：像素数组小于负载 (几何计算缺陷)。
pub fn encode(payload: &[u8], options: &EncodeOptions) -> Result<EncodedImage> {
    let geometry = derive_geometry(payload.len(), options)?;
    let pixel_array_size = geometry.pixel_array_size()?;
    let padding_len = padding_length(pixel_array_size, payload.len())?;
    let header = BmpHeader::new(&geometry)?;

    let mut bytes = Vec::with_capacity(BMP_HEADER_SIZE + pixel_array_size);
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(payload);
    bytes.extend(fill_padding(padding_len, options.padding, payload));

    Ok(EncodedImage {
        bytes,
        geometry,
        padding_len,
    })
}

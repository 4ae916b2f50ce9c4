//! # 头部构造模块
//!
//! 组装 14 字节的文件头和 40 字节的 DIB 头，所有多字节字段均为小端序。

use crate::constants::{
    BITS_PER_PIXEL, BMP_HEADER_SIZE, BMP_MAGIC, COLOR_PLANES, DIB_HEADER_SIZE, FILE_HEADER_SIZE,
};
use crate::error::{EncodeError, Result};
use crate::geometry::Geometry;

fn to_u32(field: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| EncodeError::SizeOverflow {
        field,
        value: value as u128,
    })
}

/// 构造文件头 (BITMAPFILEHEADER)。
///
/// # Errors
///
/// `total_file_size` 超出 `u32` 时返回 `EncodeError::SizeOverflow`。
pub fn build_file_header(total_file_size: usize) -> Result<[u8; FILE_HEADER_SIZE]> {
    let file_size = to_u32("file size", total_file_size)?;
    let mut header = [0u8; FILE_HEADER_SIZE];

    header[0..2].copy_from_slice(&BMP_MAGIC);
    header[2..6].copy_from_slice(&file_size.to_le_bytes());
    // 6..10 保留字段
    header[10..14].copy_from_slice(&(BMP_HEADER_SIZE as u32).to_le_bytes());

    Ok(header)
}

/// 构造 DIB 头 (BITMAPINFOHEADER)。
///
/// 压缩方式、分辨率以及调色板相关字段全部为 0。
///
/// # Errors
///
/// 宽、高或像素数组大小超出 `u32` 时返回 `EncodeError::SizeOverflow`。
pub fn build_dib_header(
    pixel_array_size: usize,
    width: usize,
    height: usize,
) -> Result<[u8; DIB_HEADER_SIZE]> {
    let width = to_u32("width", width)?;
    let height = to_u32("height", height)?;
    let image_size = to_u32("image size", pixel_array_size)?;
    let mut header = [0u8; DIB_HEADER_SIZE];

    header[0..4].copy_from_slice(&(DIB_HEADER_SIZE as u32).to_le_bytes());
    header[4..8].copy_from_slice(&width.to_le_bytes());
    header[8..12].copy_from_slice(&height.to_le_bytes());
    header[12..14].copy_from_slice(&COLOR_PLANES.to_le_bytes());
    header[14..16].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    // 16..20 压缩方式 (BI_RGB)
    header[20..24].copy_from_slice(&image_size.to_le_bytes());
    // 24..40 水平/垂直分辨率、调色板颜色数、重要颜色数

    Ok(header)
}

/// 完整的 54 字节 BMP 头部。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file: [u8; FILE_HEADER_SIZE],
    pub dib: [u8; DIB_HEADER_SIZE],
}

impl BmpHeader {
    /// 根据几何信息生成头部，文件总大小为 `54 + 像素数组大小`。
    pub fn new(geometry: &Geometry) -> Result<Self> {
        let pixel_array_size = geometry.pixel_array_size()?;
        let total_file_size =
            BMP_HEADER_SIZE
                .checked_add(pixel_array_size)
                .ok_or(EncodeError::SizeOverflow {
                    field: "file size",
                    value: BMP_HEADER_SIZE as u128 + pixel_array_size as u128,
                })?;

        Ok(Self {
            file: build_file_header(total_file_size)?,
            dib: build_dib_header(pixel_array_size, geometry.width, geometry.height)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; BMP_HEADER_SIZE] {
        let mut bytes = [0u8; BMP_HEADER_SIZE];
        bytes[..FILE_HEADER_SIZE].copy_from_slice(&self.file);
        bytes[FILE_HEADER_SIZE..].copy_from_slice(&self.dib);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn file_header_layout() {
        let header = build_file_header(102).unwrap();
        assert_eq!(&header[0..2], b"BM");
        assert_eq!(u32_at(&header, 2), 102);
        assert_eq!(u32_at(&header, 6), 0);
        assert_eq!(u32_at(&header, 10), 54);
    }

    #[test]
    fn dib_header_layout() {
        let header = build_dib_header(48, 4, 4).unwrap();
        assert_eq!(u32_at(&header, 0), 40);
        assert_eq!(u32_at(&header, 4), 4);
        assert_eq!(u32_at(&header, 8), 4);
        assert_eq!(u16::from_le_bytes([header[12], header[13]]), 1);
        assert_eq!(u16::from_le_bytes([header[14], header[15]]), 24);
        assert_eq!(u32_at(&header, 16), 0);
        assert_eq!(u32_at(&header, 20), 48);
        assert!(header[24..].iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_fields_overflow() {
        let too_big = u32::MAX as usize + 1;
        assert!(matches!(
            build_file_header(too_big),
            Err(EncodeError::SizeOverflow { field: "file size", .. })
        ));
        assert!(matches!(
            build_dib_header(12, too_big, 1),
            Err(EncodeError::SizeOverflow { field: "width", .. })
        ));
        assert!(matches!(
            build_dib_header(too_big, 1, 1),
            Err(EncodeError::SizeOverflow { field: "image size", .. })
        ));
    }
}

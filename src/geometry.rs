//! # 几何计算模块
//!
//! 根据负载长度推导像素网格的宽和高：
//! 不给宽高比时生成 1 像素高的线形图像，给出宽高比时生成近似该比例的矩形图像。

use crate::constants::{FAST_PATH_MODULUS, LINE_GROUP_BYTES};
use crate::error::{EncodeError, Result};
use crate::size::{align_to_4, row_size_for};
use std::fmt;
use std::str::FromStr;

/// 目标宽高比 (宽 / 高)，保证是有限的正数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidesRatio(f64);

impl SidesRatio {
    pub fn new(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(EncodeError::InvalidGeometry(format!(
                "sides ratio must be a positive number, got {ratio}"
            )));
        }
        Ok(Self(ratio))
    }

    /// 由 `宽:高` 两条边构造比例。
    pub fn from_sides(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(EncodeError::InvalidGeometry(format!(
                "sides must be positive numbers, got {width}:{height}"
            )));
        }
        Self::new(width / height)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SidesRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 接受 `4:3`、`4/3` 或者 `1.5` 这样的写法。
impl FromStr for SidesRatio {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|_| {
                EncodeError::InvalidGeometry(format!("cannot parse sides ratio '{s}'"))
            })
        };

        match s.split_once([':', '/']) {
            Some((width, height)) => Self::from_sides(parse(width)?, parse(height)?),
            None => Self::new(parse(s)?),
        }
    }
}

/// 像素网格的尺寸以及每一行在像素数组中占用的字节数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    /// 行跨度，总是 4 的倍数，且不小于 `row_size_for(width)`。
    pub row_size: usize,
}

impl Geometry {
    /// 像素数组的总字节数，即 `row_size * height`。
    pub fn pixel_array_size(&self) -> Result<usize> {
        self.row_size
            .checked_mul(self.height)
            .ok_or(EncodeError::SizeOverflow {
                field: "pixel array size",
                value: self.row_size as u128 * self.height as u128,
            })
    }
}

fn ensure_payload(payload_len: usize) -> Result<()> {
    if payload_len == 0 {
        return Err(EncodeError::InvalidGeometry(
            "cannot form an image from an empty payload".to_string(),
        ));
    }
    Ok(())
}

/// 线形模式：把负载看作一行 4 字节的像素组。
///
/// `width = align_to_4(payload_len) / 4`，`height = 1`，行跨度为 `width * 4`。
///
/// # Errors
///
/// 负载为空时返回 `EncodeError::InvalidGeometry`。
pub fn line_geometry(payload_len: usize) -> Result<Geometry> {
    ensure_payload(payload_len)?;

    let aligned = align_to_4(payload_len);
    let width = aligned / LINE_GROUP_BYTES;

    Ok(Geometry {
        width,
        height: 1,
        row_size: aligned,
    })
}

/// 矩形模式下用来推导宽高的目标空间。
///
/// 12 的倍数原样保留，其余长度按 4 字节对齐。
/// 12 的倍数分支沿用旧版工具的快速路径；12 的倍数本身已按 4 对齐，所以结果与 `align_to_4` 相同。
pub fn rectangle_target_space(payload_len: usize) -> usize {
    if payload_len % FAST_PATH_MODULUS == 0 {
        return payload_len;
    }
    align_to_4(payload_len)
}

/// 把浮点边长转换为像素数，超出 `u32` 时报错，避免后续的行大小计算溢出。
fn grid_side(field: &'static str, side: f64) -> Result<usize> {
    if side > u32::MAX as f64 {
        return Err(EncodeError::SizeOverflow {
            field,
            value: side as u128,
        });
    }
    Ok((side as usize).max(1))
}

/// 矩形模式：求一个近似 `ratio` 的 `width x height` 网格。
///
/// 这只是近似解，`row_size_for(width) * height` 可能明显大于目标空间，
/// 多出的部分由填充字节补齐。
///
/// # Errors
///
/// * 负载为空时返回 `EncodeError::InvalidGeometry`。
/// * 比例过于极端、宽或高超出 `u32` 时返回 `EncodeError::SizeOverflow`。
pub fn rectangle_geometry(payload_len: usize, ratio: SidesRatio) -> Result<Geometry> {
    ensure_payload(payload_len)?;

    let target_space = rectangle_target_space(payload_len);
    let raw_height = (target_space as f64 / ratio.value()).sqrt();
    let width = grid_side("width", (raw_height * ratio.value()).ceil())?;
    let height = grid_side("height", raw_height.ceil())?;

    Ok(Geometry {
        width,
        height,
        row_size: row_size_for(width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_geometry_for_nine_bytes() {
        let geometry = line_geometry(9).unwrap();
        assert_eq!(geometry.width, 3);
        assert_eq!(geometry.height, 1);
        assert_eq!(geometry.pixel_array_size().unwrap(), 12);
    }

    #[test]
    fn square_for_twelve_bytes_uses_fast_path() {
        let ratio = SidesRatio::new(1.0).unwrap();
        assert_eq!(rectangle_target_space(12), 12);

        let geometry = rectangle_geometry(12, ratio).unwrap();
        assert_eq!((geometry.width, geometry.height), (4, 4));
        assert_eq!(geometry.row_size, 12);
        assert_eq!(geometry.pixel_array_size().unwrap(), 48);
    }

    #[test]
    fn target_space_is_aligned() {
        assert_eq!(rectangle_target_space(24), 24);
        assert_eq!(rectangle_target_space(13), 16);
        for len in 1..200 {
            assert_eq!(rectangle_target_space(len), align_to_4(len));
        }
    }

    #[test]
    fn empty_payload_is_rejected() {
        let ratio = SidesRatio::new(1.0).unwrap();
        assert!(matches!(
            line_geometry(0),
            Err(EncodeError::InvalidGeometry(_))
        ));
        assert!(matches!(
            rectangle_geometry(0, ratio),
            Err(EncodeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn extreme_ratio_overflows_grid_side() {
        let ratio = SidesRatio::new(1e40).unwrap();
        assert!(matches!(
            rectangle_geometry(12, ratio),
            Err(EncodeError::SizeOverflow { field: "width", .. })
        ));

        let ratio = SidesRatio::new(1e-300).unwrap();
        assert!(matches!(
            rectangle_geometry(12, ratio),
            Err(EncodeError::SizeOverflow { field: "height", .. })
        ));
    }

    #[test]
    fn ratio_parsing() {
        assert_eq!("2".parse::<SidesRatio>().unwrap().value(), 2.0);
        assert_eq!("1.5".parse::<SidesRatio>().unwrap().value(), 1.5);
        assert_eq!("3:2".parse::<SidesRatio>().unwrap().value(), 1.5);
        assert_eq!("16/8".parse::<SidesRatio>().unwrap().value(), 2.0);
        assert!("0".parse::<SidesRatio>().is_err());
        assert!("-1".parse::<SidesRatio>().is_err());
        assert!("4:0".parse::<SidesRatio>().is_err());
        assert!("wide".parse::<SidesRatio>().is_err());
        assert!("inf".parse::<SidesRatio>().is_err());
    }
}

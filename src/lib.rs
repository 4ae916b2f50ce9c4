//! # bmp_stash 库
//!
//! 本库包含把任意字节编码为 24 位 BMP 图像的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod compare;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod geometry;
pub mod handler;
pub mod header;
pub mod padding;
pub mod size;

pub use encoder::{EncodeOptions, EncodedImage, encode};
pub use error::EncodeError;
pub use geometry::{Geometry, SidesRatio};
pub use padding::PaddingPolicy;

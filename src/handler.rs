//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `compare` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用编码核心以及向用户报告结果。

use crate::cli::{CompareArgs, EncodeArgs};
use crate::compare::diff_bytes;
use crate::encoder::{EncodeOptions, EncodedImage, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// `compare` 命令最多列出的差异偏移数量。
const MAX_LISTED_OFFSETS: usize = 16;

/// 为没有显式给出输出路径的输入生成默认路径：`<文件名>.bmp`。
fn default_dest(input: &Path) -> PathBuf {
    input.with_extension("bmp")
}

/// 把完整的字节流一次性写入目标路径。
///
/// 先写入同目录下的临时文件，再重命名为目标文件，失败时不会留下写了一半的图像。
fn write_atomically(dest: &Path, bytes: &[u8]) -> Result<()> {
    let dir = dest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).with_context(|| {
        format!(
            "Unable to create a temporary file in: {}",
            dir.to_string_lossy().red().bold()
        )
    })?;
    file.write_all(bytes)
        .and_then(|_| file.as_file().sync_all())
        .with_context(|| "Failed to write the encoded image to a temporary file.")?;
    file.persist(dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    Ok(())
}

/// 用 BMP 解码器重新读取输出文件，确认尺寸与编码时一致。
fn verify_image(dest: &Path, encoded: &EncodedImage) -> Result<()> {
    let written = fs::read(dest).with_context(|| {
        format!(
            "Unable to read back image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    let decoded = image::load_from_memory_with_format(&written, ImageFormat::Bmp)
        .with_context(|| "The written file could not be decoded as a BMP image.")?;

    let geometry = encoded.geometry();
    anyhow::ensure!(
        decoded.width() as usize == geometry.width && decoded.height() as usize == geometry.height,
        "Decoded image is {}x{}, expected {}x{}",
        decoded.width().to_string().red().bold(),
        decoded.height().to_string().red().bold(),
        geometry.width.to_string().green().bold(),
        geometry.height.to_string().green().bold()
    );

    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取负载文件、调用编码核心生成 BMP 字节流，
/// 最后把结果一次性写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径以及编码参数的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入文件。
/// * 编码失败 (例如输入文件为空)。
/// * 无法写入目标图像文件，或 `--verify` 校验失败。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_dest(&args.input));

    anyhow::ensure!(
        args.force || !dest.exists(),
        "Output file already exists: {}\nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );

    let payload = fs::read(&args.input).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let options = EncodeOptions {
        ratio: args.ratio,
        padding: args.padding_policy(),
    };

    let encoded = encode(&payload, &options).with_context(|| {
        format!(
            "Failed to encode '{}' as a bitmap.",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    if args.verbose {
        let geometry = encoded.geometry();
        println!(
            "Geometry: {}x{} pixels, row size {} bytes, pixel array {} bytes, padding {} bytes",
            geometry.width.to_string().green(),
            geometry.height.to_string().green(),
            geometry.row_size.to_string().green(),
            encoded.pixel_array_size().to_string().green(),
            encoded.padding_len().to_string().green()
        );
    }

    write_atomically(&dest, encoded.as_bytes())?;

    if args.verify {
        verify_image(&dest, &encoded)?;
        println!("The image decodes as a valid bitmap.");
    }

    println!(
        "The payload has been successfully encoded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Compare' 命令的执行逻辑。
///
/// # Errors
///
/// 无法读取任一文件，或者两个文件内容不同时返回错误。
pub fn handle_compare(args: CompareArgs) -> Result<()> {
    let read = |path: &Path| {
        fs::read(path).with_context(|| {
            format!(
                "Unable to read file: {}",
                path.to_string_lossy().red().bold()
            )
        })
    };
    let left = read(args.left.as_path())?;
    let right = read(args.right.as_path())?;

    let diff = diff_bytes(&left, &right);
    if diff.is_identical() {
        println!(
            "The files are identical ({} bytes).",
            diff.left_len.to_string().green().bold()
        );
        return Ok(());
    }

    if diff.left_len != diff.right_len {
        println!(
            "Length mismatch: {} vs {} bytes",
            diff.left_len.to_string().red().bold(),
            diff.right_len.to_string().red().bold()
        );
    }

    let listed: Vec<String> = diff
        .offsets
        .iter()
        .take(MAX_LISTED_OFFSETS)
        .map(|offset| offset.to_string())
        .collect();
    if !listed.is_empty() {
        println!(
            "Differing offsets: {}{}",
            listed.join(", ").red(),
            if diff.offsets.len() > MAX_LISTED_OFFSETS {
                ", ..."
            } else {
                ""
            }
        );
    }

    anyhow::bail!("The files differ.")
}

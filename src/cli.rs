//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::geometry::SidesRatio;
use crate::padding::PaddingPolicy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 把任意文件内容编码成可以直接查看的 24 位 BMP 图像的命令行工具。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "把任意文件内容编码成可以直接查看的 24 位 BMP 图像。负载原样存放在像素数组的开头，不足部分用填充字节补齐。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (编码) 和 compare (比较)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把文件内容编码为 BMP 图像。
    Encode(EncodeArgs),

    /// 逐字节比较两个文件。
    Compare(CompareArgs),
}

/// 命令行中可选的填充策略。
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddingArg {
    /// 全部填 0。
    Zero,
    /// 按负载的字节频率填充。
    Frequency,
    /// 随机字节。
    Random,
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 要编码的负载文件路径。
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出图像路径。省略时在输入文件旁生成 `<文件名>.bmp`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 矩形图像的宽高比，例如 `4:3` 或 `1.5`。省略时生成 1 像素高的线形图像。
    #[arg(short, long)]
    pub ratio: Option<SidesRatio>,

    /// 填充策略。
    #[arg(short, long, value_enum, default_value = "zero")]
    pub padding: PaddingArg,

    /// 随机填充的种子，仅在 `--padding random` 时生效。
    #[arg(long)]
    pub seed: Option<u64>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,

    /// 写入后用 BMP 解码器重新读取，确认图像有效。
    #[arg(long)]
    pub verify: bool,

    /// 打印推导出的几何信息。
    #[arg(short, long)]
    pub verbose: bool,
}

impl EncodeArgs {
    pub fn padding_policy(&self) -> PaddingPolicy {
        match self.padding {
            PaddingArg::Zero => PaddingPolicy::Zero,
            PaddingArg::Frequency => PaddingPolicy::FrequencyWeighted,
            PaddingArg::Random => PaddingPolicy::Random { seed: self.seed },
        }
    }
}

/// 'compare' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// 第一个文件。
    #[arg(short, long)]
    pub left: PathBuf,

    /// 第二个文件。
    #[arg(short, long)]
    pub right: PathBuf,
}

use clap::Parser;

use bmp_stash::{
    cli::{Cli, Commands},
    handler::{handle_compare, handle_encode},
};

/// bmp_stash 的入口：`encode` 把文件编码成 BMP 图像，`compare` 逐字节比较两个文件。
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Compare(args) => handle_compare(args),
    }
}

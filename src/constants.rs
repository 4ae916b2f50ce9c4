/// BMP 文件头 (BITMAPFILEHEADER) 的大小 (字节)。
pub const FILE_HEADER_SIZE: usize = 14;

/// DIB 头 (BITMAPINFOHEADER) 的大小 (字节)。
pub const DIB_HEADER_SIZE: usize = 40;

/// BMP 文件的标准头部大小 (字节)。
/// 由于不使用调色板，像素数组总是紧跟在这 54 个字节之后。
pub const BMP_HEADER_SIZE: usize = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

/// 文件头中的魔数 "BM"。
pub const BMP_MAGIC: [u8; 2] = *b"BM";

/// 每个像素的位数，只支持 24 位 RGB。
pub const BITS_PER_PIXEL: u16 = 24;

/// 颜色平面数，BMP 规定必须为 1。
pub const COLOR_PLANES: u16 = 1;

/// 像素行的对齐字节数。每一行的字节长度都必须是它的整数倍。
pub const ROW_ALIGNMENT: usize = 4;

/// 线形模式下一个 "像素组" 占用的字节数。
pub const LINE_GROUP_BYTES: usize = 4;

/// 矩形模式的快速路径模数：负载长度能被 12 整除时不再额外对齐。
pub const FAST_PATH_MODULUS: usize = 12;

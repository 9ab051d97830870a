// 盤面定数

/// ====== 盤面サイズ ======

/// 行・列の最小値（これ未満への縮小は行わない）
pub const MIN_DIM: usize = 1;
/// 行・列の最大値（ワイヤヘッダが1バイトのため）
pub const MAX_DIM: usize = 255;

/// ====== ワイヤフォーマット ======

/// ヘッダ長（rows 1バイト + cols 1バイト）
pub const HEADER_LEN: usize = 2;
/// セル状態1個のビット幅
pub const CELL_BITS: u32 = 2;
/// 境界線1本のビット幅
pub const BORDER_BITS: u32 = 1;

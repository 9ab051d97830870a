// 盤面エディタ・コア - ライブラリモジュール

pub mod constants;
pub mod domain; // ドメイン層
pub mod error;

// 主要な型を再エクスポート
pub use domain::board::{Board, CellState, ColEdge, RowEdge};
pub use domain::codec::{
    decode, decode_lenient, encode, encoded_len, export_base64, import_base64,
};
pub use error::{BoardError, Result};

// テキストトランスポート - Base64による可搬エンコード

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::domain::board::Board;
use crate::domain::codec::binary::{decode, encode};
use crate::error::{BoardError, Result};

/// 盤面をコピー＆ペースト可能なBase64文字列にエクスポートする
pub fn export_base64(board: &Board) -> Result<String> {
    Ok(STANDARD.encode(encode(board)?))
}

/// Base64文字列から盤面をインポートする
///
/// 前後の空白は無視する。Base64として解釈できない入力は
/// `InvalidEncoding`として呼び出し側に返し、パニックはしない。
pub fn import_base64(text: &str) -> Result<Board> {
    let bytes = STANDARD
        .decode(text.trim())
        .map_err(|_| BoardError::InvalidEncoding)?;
    decode(&bytes)
}

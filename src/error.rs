// エラー型定義

use thiserror::Error;

/// 盤面モデルとコーデックの共通エラー型
///
/// すべて回復可能なエラーとして呼び出し側に返す。
/// インポート失敗時は現在の盤面を変更しないこと。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// 盤面サイズが不正（1未満、または255超）
    #[error("盤面サイズが不正: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// 座標が現在の盤面範囲外
    #[error("座標が範囲外: ({row}, {col})")]
    IndexOutOfBounds { row: usize, col: usize },

    /// デコード入力がヘッダから計算した長さに満たない
    #[error("盤面データが不足: 必要{expected}バイト、実際{actual}バイト")]
    TruncatedInput { expected: usize, actual: usize },

    /// 2ビット値がセル状態として不正（3）
    #[error("不正なセル状態値: {0}")]
    InvalidCellState(u8),

    /// テキストがBase64としてデコード不能
    #[error("不正なBase64データ")]
    InvalidEncoding,
}

/// 本クレート共通のResult型
pub type Result<T> = std::result::Result<T, BoardError>;

// セル状態型定義

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// 盤面のセルが取りうる状態（2ビットに収まる）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// 未着色
    #[default]
    Empty,
    /// 赤
    Red,
    /// 白
    White,
}

impl CellState {
    /// ワイヤ上の2ビット値に変換
    pub fn to_bits(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Red => 1,
            CellState::White => 2,
        }
    }

    /// 2ビット値からセル状態に変換（3は不正）
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Red),
            2 => Ok(CellState::White),
            _ => Err(BoardError::InvalidCellState(bits)),
        }
    }

    /// クリック時の状態サイクル（空→赤→白→空）
    pub fn cycle(self) -> Self {
        match self {
            CellState::Empty => CellState::Red,
            CellState::Red => CellState::White,
            CellState::White => CellState::Empty,
        }
    }
}

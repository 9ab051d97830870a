// 盤面関連のドメイン層

pub mod board;
pub mod cell;

pub use board::{Board, ColEdge, RowEdge};
pub use cell::CellState;

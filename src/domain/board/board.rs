// 盤面モデル - 可変サイズの盤面とその安全な操作

use serde::Serialize;

use crate::constants::{MAX_DIM, MIN_DIM};
use crate::domain::board::cell::CellState;
use crate::error::{BoardError, Result};

/// 行の増減をどちらの辺で行うか
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowEdge {
    Top,
    Bottom,
}

/// 列の増減をどちらの辺で行うか
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColEdge {
    Left,
    Right,
}

/// 盤面の状態（セル＋水平・垂直境界線）
///
/// 3つの行列は常にrows/colsと整合するサイズを保つ:
/// - cells: rows × cols
/// - h_borders: (rows + 1) × cols（各行の上辺＋最下行の下辺）
/// - v_borders: rows × (cols + 1)（各列の左辺＋最右列の右辺）
///
/// フィールドは非公開とし、整合性を崩す経路を閉じている。
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<CellState>>,
    h_borders: Vec<Vec<bool>>,
    v_borders: Vec<Vec<bool>>,
}

impl Board {
    /// 指定サイズの空盤面を作成（行・列とも1〜255の範囲外はエラー）
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![CellState::Empty; cols]; rows],
            h_borders: vec![vec![false; cols]; rows + 1],
            v_borders: vec![vec![false; cols + 1]; rows],
        })
    }

    /// 行数
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// セルを取得（範囲外はNone）
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row)?.get(col).copied()
    }

    /// セルに状態を塗る
    pub fn paint_cell(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::IndexOutOfBounds { row, col });
        }
        self.cells[row][col] = state;
        Ok(())
    }

    /// セルの状態を1段階進め、新しい状態を返す（クリック・ドラッグ塗り用）
    pub fn cycle_cell(&mut self, row: usize, col: usize) -> Result<CellState> {
        let next = self
            .get(row, col)
            .ok_or(BoardError::IndexOutOfBounds { row, col })?
            .cycle();
        self.cells[row][col] = next;
        Ok(next)
    }

    /// 水平境界線を取得（範囲外はNone）
    pub fn h_border(&self, row: usize, col: usize) -> Option<bool> {
        self.h_borders.get(row)?.get(col).copied()
    }

    /// 垂直境界線を取得（範囲外はNone）
    pub fn v_border(&self, row: usize, col: usize) -> Option<bool> {
        self.v_borders.get(row)?.get(col).copied()
    }

    /// 水平境界線の有無を設定（rowは0..=rows）
    pub fn set_h_border(&mut self, row: usize, col: usize, on: bool) -> Result<()> {
        if row > self.rows || col >= self.cols {
            return Err(BoardError::IndexOutOfBounds { row, col });
        }
        self.h_borders[row][col] = on;
        Ok(())
    }

    /// 垂直境界線の有無を設定（colは0..=cols）
    pub fn set_v_border(&mut self, row: usize, col: usize, on: bool) -> Result<()> {
        if row >= self.rows || col > self.cols {
            return Err(BoardError::IndexOutOfBounds { row, col });
        }
        self.v_borders[row][col] = on;
        Ok(())
    }

    /// 水平境界線を反転し、新しい値を返す
    pub fn toggle_h_border(&mut self, row: usize, col: usize) -> Result<bool> {
        let next = !self
            .h_border(row, col)
            .ok_or(BoardError::IndexOutOfBounds { row, col })?;
        self.h_borders[row][col] = next;
        Ok(next)
    }

    /// 垂直境界線を反転し、新しい値を返す
    pub fn toggle_v_border(&mut self, row: usize, col: usize) -> Result<bool> {
        let next = !self
            .v_border(row, col)
            .ok_or(BoardError::IndexOutOfBounds { row, col })?;
        self.v_borders[row][col] = next;
        Ok(next)
    }

    /// セル状態を行優先で走査する
    pub fn iter_cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// 水平境界線を行優先で走査する
    pub fn iter_h_borders(&self) -> impl Iterator<Item = bool> + '_ {
        self.h_borders.iter().flatten().copied()
    }

    /// 垂直境界線を行優先で走査する
    pub fn iter_v_borders(&self) -> impl Iterator<Item = bool> + '_ {
        self.v_borders.iter().flatten().copied()
    }

    /// 盤面サイズを変更する
    ///
    /// 増加分は指定した辺に既定値（Empty / false）で挿入し、
    /// 減少分は指定した辺から取り除く。新旧両方に存在する座標の
    /// 値は一切変化しない。各軸は1〜255の範囲でクランプされ、
    /// 1未満への縮小・255超への拡大はその軸では何もしない。
    pub fn resize(&mut self, new_rows: usize, new_cols: usize, row_edge: RowEdge, col_edge: ColEdge) {
        let new_rows = new_rows.clamp(MIN_DIM, MAX_DIM);
        let new_cols = new_cols.clamp(MIN_DIM, MAX_DIM);
        if new_rows == self.rows && new_cols == self.cols {
            return;
        }

        // 上・左辺で増減する場合、既存内容は新座標系でオフセットされる
        let row_off = match row_edge {
            RowEdge::Top => new_rows as isize - self.rows as isize,
            RowEdge::Bottom => 0,
        };
        let col_off = match col_edge {
            ColEdge::Left => new_cols as isize - self.cols as isize,
            ColEdge::Right => 0,
        };

        // 境界線行列も同じオフセットで写る（+1軸も内容ごと移動するため）
        self.cells = remap(&self.cells, new_rows, new_cols, row_off, col_off, CellState::Empty);
        self.h_borders = remap(&self.h_borders, new_rows + 1, new_cols, row_off, col_off, false);
        self.v_borders = remap(&self.v_borders, new_rows, new_cols + 1, row_off, col_off, false);
        self.rows = new_rows;
        self.cols = new_cols;
    }

    /// 指定した辺に行を1本追加
    pub fn add_row(&mut self, edge: RowEdge) {
        self.resize(self.rows + 1, self.cols, edge, ColEdge::Right);
    }

    /// 指定した辺の行を1本削除（1行しかなければ何もしない）
    pub fn remove_row(&mut self, edge: RowEdge) {
        self.resize(self.rows.saturating_sub(1), self.cols, edge, ColEdge::Right);
    }

    /// 指定した辺に列を1本追加
    pub fn add_col(&mut self, edge: ColEdge) {
        self.resize(self.rows, self.cols + 1, RowEdge::Bottom, edge);
    }

    /// 指定した辺の列を1本削除（1列しかなければ何もしない）
    pub fn remove_col(&mut self, edge: ColEdge) {
        self.resize(self.rows, self.cols.saturating_sub(1), RowEdge::Bottom, edge);
    }
}

impl Default for Board {
    /// エディタ初期状態と同じ10×10の空盤面
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            cells: vec![vec![CellState::Empty; 10]; 10],
            h_borders: vec![vec![false; 10]; 11],
            v_borders: vec![vec![false; 11]; 10],
        }
    }
}

/// 新サイズの行列を作り、旧行列と重なる座標の値をそのまま写す
fn remap<T: Copy>(
    old: &[Vec<T>],
    new_rows: usize,
    new_cols: usize,
    row_off: isize,
    col_off: isize,
    default: T,
) -> Vec<Vec<T>> {
    let mut out = vec![vec![default; new_cols]; new_rows];
    for (r, row) in out.iter_mut().enumerate() {
        let Some(old_row) = source_index(r, row_off).and_then(|i| old.get(i)) else {
            continue;
        };
        for (c, slot) in row.iter_mut().enumerate() {
            if let Some(&value) = source_index(c, col_off).and_then(|i| old_row.get(i)) {
                *slot = value;
            }
        }
    }
    out
}

/// 新座標に対応する旧座標（負になれば旧範囲外）
fn source_index(new_index: usize, off: isize) -> Option<usize> {
    usize::try_from(new_index as isize - off).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_empty_board() {
        let board = Board::new(3, 4).unwrap();
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert!(board.iter_cells().all(|s| s == CellState::Empty));
        assert!(board.iter_h_borders().all(|b| !b));
        assert!(board.iter_v_borders().all(|b| !b));
        assert_eq!(board.iter_cells().count(), 12);
        assert_eq!(board.iter_h_borders().count(), 16);
        assert_eq!(board.iter_v_borders().count(), 15);
    }

    #[test]
    fn new_rejects_invalid_dimensions() {
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Board::new(5, 0),
            Err(BoardError::InvalidDimensions { rows: 5, cols: 0 })
        );
        assert_eq!(
            Board::new(256, 1),
            Err(BoardError::InvalidDimensions { rows: 256, cols: 1 })
        );
        assert!(Board::new(255, 255).is_ok());
    }

    #[test]
    fn paint_and_get() {
        let mut board = Board::new(2, 2).unwrap();
        board.paint_cell(0, 1, CellState::Red).unwrap();
        board.paint_cell(1, 0, CellState::White).unwrap();
        assert_eq!(board.get(0, 0), Some(CellState::Empty));
        assert_eq!(board.get(0, 1), Some(CellState::Red));
        assert_eq!(board.get(1, 0), Some(CellState::White));
        assert_eq!(board.get(2, 0), None);
    }

    #[test]
    fn paint_out_of_range_fails() {
        let mut board = Board::new(2, 2).unwrap();
        assert_eq!(
            board.paint_cell(2, 0, CellState::Red),
            Err(BoardError::IndexOutOfBounds { row: 2, col: 0 })
        );
        assert_eq!(
            board.paint_cell(0, 2, CellState::Red),
            Err(BoardError::IndexOutOfBounds { row: 0, col: 2 })
        );
    }

    #[test]
    fn cycle_cell_rotates_in_place() {
        let mut board = Board::new(1, 1).unwrap();
        assert_eq!(board.cycle_cell(0, 0).unwrap(), CellState::Red);
        assert_eq!(board.cycle_cell(0, 0).unwrap(), CellState::White);
        assert_eq!(board.cycle_cell(0, 0).unwrap(), CellState::Empty);
        assert!(board.cycle_cell(1, 1).is_err());
    }

    #[test]
    fn border_grids_have_extended_extents() {
        let mut board = Board::new(2, 3).unwrap();
        // 水平境界は行方向に+1
        assert_eq!(board.toggle_h_border(2, 0).unwrap(), true);
        assert!(board.toggle_h_border(3, 0).is_err());
        assert!(board.toggle_h_border(0, 3).is_err());
        // 垂直境界は列方向に+1
        assert_eq!(board.toggle_v_border(0, 3).unwrap(), true);
        assert!(board.toggle_v_border(2, 0).is_err());
        assert!(board.toggle_v_border(0, 4).is_err());
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut board = Board::new(2, 2).unwrap();
        assert_eq!(board.toggle_h_border(1, 1).unwrap(), true);
        assert_eq!(board.toggle_h_border(1, 1).unwrap(), false);
        assert_eq!(board.h_border(1, 1), Some(false));
    }

    #[test]
    fn resize_grow_bottom_right_preserves_content() {
        let mut board = Board::new(2, 2).unwrap();
        board.paint_cell(0, 0, CellState::Red).unwrap();
        board.paint_cell(1, 1, CellState::White).unwrap();
        board.toggle_h_border(2, 1).unwrap();
        board.toggle_v_border(1, 2).unwrap();

        board.resize(3, 4, RowEdge::Bottom, ColEdge::Right);
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.get(0, 0), Some(CellState::Red));
        assert_eq!(board.get(1, 1), Some(CellState::White));
        assert_eq!(board.h_border(2, 1), Some(true));
        assert_eq!(board.v_border(1, 2), Some(true));
        // 新規分は既定値
        assert_eq!(board.get(2, 3), Some(CellState::Empty));
        assert_eq!(board.h_border(3, 0), Some(false));
    }

    #[test]
    fn resize_grow_top_left_shifts_content() {
        let mut board = Board::new(2, 2).unwrap();
        board.paint_cell(0, 0, CellState::Red).unwrap();
        board.toggle_h_border(0, 0).unwrap();
        board.toggle_v_border(0, 0).unwrap();

        board.resize(3, 3, RowEdge::Top, ColEdge::Left);
        // 旧(0,0)は新(1,1)に移る
        assert_eq!(board.get(1, 1), Some(CellState::Red));
        assert_eq!(board.get(0, 0), Some(CellState::Empty));
        assert_eq!(board.h_border(1, 1), Some(true));
        assert_eq!(board.v_border(1, 1), Some(true));
        assert_eq!(board.h_border(0, 0), Some(false));
    }

    #[test]
    fn resize_shrink_top_drops_first_rows() {
        let mut board = Board::new(3, 2).unwrap();
        board.paint_cell(0, 0, CellState::Red).unwrap();
        board.paint_cell(2, 1, CellState::White).unwrap();

        board.resize(2, 2, RowEdge::Top, ColEdge::Right);
        assert_eq!(board.rows(), 2);
        // 先頭行が消え、旧(2,1)が新(1,1)に移る
        assert_eq!(board.get(1, 1), Some(CellState::White));
        assert!(board.iter_cells().filter(|&s| s == CellState::Red).count() == 0);
    }

    #[test]
    fn resize_floor_is_one_by_one() {
        let mut board = Board::new(1, 1).unwrap();
        board.paint_cell(0, 0, CellState::Red).unwrap();
        for row_edge in [RowEdge::Top, RowEdge::Bottom] {
            board.resize(0, 1, row_edge, ColEdge::Right);
        }
        for col_edge in [ColEdge::Left, ColEdge::Right] {
            board.resize(1, 0, RowEdge::Bottom, col_edge);
        }
        assert_eq!(board.rows(), 1);
        assert_eq!(board.cols(), 1);
        assert_eq!(board.get(0, 0), Some(CellState::Red));
    }

    #[test]
    fn resize_caps_at_max_dim() {
        let mut board = Board::new(255, 1).unwrap();
        board.resize(300, 1, RowEdge::Bottom, ColEdge::Right);
        assert_eq!(board.rows(), 255);
    }

    #[test]
    fn add_remove_roundtrip() {
        let mut board = Board::new(2, 2).unwrap();
        board.paint_cell(1, 1, CellState::White).unwrap();
        let before = board.clone();

        board.add_row(RowEdge::Top);
        board.add_col(ColEdge::Left);
        board.remove_row(RowEdge::Top);
        board.remove_col(ColEdge::Left);
        assert_eq!(board, before);
    }

    #[test]
    fn default_matches_editor_initial_size() {
        let board = Board::default();
        assert_eq!(board.rows(), 10);
        assert_eq!(board.cols(), 10);
        assert_eq!(board, Board::new(10, 10).unwrap());
    }
}

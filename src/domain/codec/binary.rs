// バイナリコーデック - 盤面の圧縮シリアライズ

use tracing::debug;

use crate::constants::{BORDER_BITS, CELL_BITS, HEADER_LEN, MAX_DIM, MIN_DIM};
use crate::domain::board::{Board, CellState};
use crate::domain::codec::bits::{BitReader, BitWriter};
use crate::error::{BoardError, Result};

/// セルブロックのバイト数（2ビット×セル数の切り上げ）
fn cell_block_len(rows: usize, cols: usize) -> usize {
    (rows * cols * CELL_BITS as usize).div_ceil(8)
}

/// 水平境界ブロックのバイト数（(rows+1)×colsビットの切り上げ）
fn h_border_block_len(rows: usize, cols: usize) -> usize {
    ((rows + 1) * cols).div_ceil(8)
}

/// 垂直境界ブロックのバイト数（rows×(cols+1)ビットの切り上げ）
fn v_border_block_len(rows: usize, cols: usize) -> usize {
    (rows * (cols + 1)).div_ceil(8)
}

/// エンコード後の総バイト数
///
/// ヘッダ2バイト＋3ブロック。総長はrows/colsだけで決まるため、
/// ワイヤ上に長さ情報や区切りは持たない。
pub fn encoded_len(rows: usize, cols: usize) -> usize {
    HEADER_LEN + cell_block_len(rows, cols) + h_border_block_len(rows, cols) + v_border_block_len(rows, cols)
}

/// 盤面をバイト列にエンコードする
///
/// 純粋関数であり、同じ盤面からは常に同じバイト列が得られる。
/// レイアウト: rows, cols（各1バイト）、セル状態（2ビット/個、行優先、
/// 下位ビット詰め）、水平境界（1ビット/本）、垂直境界（1ビット/本）。
/// 各ブロックの末尾バイトは0埋めされる。
pub fn encode(board: &Board) -> Result<Vec<u8>> {
    let (rows, cols) = (board.rows(), board.cols());
    if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
        return Err(BoardError::InvalidDimensions { rows, cols });
    }

    let total = encoded_len(rows, cols);
    let mut writer = BitWriter::with_capacity(total);
    writer.write_bits(rows as u8, 8);
    writer.write_bits(cols as u8, 8);

    for state in board.iter_cells() {
        writer.write_bits(state.to_bits(), CELL_BITS);
    }
    writer.align_to_byte();

    for on in board.iter_h_borders() {
        writer.write_bits(u8::from(on), BORDER_BITS);
    }
    writer.align_to_byte();

    for on in board.iter_v_borders() {
        writer.write_bits(u8::from(on), BORDER_BITS);
    }

    let bytes = writer.into_bytes();
    debug_assert_eq!(bytes.len(), total);
    debug!(rows, cols, len = bytes.len(), "盤面をエンコード");
    Ok(bytes)
}

/// バイト列から盤面を復元する（厳密な長さ検査）
///
/// ヘッダから全ブロック長を先に計算し、それに満たない入力は
/// `TruncatedInput`で拒否する。末尾の余分なバイトは無視する。
pub fn decode(bytes: &[u8]) -> Result<Board> {
    decode_inner(bytes, false)
}

/// 境界ブロックの欠落を許容するデコード
///
/// 旧エクスポートとの互換用。セルブロックまでは必須で、
/// 水平・垂直境界ブロックは「丸ごと」欠けている場合に限り
/// すべてfalseとして扱う。ブロック途中で切れた入力は
/// 通常どおり`TruncatedInput`になる。
pub fn decode_lenient(bytes: &[u8]) -> Result<Board> {
    decode_inner(bytes, true)
}

fn decode_inner(bytes: &[u8], lenient: bool) -> Result<Board> {
    if bytes.len() < HEADER_LEN {
        return Err(BoardError::TruncatedInput {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    let rows = bytes[0] as usize;
    let cols = bytes[1] as usize;
    if rows < MIN_DIM || cols < MIN_DIM {
        return Err(BoardError::InvalidDimensions { rows, cols });
    }

    // 読み出し範囲はヘッダから事前に確定させ、走査中に溢れないことを保証する
    let cell_end = HEADER_LEN + cell_block_len(rows, cols);
    let h_end = cell_end + h_border_block_len(rows, cols);
    let full_len = h_end + v_border_block_len(rows, cols);
    let actual = bytes.len();

    let (has_h, has_v) = if actual >= full_len {
        (true, true)
    } else if lenient && actual == h_end {
        (true, false)
    } else if lenient && actual == cell_end {
        (false, false)
    } else {
        return Err(BoardError::TruncatedInput {
            expected: full_len,
            actual,
        });
    };

    let mut board = Board::new(rows, cols)?;
    let mut reader = BitReader::new(&bytes[HEADER_LEN..]);

    for r in 0..rows {
        for c in 0..cols {
            let state = CellState::from_bits(reader.read_bits(CELL_BITS)?)?;
            board.paint_cell(r, c, state)?;
        }
    }
    reader.align_to_byte();

    if has_h {
        for r in 0..=rows {
            for c in 0..cols {
                if reader.read_bits(BORDER_BITS)? != 0 {
                    board.set_h_border(r, c, true)?;
                }
            }
        }
        reader.align_to_byte();
    }

    if has_v {
        for r in 0..rows {
            for c in 0..=cols {
                if reader.read_bits(BORDER_BITS)? != 0 {
                    board.set_v_border(r, c, true)?;
                }
            }
        }
    }

    debug!(rows, cols, len = actual, lenient, "盤面をデコード");
    Ok(board)
}

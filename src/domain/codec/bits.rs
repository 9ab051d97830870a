// ビット単位の読み書き - サブバイト値のパック・アンパック

use crate::error::{BoardError, Result};

/// 各バイトの下位ビットから順に値を詰め込むライタ
///
/// 2ビットのセル状態と1ビットの境界線を同じ経路で書くための
/// 小さな抽象。ブロック境界では`align_to_byte`で0埋めする。
#[derive(Debug, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    current: u8,
    bit_pos: u32,
}

impl BitWriter {
    /// 空のライタを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 最終サイズが分かっている場合の事前確保付きコンストラクタ
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
            current: 0,
            bit_pos: 0,
        }
    }

    /// 値の下位widthビットを書き込む（width <= 8）
    pub fn write_bits(&mut self, value: u8, width: u32) {
        debug_assert!(width <= 8);
        let mut value = u16::from(value & low_mask(width));
        let mut remaining = width;
        while remaining > 0 {
            let take = remaining.min(8 - self.bit_pos);
            self.current |= ((value as u8) & low_mask(take)) << self.bit_pos;
            self.bit_pos += take;
            value >>= take;
            remaining -= take;
            if self.bit_pos == 8 {
                self.buf.push(self.current);
                self.current = 0;
                self.bit_pos = 0;
            }
        }
    }

    /// 書きかけのバイトを0埋めして確定し、次のバイト境界に進む
    pub fn align_to_byte(&mut self) {
        if self.bit_pos > 0 {
            self.buf.push(self.current);
            self.current = 0;
            self.bit_pos = 0;
        }
    }

    /// 内容をバイト列として取り出す（末尾は0埋めで確定される）
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.buf
    }
}

/// 各バイトの下位ビットから順に値を取り出すリーダ
#[derive(Debug)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    byte_pos: usize,
    bit_pos: u32,
}

impl<'a> BitReader<'a> {
    /// バイト列の先頭から読むリーダを作成
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// 下位widthビットを読み出す（width <= 8、入力が尽きたらTruncatedInput）
    pub fn read_bits(&mut self, width: u32) -> Result<u8> {
        debug_assert!(width <= 8);
        let mut value: u8 = 0;
        let mut got = 0;
        while got < width {
            let byte = *self
                .buf
                .get(self.byte_pos)
                .ok_or(BoardError::TruncatedInput {
                    expected: self.byte_pos + 1,
                    actual: self.buf.len(),
                })?;
            let take = (width - got).min(8 - self.bit_pos);
            let bits = (byte >> self.bit_pos) & low_mask(take);
            value |= bits << got;
            self.bit_pos += take;
            got += take;
            if self.bit_pos == 8 {
                self.byte_pos += 1;
                self.bit_pos = 0;
            }
        }
        Ok(value)
    }

    /// 読みかけのバイトを捨てて次のバイト境界に進む
    pub fn align_to_byte(&mut self) {
        if self.bit_pos > 0 {
            self.byte_pos += 1;
            self.bit_pos = 0;
        }
    }
}

/// 下位widthビットが立ったマスク（width <= 8）
fn low_mask(width: u32) -> u8 {
    ((1u16 << width) - 1) as u8
}

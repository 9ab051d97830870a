// コーデック層 - 盤面の圧縮シリアライズとテキスト変換

pub mod binary;
pub mod bits;
pub mod text;

pub use binary::{decode, decode_lenient, encode, encoded_len};
pub use bits::{BitReader, BitWriter};
pub use text::{export_base64, import_base64};

// ドメイン層 - 盤面モデルとコーデック

pub mod board;
pub mod codec;

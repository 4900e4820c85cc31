pub mod board;
pub mod timestamp;

//! teamline-ingest: decode board/task/member payloads into engine types.

pub mod types;
pub mod parsers;

pub use types::{BoardExport, RawId, RawTask, RawUser};
pub use parsers::board::{DecodedBoard, decode_board, decode_task, group_by_assignee, load_board};
pub use parsers::timestamp::parse_timestamp;

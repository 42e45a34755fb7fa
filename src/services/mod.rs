// Service exports
pub mod documents;
pub mod snapshot;

pub use documents::{parse_paragraphs, read_paragraphs};
pub use snapshot::{Snapshot, SnapshotStore};

//! Plan inputs: the editable record and its file-backed persistence

mod data;
mod store;

pub use data::InputRecord;
pub use store::{InputStore, StoreError, DEFAULT_STATE_FILE};

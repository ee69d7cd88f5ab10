// Dictionary store: the JSON file that accumulates entries across runs,
// and the dedup filter that decides which words still need generating.

pub mod dedup;
pub mod persist;

pub use dedup::{filter_remaining, processed_words};
pub use persist::{append_entries, read_store, StoreContents};

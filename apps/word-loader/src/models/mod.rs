pub mod entry;

pub use entry::ValidatedEntry;

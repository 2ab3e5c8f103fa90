//! Storage layer.

pub mod ledger_store;
pub mod store;

pub use ledger_store::LedgerStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Storage keys as constants.
pub mod keys {
    /// Key holding the serialized workout ledger.
    pub const WORKOUTS: &str = "workout";
}

//! SnapStore - named snapshot persistence
//!
//! Stores serializable values as named JSON snapshots in a single SQLite
//! file. A caller saves a value under a name and loads it back on a later
//! run; each save overwrites the previous value for that name.
//!
//! # Example
//!
//! ```ignore
//! use snapstore::SnapStore;
//!
//! let store = SnapStore::open("~/.local/share/recordbot/snapshots.db")?;
//! store.save("recent-records", &records)?;
//! let previous: Option<Vec<Record>> = store.load("recent-records")?;
//! ```

mod store;

pub use store::SnapStore;

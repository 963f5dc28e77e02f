//! # nestor-store
//!
//! The document store boundary. The application owns no persistence
//! mechanics; it sees collections of JSON documents behind the
//! [`DocumentStore`] trait and reads them back as validated models through
//! [`TypedStore`]. The bundled [`MemoryStore`] backs the demo server and
//! the test suites, optionally filled from a YAML seed file.

pub mod error;
pub mod memory;
pub mod seed;
pub mod store;
pub mod typed;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use seed::{apply_seed, load_seed_file, parse_seed, SeedData, SeedSummary};
pub use store::DocumentStore;
pub use typed::{
    ContactStore, CustomListItemStore, CustomListStore, MasterInterventionStore, OfferStore,
    ProjectStore, TypedStore,
};

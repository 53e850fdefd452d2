//! Roster engine: catalog HTTP client and favorites persistence.
mod client;
mod engine;
mod favorites;
mod persist;
mod types;

pub use client::{CatalogFetcher, CatalogSettings, ReqwestCatalogClient, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use favorites::FavoritesStore;
pub use persist::{ensure_store_dir, PersistError, SlotWriter};
pub use types::{EngineEvent, FailureKind, FetchError};

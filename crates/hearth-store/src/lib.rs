//! # hearth-store
//!
//! Local entity store for the Hearth data layer: the single source of truth
//! in local mode, persisted as a JSON snapshot in the platform data
//! directory and rehydrated at startup.
//!
//! The crate exposes an [`EntityStore`] handle with one typed mutation
//! function per state transition (never raw setters). Every mutation leaves
//! the store fully consistent, stamps timestamps, and writes the snapshot
//! before returning; a missing or corrupt snapshot falls back to the fixed
//! demo seed.

pub mod select;
pub mod store;

mod events;
mod families;
mod friends;
mod seed;
mod snapshot;
mod tasks;
mod users;
mod wishlist;

pub use snapshot::SnapshotPayload;
pub use store::EntityStore;

//! # hearth-shared
//!
//! Entity types, id newtypes, error taxonomy and the REST wire contract
//! shared between the local entity store and the data access layer.
//!
//! Every struct derives `Serialize`/`Deserialize` with snake_case field and
//! variant names so the same types work for the on-device snapshot and the
//! `{data, error}` REST envelope.

pub mod envelope;
pub mod ids;
pub mod models;

mod error;

pub use envelope::*;
pub use error::DataError;
pub use ids::*;
pub use models::*;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DataError>;

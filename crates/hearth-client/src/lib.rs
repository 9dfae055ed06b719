//! Client data layer: configuration, REST transport, the [`DataService`]
//! facade over local and remote backends, the query cache, and the
//! per-feature hooks the UI consumes.

pub mod api;
pub mod config;
pub mod hooks;
pub mod query;
pub mod service;

pub use config::{AppConfig, Mode};
pub use query::{QueryCache, QueryKey};
pub use service::DataService;

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Call once at startup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hearth_client=debug,hearth_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

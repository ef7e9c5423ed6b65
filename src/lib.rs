//! Library core for slowserve.

// --- Modules ---
pub mod api;
pub mod config;
pub mod error;
pub mod worker;

pub mod prelude {
    // Config
    pub use crate::config::{Settings, SlowRouteConfig};

    // Server
    pub use crate::api::server::{build_app, run_server};
    pub use crate::api::slow::SlowRoute;

    // Workers
    pub use crate::worker::{
        AbortHandle, AbortSignal, CachingLibrary, MessageOutcome, ServiceWorker, WorkerConfig,
        WorkerHost, WorkerMessage, WorkerVariant,
    };

    // Errors
    pub use crate::error::{ServeError, WorkerError};
}

//! Service worker model.
//!
//! A worker is installed from a [`variant::WorkerConfig`]: it optionally loads the
//! caching library, registers one route with it and then listens for messages
//! from its controlling page.

pub mod abort;
pub mod handler;
pub mod host;
pub mod message;
pub mod strategy;
pub mod variant;

pub use abort::{AbortHandle, AbortSignal};
pub use handler::{MessageOutcome, ServiceWorker};
pub use host::WorkerHost;
pub use message::WorkerMessage;
pub use strategy::{CachingLibrary, RouteRegistration, StrategyKind};
pub use variant::{RouteConfig, WorkerConfig, WorkerVariant};

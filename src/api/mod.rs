//! HTTP surface: the static file server and its slow endpoint.

pub mod server;
pub mod slow;

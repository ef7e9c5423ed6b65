// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors surfaced by the server binary. File serving failures never reach
/// here; the static file collaborator answers those itself.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to load or parse configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Invalid route pattern `{pattern}`: {source}")]
    InvalidRoutePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid route method: {0}")]
    InvalidRouteMethod(String),
    #[error("Fetch aborted")]
    FetchAborted,
}

// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Abort handle shared between a worker's message listener and the caching
//! strategy it registers.
//!
//! The handle owns the right to abort; the strategy only ever sees an
//! [`AbortSignal`]. Aborting is one-way and idempotent.

use std::future::Future;
use tokio_util::sync::CancellationToken;

use crate::error::WorkerError;

#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    token: CancellationToken,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            token: self.token.clone(),
        }
    }

    /// Cancels every fetch bound to this handle's signal.
    pub fn abort(&self) {
        self.token.cancel();
    }

    pub fn is_aborted(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Clone)]
pub struct AbortSignal {
    token: CancellationToken,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the owning handle aborts.
    pub async fn aborted(&self) {
        self.token.cancelled().await
    }

    /// Runs `fetch` until it completes or the signal fires, whichever is first.
    pub async fn bind<F>(&self, fetch: F) -> Result<F::Output, WorkerError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(WorkerError::FetchAborted),
            output = fetch => Ok(output),
        }
    }
}

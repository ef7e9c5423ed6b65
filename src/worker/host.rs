// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[cfg(test)]
use mockall::automock;

/// Lifecycle hooks the browser-like host exposes to a worker.
#[cfg_attr(test, automock)]
pub trait WorkerHost: Send + Sync {
    /// Promotes the installing worker to active without waiting for existing
    /// pages to close.
    fn skip_waiting(&self);
}

// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages a controlling page posts to its worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WorkerMessage {
    SkipWaiting,
    AbortConnections,
}

impl WorkerMessage {
    /// Reads a message out of a raw payload. Empty payloads, payloads without a
    /// `type` and unknown types all yield `None`.
    pub fn from_payload(payload: Option<&Value>) -> Option<Self> {
        let payload = payload.filter(|value| value.is_object())?;
        serde_json::from_value(payload.clone()).ok()
    }
}

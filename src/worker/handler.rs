// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use chrono::Utc;
use log::{debug, info};
use serde_json::Value;

use crate::error::WorkerError;
use crate::worker::abort::AbortHandle;
use crate::worker::host::WorkerHost;
use crate::worker::message::WorkerMessage;
use crate::worker::strategy::CachingLibrary;
use crate::worker::variant::WorkerConfig;

/// What a single inbound message did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    SkippedWaiting,
    Aborted,
    Ignored,
}

/// An installed worker: the one message listener registered at load time.
pub struct ServiceWorker<H: WorkerHost> {
    host: H,
    abort: Option<AbortHandle>,
}

impl<H: WorkerHost> ServiceWorker<H> {
    /// Runs the worker's load-time steps against `library` and returns its
    /// message listener.
    pub fn install<L>(config: &WorkerConfig, host: H, library: &mut L) -> Result<Self, WorkerError>
    where
        L: CachingLibrary + ?Sized,
    {
        if let Some(url) = &config.library_url {
            library.import_scripts(url);
        }

        let abort = config.abort_supported.then(AbortHandle::new);

        if let Some(route) = &config.route {
            let registration = route.registration(abort.as_ref().map(AbortHandle::signal))?;
            debug!(
                "Registering {} route {} for {}",
                registration.strategy.library_name(),
                registration.pattern,
                registration.method
            );
            library.register_route(registration);
        }

        Ok(Self { host, abort })
    }

    pub fn abort_handle(&self) -> Option<&AbortHandle> {
        self.abort.as_ref()
    }

    pub fn handle_message(&self, payload: Option<&Value>) -> MessageOutcome {
        match WorkerMessage::from_payload(payload) {
            Some(WorkerMessage::SkipWaiting) => {
                info!("trigger skipWaiting at {}", Utc::now().timestamp_millis());
                self.host.skip_waiting();
                MessageOutcome::SkippedWaiting
            }
            Some(WorkerMessage::AbortConnections) => match &self.abort {
                Some(handle) => {
                    handle.abort();
                    MessageOutcome::Aborted
                }
                None => {
                    debug!("abort-connections ignored: worker has no abort handle");
                    MessageOutcome::Ignored
                }
            },
            None => {
                debug!("Ignoring worker message: {:?}", payload);
                MessageOutcome::Ignored
            }
        }
    }
}

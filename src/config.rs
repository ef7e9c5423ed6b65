// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ServeError;

pub const DEFAULT_PORT: u16 = 8345;
pub const DEFAULT_SLOW_SUFFIX: &str = "/slow.json";
pub const DEFAULT_SLOW_DELAY_MS: u64 = 4000;
pub const DEFAULT_SLOW_BODY: &str = "{}";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory handed to the static file collaborator.
    pub root: PathBuf,
    pub index_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlowRouteConfig {
    /// Requests whose target ends with this suffix are delayed.
    pub suffix: String,
    pub delay_ms: u64,
    pub body: String,
}

impl SlowRouteConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerConfig,
    pub slow: SlowRouteConfig,
    pub log: LogConfig,
}

impl Settings {
    pub fn new(config_path: Option<&str>) -> Result<Self, ServeError> {
        let mut config_builder = config::Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.root", ".")?
            .set_default("server.index_file", "index.html")?

            // Slow route defaults
            .set_default("slow.suffix", DEFAULT_SLOW_SUFFIX)?
            .set_default("slow.delay_ms", DEFAULT_SLOW_DELAY_MS as i64)?
            .set_default("slow.body", DEFAULT_SLOW_BODY)?

            // Log defaults
            .set_default("log.level", "info")?;

        if let Some(path) = config_path {
            config_builder = config_builder.add_source(File::with_name(path));
        }

        // e.g. `SLOWSERVE_SLOW__DELAY_MS=250` would override `slow.delay_ms`
        config_builder = config_builder.add_source(
            Environment::with_prefix("SLOWSERVE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .ignore_empty(true)
        );

        Ok(config_builder.build()?.try_deserialize()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
            index_file: "index.html".to_string(),
        }
    }
}

impl Default for SlowRouteConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SLOW_SUFFIX.to_string(),
            delay_ms: DEFAULT_SLOW_DELAY_MS,
            body: DEFAULT_SLOW_BODY.to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_string() }
    }
}

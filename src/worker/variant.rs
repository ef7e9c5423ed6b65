// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Worker configurations.
//!
//! The demo ships three workers that differ only in the route they hand to the
//! caching library and whether they can abort in-flight fetches. Each one is a
//! [`WorkerConfig`] preset.

use actix_web::http::Method;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WorkerError;
use crate::worker::abort::AbortSignal;
use crate::worker::strategy::{RouteRegistration, StrategyKind};

pub const WORKBOX_URL: &str = "https://storage.googleapis.com/workbox-cdn/releases/4.3.1/workbox-sw.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerVariant {
    /// No caching library, skip-waiting only.
    Normal,
    /// Stale-while-revalidate on `.json` requests, no way to abort them.
    Stuck,
    /// Stale-while-revalidate on everything, abortable.
    Solution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub pattern: String,
    pub strategy: StrategyKind,
    #[serde(default = "default_method")]
    pub method: String,
}

fn default_method() -> String {
    Method::GET.to_string()
}

impl RouteConfig {
    pub fn registration(&self, fetch_signal: Option<AbortSignal>) -> Result<RouteRegistration, WorkerError> {
        let pattern = Regex::new(&self.pattern).map_err(|source| WorkerError::InvalidRoutePattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        let method = Method::from_str(&self.method.to_ascii_uppercase())
            .map_err(|_| WorkerError::InvalidRouteMethod(self.method.clone()))?;

        Ok(RouteRegistration {
            pattern,
            strategy: self.strategy,
            method,
            fetch_signal,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    #[serde(default)]
    pub library_url: Option<String>,
    #[serde(default)]
    pub route: Option<RouteConfig>,
    #[serde(default)]
    pub abort_supported: bool,
}

impl WorkerConfig {
    pub fn preset(variant: WorkerVariant) -> Self {
        match variant {
            WorkerVariant::Normal => Self {
                library_url: None,
                route: None,
                abort_supported: false,
            },
            WorkerVariant::Stuck => Self {
                library_url: Some(WORKBOX_URL.to_string()),
                route: Some(RouteConfig {
                    pattern: r"\.json".to_string(),
                    strategy: StrategyKind::StaleWhileRevalidate,
                    method: default_method(),
                }),
                abort_supported: false,
            },
            WorkerVariant::Solution => Self {
                library_url: Some(WORKBOX_URL.to_string()),
                route: Some(RouteConfig {
                    pattern: ".*".to_string(),
                    strategy: StrategyKind::StaleWhileRevalidate,
                    method: default_method(),
                }),
                abort_supported: true,
            },
        }
    }
}

impl From<WorkerVariant> for WorkerConfig {
    fn from(variant: WorkerVariant) -> Self {
        WorkerConfig::preset(variant)
    }
}

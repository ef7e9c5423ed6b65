// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use actix_web::http::Method;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::worker::abort::AbortSignal;

/// Caching strategies the third-party library can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    StaleWhileRevalidate,
}

impl StrategyKind {
    /// Name of the strategy class in the library's `strategies` namespace.
    pub fn library_name(&self) -> &'static str {
        match self {
            StrategyKind::StaleWhileRevalidate => "StaleWhileRevalidate",
        }
    }
}

/// A route as handed to the library: pattern, strategy and optional fetch
/// signal the strategy should pass to every network request it makes.
#[derive(Debug, Clone)]
pub struct RouteRegistration {
    pub pattern: Regex,
    pub strategy: StrategyKind,
    pub method: Method,
    pub fetch_signal: Option<AbortSignal>,
}

impl RouteRegistration {
    /// Unanchored search, the way the library applies route regexes.
    pub fn matches(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }
}

/// The opaque caching library a worker loads at registration time.
pub trait CachingLibrary {
    fn import_scripts(&mut self, url: &str);
    fn register_route(&mut self, route: RouteRegistration);
}

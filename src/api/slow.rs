// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Delay injection for the slow endpoint.
//!
//! Any request whose target ends with the configured suffix is held for a fixed
//! delay and answered with a fixed body. Everything else passes straight through
//! to the static file service.

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    web::Data,
    Error as ActixError, HttpResponse,
};
use actix_web_lab::middleware::Next;
use log::debug;
use std::time::Duration;

use crate::config::SlowRouteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlowRoute {
    suffix: String,
    delay: Duration,
    body: String,
}

impl SlowRoute {
    pub fn new(suffix: impl Into<String>, delay: Duration, body: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            delay,
            body: body.into(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Suffix test against the raw request target, query string included.
    pub fn matches(&self, target: &str) -> bool {
        target.ends_with(&self.suffix)
    }

    async fn respond(&self) -> HttpResponse {
        tokio::time::sleep(self.delay).await;
        HttpResponse::Ok().body(self.body.clone())
    }
}

impl From<&SlowRouteConfig> for SlowRoute {
    fn from(config: &SlowRouteConfig) -> Self {
        SlowRoute::new(config.suffix.clone(), config.delay(), config.body.clone())
    }
}

fn request_target(req: &ServiceRequest) -> &str {
    req.uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path())
}

/// Middleware holding back requests that match the app's [`SlowRoute`].
///
/// Apps without a `SlowRoute` in their data are passed through untouched.
pub async fn delay_slow_requests<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, ActixError> {
    let route = req
        .app_data::<Data<SlowRoute>>()
        .filter(|route| route.matches(request_target(&req)))
        .cloned();

    match route {
        Some(route) => {
            debug!("Delaying {} by {:?}", req.path(), route.delay());
            let response = route.respond().await;
            Ok(req.into_response(response).map_into_right_body())
        }
        None => Ok(next.call(req).await?.map_into_left_body()),
    }
}

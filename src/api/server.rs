// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::Data,
    App, HttpServer,
};
use actix_web_lab::middleware::from_fn as mw_from_fn;
use log::info;

use crate::api::slow::{delay_slow_requests, SlowRoute};
use crate::config::Settings;

/// Builds the application: slow route first, then the current directory served
/// by `actix-files`.
pub fn build_app(
    settings: &Settings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let slow_route = Data::new(SlowRoute::from(&settings.slow));
    let root = settings.server.root.clone();
    let index_file = settings.server.index_file.clone();

    App::new()
        .app_data(slow_route)
        .wrap(mw_from_fn(delay_slow_requests))
        .service(Files::new("/", root).index_file(index_file))
}

pub async fn run_server(settings: Settings) -> std::io::Result<()> {
    let bind_address = (settings.server.host.clone(), settings.server.port);
    let server = HttpServer::new(move || build_app(&settings).wrap(Logger::default()))
        .bind(bind_address.clone())?;

    info!("Listening on http://localhost:{}", bind_address.1);
    server.run().await
}

// Copyright (c) 2025 TexasFortress.AI
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Slow static file server.
//!
//! Serves the current directory on port 8345. Any request ending in
//! `/slow.json` is answered with `{}` after four seconds.
//!
//! Usage:
//!   slowserve                          # Serve `.` on 0.0.0.0:8345
//!   slowserve --config slowserve.toml  # Layer a TOML file over the defaults
//!   slowserve --port 9000 --root demo  # Override the port and served directory

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::exit;

use slowserve::api::server::run_server;
use slowserve::config::Settings;
use slowserve::error::ServeError;

#[derive(Parser)]
#[command(name = "slowserve", about = "Static file server with a deliberately slow endpoint")]
struct Cli {
    /// TOML file layered over the built-in defaults
    #[arg(long, env = "SLOWSERVE_CONFIG")]
    config: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Directory to serve
    #[arg(long)]
    root: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> Result<(), ServeError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::new(cli.config.as_deref()).unwrap_or_else(|err| {
        eprintln!("{}", err);
        exit(1);
    });
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(root) = cli.root {
        settings.server.root = root;
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log.level.as_str())).init();

    run_server(settings).await?;
    Ok(())
}

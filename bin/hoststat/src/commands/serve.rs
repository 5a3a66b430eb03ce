// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `hoststat serve` command: run the status and redirect listeners.

use status_server::ServerConfig;
use std::net::SocketAddr;

pub async fn execute(
    mut config: ServerConfig,
    listen: Option<SocketAddr>,
    redirect_listen: Option<SocketAddr>,
    no_redirect: bool,
) -> anyhow::Result<()> {
    if let Some(addr) = listen {
        config.listen = addr;
    }
    if redirect_listen.is_some() {
        config.redirect_listen = redirect_listen;
    }
    if no_redirect {
        config.redirect_listen = None;
    }

    tracing::info!(
        listen = %config.listen,
        tls = config.tls.is_some(),
        redirect = ?config.redirect_listen,
        "starting hoststat"
    );

    status_server::serve(config).await?;
    Ok(())
}

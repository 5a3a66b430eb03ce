// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `hoststat config` command: print the effective configuration.

use status_server::ServerConfig;

pub fn execute(config: &ServerConfig) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::warn!("{e}");
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::Client;
use tracing::{error, info};

use sm_installer::config::Settings;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!(
        "Start install process, version: {}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(err) = run().await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env().context("during parse env")?;

    let client = Client::try_default()
        .await
        .context("during get k8s client")?;

    sm_installer::install(client, &settings).await
}

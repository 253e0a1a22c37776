// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequential orchestration of the three provisioning steps.

use anyhow::{Context, Result};
use kube::Client;
use tracing::info;

use crate::config::Settings;
use crate::steps::{
    create_credentials_secret, provision_service_instance, register_addon_repository,
};

/// Run the full install sequence: credentials secret, addon repository
/// registration, service instance. The first failing step aborts the rest.
pub async fn install(client: Client, settings: &Settings) -> Result<()> {
    info!("Create secret");
    create_credentials_secret(
        &client,
        &settings.namespace,
        &settings.username,
        &settings.password,
    )
    .await
    .context("during creating secret")?;

    info!("Create ClusterAddonsConfiguration");
    register_addon_repository(&client, &settings.addon_path)
        .await
        .context("during creating ClusterAddonsConfiguration")?;

    info!("Create ServiceInstance");
    provision_service_instance(&client, &settings.namespace, &settings.service_manager_url)
        .await
        .context("during creating ServiceInstance")?;

    info!("Connection with ServiceManager is ready");
    Ok(())
}

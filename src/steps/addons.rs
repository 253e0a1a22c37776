// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registration of the addon repository via a ClusterAddonsConfiguration.

use crate::constants::{poll, CLUSTER_ADDONS_CONFIGURATION_NAME};
use crate::error::Result;
use crate::poll::poll_until;
use crate::types::{ClusterAddonsConfiguration, ClusterAddonsConfigurationSpec, SpecRepository};
use kube::{api::PostParams, Api, Client};
use std::time::Duration;
use tracing::info;

/// Register the addon repository and wait for the addons controller to
/// report it ready.
///
/// The configuration is processed asynchronously by a separate controller, so
/// readiness is observed by polling the object's status. A poll past its
/// deadline is logged but not surfaced as an error; the installer proceeds.
pub async fn register_addon_repository(client: &Client, addon_path: &str) -> Result<()> {
    let configurations: Api<ClusterAddonsConfiguration> = Api::all(client.clone());

    let configuration = ClusterAddonsConfiguration::new(
        CLUSTER_ADDONS_CONFIGURATION_NAME,
        ClusterAddonsConfigurationSpec {
            repositories: vec![SpecRepository {
                url: addon_path.to_string(),
            }],
        },
    );

    configurations
        .create(&PostParams::default(), &configuration)
        .await?;

    poll_until(
        "ClusterAddonsConfiguration",
        Duration::from_secs(poll::INTERVAL_SECS),
        Duration::from_secs(poll::ADDONS_DEADLINE_SECS),
        || {
            let configurations = configurations.clone();
            async move {
                let configuration = configurations.get(CLUSTER_ADDONS_CONFIGURATION_NAME).await?;
                if configuration.has_ready_repository() {
                    return Ok(true);
                }
                info!("ClusterAddonsConfiguration is not ready, retry...");
                Ok(false)
            }
        },
    )
    .await;

    Ok(())
}

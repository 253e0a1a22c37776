// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provisioning of the broker proxy service instance.

use crate::constants::{
    poll, CLUSTER_SERVICE_CLASS, CLUSTER_SERVICE_PLAN, SECRET_NAME, SERVICE_INSTANCE_NAME,
};
use crate::error::Result;
use crate::poll::poll_until;
use crate::types::{ServiceInstance, ServiceInstanceSpec};
use kube::{api::PostParams, Api, Client};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Parameters document passed to the broker, referencing the credentials
/// secret and the service-manager URL.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InstanceParameters<'a> {
    config: ParametersConfig<'a>,
    secret_name: &'a str,
}

#[derive(Serialize)]
struct ParametersConfig<'a> {
    sm: ServiceManagerConfig<'a>,
}

#[derive(Serialize)]
struct ServiceManagerConfig<'a> {
    url: &'a str,
}

fn build_parameters(service_manager_url: &str) -> Result<serde_json::Value> {
    let parameters = InstanceParameters {
        config: ParametersConfig {
            sm: ServiceManagerConfig {
                url: service_manager_url,
            },
        },
        secret_name: SECRET_NAME,
    };
    Ok(serde_json::to_value(parameters)?)
}

/// Create the broker proxy service instance and wait for its Ready condition.
///
/// Same convergence policy as the addons registration: fetch errors during
/// polling are swallowed, and an elapsed deadline is logged but not fatal.
pub async fn provision_service_instance(
    client: &Client,
    namespace: &str,
    service_manager_url: &str,
) -> Result<()> {
    let instances: Api<ServiceInstance> = Api::namespaced(client.clone(), namespace);

    let instance = ServiceInstance::new(
        SERVICE_INSTANCE_NAME,
        ServiceInstanceSpec {
            cluster_service_class_external_name: Some(CLUSTER_SERVICE_CLASS.to_string()),
            cluster_service_plan_external_name: Some(CLUSTER_SERVICE_PLAN.to_string()),
            parameters: Some(build_parameters(service_manager_url)?),
        },
    );

    instances.create(&PostParams::default(), &instance).await?;

    poll_until(
        "ServiceInstance",
        Duration::from_secs(poll::INTERVAL_SECS),
        Duration::from_secs(poll::INSTANCE_DEADLINE_SECS),
        || {
            let instances = instances.clone();
            async move {
                let instance = instances.get(SERVICE_INSTANCE_NAME).await?;
                if instance.is_ready() {
                    return Ok(true);
                }
                info!("ServiceInstance is not ready, retry...");
                Ok(false)
            }
        },
    )
    .await;

    Ok(())
}

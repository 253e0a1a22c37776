// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
#[kube(
    group = "addons.kyma-project.io",
    version = "v1alpha1",
    kind = "ClusterAddonsConfiguration",
    plural = "clusteraddonsconfigurations"
)]
#[kube(status = "ClusterAddonsConfigurationStatus")]
#[serde(rename_all = "camelCase")]
pub struct ClusterAddonsConfigurationSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<SpecRepository>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct SpecRepository {
    pub url: String,
}

impl ClusterAddonsConfiguration {
    /// Check if any registered repository has converged to the Ready state
    pub fn has_ready_repository(&self) -> bool {
        self.status.as_ref().is_some_and(|s| {
            s.repositories
                .iter()
                .any(|r| r.status == RepositoryStatus::Ready)
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAddonsConfigurationStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<StatusRepository>,
}

#[derive(Serialize, Deserialize, Clone, Debug, schemars::JsonSchema)]
pub struct StatusRepository {
    pub url: String,
    pub status: RepositoryStatus,
}

/// Per-repository fetch state reported by the addons controller
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum RepositoryStatus {
    Pending,
    Ready,
    Failed,
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the secret holding the service-manager credentials
pub const SECRET_NAME: &str = "service-manager-credentials";

/// Name of the cluster-scoped addons configuration registering the broker proxy repository
pub const CLUSTER_ADDONS_CONFIGURATION_NAME: &str = "broker-proxy-k8s-addon";

/// Name of the provisioned broker proxy service instance
pub const SERVICE_INSTANCE_NAME: &str = "service-broker-proxy-k8s";

/// External name of the cluster service class the instance binds to
pub const CLUSTER_SERVICE_CLASS: &str = "service-broker-proxy-k8s";

/// External name of the cluster service plan the instance binds to
pub const CLUSTER_SERVICE_PLAN: &str = "default";

/// Readiness polling configuration
pub mod poll {
    /// Seconds between readiness checks
    pub const INTERVAL_SECS: u64 = 5;
    /// Deadline in seconds for the ClusterAddonsConfiguration to become ready
    pub const ADDONS_DEADLINE_SECS: u64 = 120;
    /// Deadline in seconds for the ServiceInstance to become ready
    pub const INSTANCE_DEADLINE_SECS: u64 = 60;
}

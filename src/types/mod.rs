// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod addons;
pub mod service_catalog;

pub use addons::{ClusterAddonsConfiguration, ClusterAddonsConfigurationSpec, SpecRepository};
pub use service_catalog::{ServiceInstance, ServiceInstanceSpec};

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The three provisioning steps, in execution order.

pub mod addons;
pub mod secret;
pub mod service_instance;

pub use addons::register_addon_repository;
pub use secret::create_credentials_secret;
pub use service_instance::provision_service_instance;

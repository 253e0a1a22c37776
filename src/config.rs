// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

/// Installer settings loaded from environment variables.
///
/// Absent variables yield empty strings; no further validation is applied.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Target namespace for the credentials secret and the service instance
    pub namespace: String,
    /// URL of the addon repository to register
    pub addon_path: String,
    /// Service-manager credential username
    pub username: String,
    /// Service-manager credential password
    pub password: String,
    /// Service-manager URL passed as a service instance parameter
    pub service_manager_url: String,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Settings {
            namespace: var_or_empty("NAMESPACE")?,
            addon_path: var_or_empty("ADDON_PATH")?,
            username: var_or_empty("SM_USER")?,
            password: var_or_empty("SM_PASSWORD")?,
            service_manager_url: var_or_empty("SM_URL")?,
        })
    }
}

fn var_or_empty(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("reading {} environment variable", name)),
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creation of the service-manager credentials secret.

use crate::constants::SECRET_NAME;
use crate::error::Result;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;

/// Create the credentials secret in the target namespace.
///
/// The secret is expected to be absent; an existing secret with the same name
/// makes the create request fail with a conflict.
pub async fn create_credentials_secret(
    client: &Client,
    namespace: &str,
    username: &str,
    password: &str,
) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    let mut data = BTreeMap::new();
    data.insert(
        "username".to_string(),
        ByteString(username.as_bytes().to_vec()),
    );
    data.insert(
        "password".to_string(),
        ByteString(password.as_bytes().to_vec()),
    );

    let secret = Secret {
        metadata: ObjectMeta {
            name: Some(SECRET_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    };

    secrets.create(&PostParams::default(), &secret).await?;

    Ok(())
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request seen by the mock, in arrival order.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

type ResponseQueue = VecDeque<(u16, String)>;

/// A mock HTTP service that returns predefined responses based on request
/// method and path, and records every request it sees.
///
/// Responses registered for the same method and path form a queue; each is
/// consumed once, and the last one repeats for all further requests. That
/// models an object whose status converges over successive polls.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), ResponseQueue>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.queue("GET", path, status, body);
        self
    }

    /// Queue a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.queue("POST", path, status, body);
        self
    }

    /// Handle to the request log, for asserting call order and counts
    pub fn requests(&self) -> Arc<Mutex<Vec<RecordedRequest>>> {
        self.requests.clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn queue(&self, method: &str, path: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&(method.to_string(), path.to_string()))?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let service = self.clone();

        Box::pin(async move {
            let body = req
                .into_body()
                .collect()
                .await
                .map(|collected| collected.to_bytes().to_vec())
                .unwrap_or_default();

            service.requests.lock().unwrap().push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                body,
            });

            match service.next_response(&method, &path) {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create a secret JSON response as returned by a successful create
pub fn secret_json(namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {
            "name": crate::constants::SECRET_NAME,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "data": {
            "username": "dQ==",
            "password": "cA=="
        }
    })
    .to_string()
}

/// Create a ClusterAddonsConfiguration JSON response. `repository_status`
/// of None omits the status block, as right after creation.
pub fn addons_configuration_json(repository_status: Option<&str>) -> String {
    let mut object = serde_json::json!({
        "apiVersion": "addons.kyma-project.io/v1alpha1",
        "kind": "ClusterAddonsConfiguration",
        "metadata": {
            "name": crate::constants::CLUSTER_ADDONS_CONFIGURATION_NAME,
            "uid": "test-uid"
        },
        "spec": {
            "repositories": [
                {"url": "https://example/index.yaml"}
            ]
        }
    });

    if let Some(status) = repository_status {
        object["status"] = serde_json::json!({
            "repositories": [
                {"url": "https://example/index.yaml", "status": status}
            ]
        });
    }

    object.to_string()
}

/// Create a ServiceInstance JSON response. `condition` of None omits the
/// status block, as right after creation.
pub fn service_instance_json(condition: Option<(&str, &str)>) -> String {
    let mut object = serde_json::json!({
        "apiVersion": "servicecatalog.k8s.io/v1beta1",
        "kind": "ServiceInstance",
        "metadata": {
            "name": crate::constants::SERVICE_INSTANCE_NAME,
            "namespace": "kyma-system",
            "uid": "test-uid"
        },
        "spec": {
            "clusterServiceClassExternalName": crate::constants::CLUSTER_SERVICE_CLASS,
            "clusterServicePlanExternalName": crate::constants::CLUSTER_SERVICE_PLAN
        }
    });

    if let Some((condition_type, status)) = condition {
        object["status"] = serde_json::json!({
            "conditions": [
                {"type": condition_type, "status": status}
            ]
        });
    }

    object.to_string()
}

/// Create a 409 conflict response for an already existing resource
pub fn conflict_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" already exists", resource, name),
        "reason": "AlreadyExists",
        "code": 409
    })
    .to_string()
}

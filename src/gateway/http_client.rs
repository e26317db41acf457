use reqwest::StatusCode;
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{GatewayError, RemoteCatalogGateway};

impl RemoteCatalogGateway {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn send(
        &self,
        req: RequestBuilder,
        label: &'static str,
    ) -> Result<Response, GatewayError> {
        tracing::debug!(label, "catalog request");
        req.send()
            .map_err(|source| GatewayError::Transport { label, source })
    }

    pub(super) fn ensure_ok(
        &self,
        resp: Response,
        label: &'static str,
    ) -> Result<Response, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(GatewayError::Status {
            label,
            status,
            body,
        })
    }

    /// Deletes are idempotent: a missing row is as good as a removed one.
    pub(super) fn ensure_deleted(
        &self,
        resp: Response,
        label: &'static str,
    ) -> Result<(), GatewayError> {
        if resp.status() == StatusCode::NOT_FOUND {
            tracing::debug!(label, "already absent on server");
            return Ok(());
        }
        self.ensure_ok(resp, label).map(|_| ())
    }

    pub(super) fn decode<T: DeserializeOwned>(
        &self,
        resp: Response,
        label: &'static str,
    ) -> Result<T, GatewayError> {
        resp.json()
            .map_err(|source| GatewayError::Decode { label, source })
    }
}

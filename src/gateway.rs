//! Request/response access to the remote catalog API.
//!
//! Every call is one independent HTTP round trip: nothing is cached, batched
//! or retried. [`CatalogGateway`] is the seam the view state talks to;
//! [`RemoteCatalogGateway`] is the HTTP implementation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::{ContentId, ContentItem, Creator, CreatorId};

mod contents;
mod creators;
mod files;
mod http_client;
mod types;

pub use self::files::media_type_for;
pub use self::types::UpdateContentRequest;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{label}: request failed: {source}")]
    Transport {
        label: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: unexpected status {status}")]
    Status {
        label: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{label}: could not parse response: {source}")]
    Decode {
        label: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("local file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait CatalogGateway {
    /// Base address, always ending in `/`.
    fn base_url(&self) -> &str;

    fn list_creators(&self) -> Result<Vec<Creator>, GatewayError>;

    fn create_creator(&self, name: &str) -> Result<Creator, GatewayError>;

    /// Succeeds when the server confirms the delete or reports the creator as absent.
    fn delete_creator(&self, id: CreatorId) -> Result<(), GatewayError>;

    fn list_content_by_creator(&self, id: CreatorId) -> Result<Vec<ContentItem>, GatewayError>;

    fn count_content_by_creator(&self, id: CreatorId) -> Result<usize, GatewayError> {
        self.list_content_by_creator(id).map(|items| items.len())
    }

    fn create_content(
        &self,
        title: &str,
        kind: &str,
        creator: CreatorId,
    ) -> Result<ContentItem, GatewayError>;

    /// Partial update. Blank or whitespace-only fields are left out of the request.
    fn update_content(
        &self,
        id: ContentId,
        title: Option<&str>,
        kind: Option<&str>,
    ) -> Result<ContentItem, GatewayError>;

    /// Succeeds when the server confirms the delete or reports the item as absent.
    fn delete_content(&self, id: ContentId) -> Result<(), GatewayError>;

    fn upload_file(&self, id: ContentId, path: &Path) -> Result<(), GatewayError>;

    fn download_url(&self, file_path: &str) -> String {
        format!(
            "{}api/arquivos/download/{}",
            self.base_url(),
            file_path.trim_start_matches('/')
        )
    }
}

pub struct RemoteCatalogGateway {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteCatalogGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base_url = normalize_base_url(base_url)?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("catalog/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Client)?;
        Ok(Self { base_url, client })
    }
}

/// Validate `raw` as an http(s) URL and make sure it ends with `/` so API
/// paths can be appended directly.
pub fn normalize_base_url(raw: &str) -> Result<String, GatewayError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| GatewayError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }
    let mut s = url.to_string();
    if !s.ends_with('/') {
        s.push('/');
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:5011").unwrap(),
            "http://localhost:5011/"
        );
        assert_eq!(
            normalize_base_url(" http://host/prefix ").unwrap(),
            "http://host/prefix/"
        );
        assert_eq!(
            normalize_base_url("https://host/prefix/").unwrap(),
            "https://host/prefix/"
        );
    }

    #[test]
    fn base_url_rejects_non_http() {
        assert!(matches!(
            normalize_base_url("ftp://host/"),
            Err(GatewayError::InvalidBaseUrl { .. })
        ));
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("http://host/?a=1").is_err());
    }

    #[test]
    fn download_url_joins_relative_path() {
        let gw = RemoteCatalogGateway::new("http://localhost:5011", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            gw.download_url("/3_clip.mp4"),
            "http://localhost:5011/api/arquivos/download/3_clip.mp4"
        );
    }
}

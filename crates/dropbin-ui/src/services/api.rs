//! HTTP client for the page's delete endpoint.

use anyhow::Result;
use dropbin_api_models::DeleteResponse;
use gloo_net::http::Request;

use crate::logic::build_delete_path;

/// Thin wrapper over the host's REST surface.
#[derive(Clone, Debug, Default)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Issues the delete call for a single stored file.
    ///
    /// The marker headers let the server answer with JSON instead of a
    /// redirect.
    pub(crate) async fn delete_file(&self, filename: &str) -> Result<DeleteResponse> {
        let mut req = Request::post(&self.url(&build_delete_path(filename)));
        req = req.header("Content-Type", "application/json");
        req = req.header("X-Requested-With", "XMLHttpRequest");
        Ok(req.send().await?.json::<DeleteResponse>().await?)
    }
}

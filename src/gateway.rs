//! HTTP gateway for the remote post list.
//!
//! [`PostList`](crate::PostList) fetches through the [`PostsGateway`] trait
//! so tests can substitute a mock that never touches the network. The
//! production implementation, [`HttpPostsGateway`], issues a single GET
//! against a JSON list-of-posts endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default endpoint for [`HttpPostsGateway`].
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// One item of fetched list data, identified by `id`, displayed by `title`.
///
/// Response objects may carry additional fields; only these two are kept.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
}

/// Errors surfaced by a posts fetch.
///
/// Field payloads are owned strings so the error can travel through events
/// and live in component models.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS
    /// failure, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body was not a JSON array of posts.
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Read access to the remote post list.
///
/// One best-effort attempt per call: no retry, no timeout beyond the
/// client's defaults, no cancellation.
#[async_trait]
pub trait PostsGateway: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// [`PostsGateway`] implementation backed by an HTTP endpoint.
pub struct HttpPostsGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpPostsGateway {
    /// Gateway against the default endpoint, [`POSTS_URL`].
    pub fn new() -> Self {
        Self::with_url(POSTS_URL)
    }

    /// Gateway against a custom endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        HttpPostsGateway {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for HttpPostsGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostsGateway for HttpPostsGateway {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        tracing::debug!(url = %self.url, "fetching posts");

        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let posts = response
            .json::<Vec<Post>>()
            .await
            .map_err(|error| FetchError::Malformed(error.to_string()))?;

        tracing::debug!(count = posts.len(), "posts fetched");
        Ok(posts)
    }
}

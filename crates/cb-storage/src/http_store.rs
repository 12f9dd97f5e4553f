//! HTTP client for the comment service

use async_trait::async_trait;
use cb_core::comment::{Comment, CommentBody, CommentStore};
use cb_core::config::StoreConfig;
use cb_core::error::{BoardError, Result};
use cb_core::types::CommentId;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Comment store backed by a remote comment service
///
/// A 404 from `PUT`/`DELETE /comments/:id` maps to `NotFound`; any other
/// failure maps to `StoreUnavailable`.
pub struct HttpCommentStore {
    client: Client,
    base_url: String,
}

impl HttpCommentStore {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BoardError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from store configuration
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::new(&config.url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn comments_url(&self) -> String {
        format!("{}/comments", self.base_url)
    }

    fn comment_url(&self, id: CommentId) -> String {
        format!("{}/comments/{}", self.base_url, id)
    }

    /// Check that the service answers its health endpoint
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await.map_err(unavailable)?;
        check_status(resp, None).await.map(|_| ())
    }
}

fn unavailable(e: reqwest::Error) -> BoardError {
    BoardError::StoreUnavailable(e.to_string())
}

/// Map a response status to an error; `id` turns a 404 into `NotFound`
async fn check_status(resp: Response, id: Option<CommentId>) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(BoardError::NotFound(id));
    }

    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(BoardError::StoreUnavailable(format!(
        "{} returned {}: {}",
        url,
        status,
        body.trim()
    )))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>().await.map_err(unavailable)
}

#[async_trait]
impl CommentStore for HttpCommentStore {
    async fn get_all(&self) -> Result<Vec<Comment>> {
        let resp = self
            .client
            .get(self.comments_url())
            .send()
            .await
            .map_err(unavailable)?;
        decode(check_status(resp, None).await?).await
    }

    async fn create(&self, text: &str) -> Result<Comment> {
        let resp = self
            .client
            .post(self.comments_url())
            .json(&CommentBody::new(text))
            .send()
            .await
            .map_err(unavailable)?;
        let comment: Comment = decode(check_status(resp, None).await?).await?;
        debug!("Created remote comment {}", comment.id);
        Ok(comment)
    }

    async fn update(&self, id: CommentId, text: &str) -> Result<Comment> {
        let resp = self
            .client
            .put(self.comment_url(id))
            .json(&CommentBody::new(text))
            .send()
            .await
            .map_err(unavailable)?;
        decode(check_status(resp, Some(id)).await?).await
    }

    async fn delete(&self, id: CommentId) -> Result<()> {
        let resp = self
            .client
            .delete(self.comment_url(id))
            .send()
            .await
            .map_err(unavailable)?;
        check_status(resp, Some(id)).await?;
        debug!("Deleted remote comment {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let store = HttpCommentStore::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(store.base_url(), "http://localhost:3000");
        assert_eq!(store.comments_url(), "http://localhost:3000/comments");
        assert_eq!(store.comment_url(CommentId(7)), "http://localhost:3000/comments/7");
    }

    #[test]
    fn test_from_config() {
        let config = StoreConfig::default();
        let store = HttpCommentStore::from_config(&config).unwrap();
        assert_eq!(store.base_url(), config.url);
    }
}

pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Issues a GET request and yields the response body.
///
/// Non-success statuses are reported as errors so callers only ever see
/// bodies of successful responses.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

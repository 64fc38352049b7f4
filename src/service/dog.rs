use std::sync::Arc;

use tokio::sync::broadcast;

use crate::app::Result;
use crate::domain::{DogImageRef, ImageBytes};
use crate::fetcher::Fetcher;
use crate::service::counter::Counter;
use crate::service::emitter::Emitter;

pub const DEFAULT_DOG_IMAGE_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Fetches random dog pictures in two steps: the metadata envelope, then the
/// image it points at.
///
/// A failed metadata step aborts silently. A failed download still counts:
/// an empty payload is emitted in its place.
pub struct DogImageService {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    url: String,
    counter: Counter,
    images: Emitter<ImageBytes>,
}

impl DogImageService {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            counter: Counter::new(),
            images: Emitter::new(),
        }
    }

    pub async fn fetch(&self) -> Option<ImageBytes> {
        let image_ref = match self.try_fetch_ref().await {
            Ok(image_ref) => image_ref,
            Err(e) => {
                tracing::warn!("Dog metadata fetch from {} failed: {}", self.url, e);
                return None;
            }
        };

        let bytes = self.download(&image_ref).await;
        let count = self.counter.increment();
        tracing::info!("Fetched dog image #{} ({} bytes)", count, bytes.len());
        self.images.emit(bytes.clone());

        Some(bytes)
    }

    pub async fn try_fetch_ref(&self) -> Result<DogImageRef> {
        let body = self.fetcher.fetch(&self.url).await?;
        DogImageRef::from_response(&body)
    }

    async fn download(&self, image_ref: &DogImageRef) -> ImageBytes {
        match self.fetcher.fetch(image_ref.url.as_str()).await {
            Ok(body) => ImageBytes::new(body),
            Err(e) => {
                tracing::warn!("Dog image download from {} failed: {}", image_ref.url, e);
                ImageBytes::empty()
            }
        }
    }

    pub fn reset(&self) {
        self.counter.reset();
        tracing::info!("Dog counter reset");
    }

    pub fn count(&self) -> u64 {
        self.counter.get()
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ImageBytes> {
        self.images.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.images.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::app::PawfeedError;

    /// Serves canned bodies by URL; unknown URLs fail like a refused connection.
    struct StubFetcher {
        bodies: HashMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| PawfeedError::Io(std::io::ErrorKind::ConnectionRefused.into()))
        }
    }

    fn service(bodies: &[(&str, &[u8])]) -> DogImageService {
        let bodies = bodies
            .iter()
            .map(|(url, body)| (url.to_string(), body.to_vec()))
            .collect();
        DogImageService::new(Arc::new(StubFetcher { bodies }), "http://meta/random")
    }

    #[tokio::test]
    async fn test_both_steps_succeed() {
        let service = service(&[
            ("http://meta/random", br#"{"message":"http://img/x.jpg"}"#),
            ("http://img/x.jpg", b"jpegdata"),
        ]);
        let mut rx = service.subscribe();

        let bytes = service.fetch().await.unwrap();
        assert_eq!(bytes.as_slice(), b"jpegdata");
        assert_eq!(rx.recv().await.unwrap().as_slice(), b"jpegdata");
        assert_eq!(service.count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_image_counts_as_empty() {
        let service = service(&[("http://meta/random", br#"{"message":"http://img/gone.jpg"}"#)]);

        let bytes = service.fetch().await.unwrap();
        assert!(bytes.is_empty());
        assert_eq!(service.count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_metadata_aborts() {
        let service = service(&[]);
        let mut rx = service.subscribe();

        assert!(service.fetch().await.is_none());
        assert_eq!(service.count(), 0);
        assert!(rx.try_recv().is_err());
    }
}

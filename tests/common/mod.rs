#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use image::{DynamicImage, ImageFormat};
use pawfeed::config::HttpConfig;
use pawfeed::fetcher::http_fetcher::HttpFetcher;
use pawfeed::fetcher::Fetcher;
use pawfeed::service::{CatFactService, DogImageService};

pub fn fetcher() -> Arc<dyn Fetcher + Send + Sync> {
    let config = HttpConfig {
        timeout_secs: 5,
        user_agent: None,
    };
    Arc::new(HttpFetcher::new(&config).expect("client should build"))
}

pub fn cat_service(url: String) -> Arc<CatFactService> {
    Arc::new(CatFactService::new(fetcher(), url))
}

pub fn dog_service(url: String) -> Arc<DogImageService> {
    Arc::new(DogImageService::new(fetcher(), url))
}

/// A tiny but real PNG.
pub fn png_bytes() -> Vec<u8> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    DynamicImage::new_rgb8(8, 6)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("png encoding");
    buffer.into_inner()
}

/// Poll `check` until it holds or roughly a second has passed.
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

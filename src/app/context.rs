use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::service::{CatFactService, DogImageService};

/// Wires the HTTP client and both services together from a [`Config`].
pub struct AppContext {
    pub config: Arc<Config>,
    pub cats: Arc<CatFactService>,
    pub dogs: Arc<DogImageService>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let cats = Arc::new(CatFactService::new(
            fetcher.clone(),
            config.endpoints.cat_fact.clone(),
        ));
        let dogs = Arc::new(DogImageService::new(
            fetcher,
            config.endpoints.dog_image.clone(),
        ));

        Self {
            config: Arc::new(config),
            cats,
            dogs,
        }
    }
}

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::app::Result;
use crate::domain::Fact;
use crate::fetcher::Fetcher;
use crate::service::counter::Counter;
use crate::service::emitter::Emitter;

pub const DEFAULT_CAT_FACT_URL: &str = "https://catfact.ninja/fact";

/// Fetches cat facts and counts the successful ones.
pub struct CatFactService {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    url: String,
    counter: Counter,
    facts: Emitter<Fact>,
}

impl CatFactService {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
            counter: Counter::new(),
            facts: Emitter::new(),
        }
    }

    /// Fetch one fact. Failures are logged and swallowed: nothing is
    /// emitted and the counter is left alone.
    pub async fn fetch(&self) -> Option<Fact> {
        match self.try_fetch().await {
            Ok(fact) => {
                let count = self.counter.increment();
                tracing::info!("Fetched cat fact #{}", count);
                self.facts.emit(fact.clone());
                Some(fact)
            }
            Err(e) => {
                tracing::warn!("Cat fact fetch from {} failed: {}", self.url, e);
                None
            }
        }
    }

    pub async fn try_fetch(&self) -> Result<Fact> {
        let body = self.fetcher.fetch(&self.url).await?;
        Fact::from_response(&body)
    }

    pub fn reset(&self) {
        self.counter.reset();
        tracing::info!("Cat counter reset");
    }

    pub fn count(&self) -> u64 {
        self.counter.get()
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Fact> {
        self.facts.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.facts.subscriber_count()
    }
}

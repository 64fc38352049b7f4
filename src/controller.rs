use std::sync::Arc;

use image::{DynamicImage, ImageFormat};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::domain::{Fact, ImageBytes, Score, Selection};
use crate::service::{CatFactService, DogImageService};

/// Something the screen should react to.
///
/// Image payloads are decoded before they are queued; `Image(None)` is a
/// download that was counted but holds no displayable picture.
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    Fact(Fact),
    Image(Option<DogPicture>),
    Score(Score),
}

/// What the content box currently shows.
#[derive(Debug, Clone)]
pub enum Content {
    Fact(Fact),
    Image(DogPicture),
}

/// A downloaded image that decoded successfully.
#[derive(Debug, Clone)]
pub struct DogPicture {
    pub bytes: ImageBytes,
    pub format: ImageFormat,
    pub image: DynamicImage,
}

impl DogPicture {
    /// Returns `None` for payloads that are not a supported image, including
    /// the empty payload of a failed download.
    pub fn decode(bytes: ImageBytes) -> Option<Self> {
        let format = image::guess_format(bytes.as_slice()).ok()?;
        let image = image::load_from_memory_with_format(bytes.as_slice(), format).ok()?;
        Some(Self {
            bytes,
            format,
            image,
        })
    }

    pub fn describe(&self) -> String {
        format!(
            "{:?} {}x{}, {:.1} KB",
            self.format,
            self.image.width(),
            self.image.height(),
            self.bytes.len() as f64 / 1024.0
        )
    }
}

/// Glue between the two services and whatever renders the screen.
///
/// Holds the selected source and the latest displayed content and score.
/// Service emissions and counter changes arrive through a forwarding task
/// owned by the controller; dropping the controller stops that task and
/// releases every subscription it held.
pub struct ScreenController {
    cats: Arc<CatFactService>,
    dogs: Arc<DogImageService>,
    selection: Selection,
    content: Option<Content>,
    content_version: u64,
    score: Score,
    events: mpsc::UnboundedReceiver<ScreenEvent>,
    _subscription: Subscription,
}

impl ScreenController {
    /// Must be called from within a tokio runtime.
    pub fn new(cats: Arc<CatFactService>, dogs: Arc<DogImageService>) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let subscription = Subscription::spawn(&cats, &dogs, tx);

        Self {
            cats,
            dogs,
            selection: Selection::default(),
            content: None,
            content_version: 0,
            score: Score::default(),
            events,
            _subscription: subscription,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn toggle(&mut self) {
        self.selection = self.selection.toggle();
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Bumped every time the displayed content is replaced.
    pub fn content_version(&self) -> u64 {
        self.content_version
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Start a fetch on the selected service.
    ///
    /// Earlier fetches are left running; whichever completes last is shown.
    pub fn more(&self) -> JoinHandle<()> {
        tracing::debug!("More requested for {}", self.selection.title());
        match self.selection {
            Selection::Cat => {
                let cats = self.cats.clone();
                tokio::spawn(async move {
                    cats.fetch().await;
                })
            }
            Selection::Dog => {
                let dogs = self.dogs.clone();
                tokio::spawn(async move {
                    dogs.fetch().await;
                })
            }
        }
    }

    pub fn reset(&self) {
        self.cats.reset();
        self.dogs.reset();
    }

    /// Update display state from an event. Returns whether anything changed.
    pub fn apply(&mut self, event: ScreenEvent) -> bool {
        match event {
            ScreenEvent::Fact(fact) => {
                self.show(Content::Fact(fact));
                true
            }
            ScreenEvent::Image(Some(picture)) => {
                self.show(Content::Image(picture));
                true
            }
            ScreenEvent::Image(None) => false,
            ScreenEvent::Score(score) => {
                let changed = self.score != score;
                self.score = score;
                changed
            }
        }
    }

    fn show(&mut self, content: Content) {
        self.content = Some(content);
        self.content_version += 1;
    }

    /// Apply every pending event without waiting. Returns how many changed
    /// the display.
    pub fn poll_events(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(event) = self.events.try_recv() {
            if self.apply(event) {
                changed += 1;
            }
        }
        changed
    }

    /// Wait for the next event, apply it and hand it back.
    pub async fn next_event(&mut self) -> Option<ScreenEvent> {
        let event = self.events.recv().await?;
        self.apply(event.clone());
        Some(event)
    }
}

/// Owns the forwarding task; aborts it on drop.
struct Subscription {
    handle: JoinHandle<()>,
}

enum Step {
    Emit(ScreenEvent),
    Decode(ImageBytes),
    Skip,
    Stop,
}

impl Subscription {
    fn spawn(
        cats: &CatFactService,
        dogs: &DogImageService,
        tx: mpsc::UnboundedSender<ScreenEvent>,
    ) -> Self {
        let mut facts = cats.subscribe();
        let mut images = dogs.subscribe();
        let mut cat_count = cats.counter().subscribe();
        let mut dog_count = dogs.counter().subscribe();

        // Combined counts are published right away, before any change
        let _ = tx.send(ScreenEvent::Score(latest_score(&mut cat_count, &mut dog_count)));

        let handle = tokio::spawn(async move {
            loop {
                let step = tokio::select! {
                    fact = facts.recv() => forward(fact, |fact: Fact| Step::Emit(ScreenEvent::Fact(fact))),
                    image = images.recv() => forward(image, Step::Decode),
                    changed = cat_count.changed() => match changed {
                        Ok(()) => Step::Emit(ScreenEvent::Score(latest_score(&mut cat_count, &mut dog_count))),
                        Err(_) => Step::Stop,
                    },
                    changed = dog_count.changed() => match changed {
                        Ok(()) => Step::Emit(ScreenEvent::Score(latest_score(&mut cat_count, &mut dog_count))),
                        Err(_) => Step::Stop,
                    },
                };

                let event = match step {
                    Step::Emit(event) => event,
                    Step::Decode(bytes) => ScreenEvent::Image(decode_picture(bytes).await),
                    Step::Skip => continue,
                    Step::Stop => break,
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
            tracing::debug!("Screen subscription ended");
        });

        Self { handle }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn forward<T>(received: Result<T, RecvError>, step: fn(T) -> Step) -> Step {
    match received {
        Ok(value) => step(value),
        Err(RecvError::Lagged(missed)) => {
            tracing::warn!("Screen fell behind, skipped {} emissions", missed);
            Step::Skip
        }
        Err(RecvError::Closed) => Step::Stop,
    }
}

/// Runs the decode on the blocking pool.
async fn decode_picture(bytes: ImageBytes) -> Option<DogPicture> {
    let len = bytes.len();
    match tokio::task::spawn_blocking(move || DogPicture::decode(bytes)).await {
        Ok(Some(picture)) => Some(picture),
        Ok(None) => {
            tracing::debug!("Ignoring undecodable image payload ({} bytes)", len);
            None
        }
        Err(e) => {
            tracing::warn!("Image decode task failed: {}", e);
            None
        }
    }
}

fn latest_score(cats: &mut watch::Receiver<u64>, dogs: &mut watch::Receiver<u64>) -> Score {
    Score::new(*cats.borrow_and_update(), *dogs.borrow_and_update())
}

use tokio::sync::watch;

/// Per-source success counter.
///
/// Backed by a `watch` channel so any number of subscribers can observe the
/// latest value. Every mutation notifies subscribers, including a reset of a
/// counter that is already zero.
#[derive(Debug)]
pub struct Counter {
    sender: watch::Sender<u64>,
}

impl Counter {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    pub fn get(&self) -> u64 {
        *self.sender.borrow()
    }

    pub fn increment(&self) -> u64 {
        self.sender.send_modify(|count| *count += 1);
        self.get()
    }

    pub fn reset(&self) {
        self.sender.send_modify(|count| *count = 0);
    }

    /// Subscribe to counter changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        assert_eq!(Counter::new().get(), 0);
    }

    #[test]
    fn test_increment_without_subscribers() {
        let counter = Counter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let counter = Counter::new();
        counter.increment();
        counter.increment();

        counter.reset();
        assert_eq!(counter.get(), 0);
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[tokio::test]
    async fn test_subscriber_sees_changes() {
        let counter = Counter::new();
        let mut rx = counter.subscribe();
        assert_eq!(*rx.borrow(), 0);

        counter.increment();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 1);

        counter.reset();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 0);
    }

    #[tokio::test]
    async fn test_reset_at_zero_still_notifies() {
        let counter = Counter::new();
        let mut rx = counter.subscribe();
        rx.borrow_and_update();

        counter.reset();
        assert!(rx.has_changed().unwrap());
    }
}

use tokio::sync::broadcast;

/// Buffered values per subscriber before a slow one starts lagging.
pub const EMISSION_CAPACITY: usize = 16;

/// Fan-out of successful fetch results.
///
/// Emitting without subscribers drops the value.
#[derive(Debug)]
pub struct Emitter<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> Emitter<T> {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EMISSION_CAPACITY);
        Self { sender }
    }

    pub fn emit(&self, value: T) {
        // Err only means nobody is listening
        let _ = self.sender.send(value);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_without_subscribers() {
        let emitter = Emitter::new();
        emitter.emit(1u32);
        assert_eq!(emitter.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_every_subscriber_receives() {
        let emitter = Emitter::new();
        let mut a = emitter.subscribe();
        let mut b = emitter.subscribe();
        assert_eq!(emitter.subscriber_count(), 2);

        emitter.emit("woof".to_string());
        assert_eq!(a.recv().await.unwrap(), "woof");
        assert_eq!(b.recv().await.unwrap(), "woof");
    }

    #[test]
    fn test_dropped_subscriber_is_released() {
        let emitter: Emitter<u32> = Emitter::new();
        let rx = emitter.subscribe();
        assert_eq!(emitter.subscriber_count(), 1);
        drop(rx);
        assert_eq!(emitter.subscriber_count(), 0);
    }
}

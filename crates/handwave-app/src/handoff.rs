//! Latest-event handoff between the worker and the display
//!
//! A single-slot channel: the worker overwrites the slot every frame and the
//! display reads whatever is newest. Readers always see a complete snapshot.

use handwave_engine::GestureEvent;
use tokio::sync::watch;

/// What the display needs to know about the most recent frame
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub event: GestureEvent,
    pub label: &'static str,
    /// Frames processed so far in this session
    pub frame: u64,
    pub hand_present: bool,
}

impl FeedSnapshot {
    pub fn new(event: GestureEvent, frame: u64, hand_present: bool) -> Self {
        Self {
            event,
            label: event.label(),
            frame,
            hand_present,
        }
    }
}

impl Default for FeedSnapshot {
    fn default() -> Self {
        Self::new(GestureEvent::Idle, 0, false)
    }
}

/// Create a connected publisher/subscriber pair
pub fn feed() -> (FeedPublisher, FeedSubscriber) {
    let (tx, rx) = watch::channel(FeedSnapshot::default());
    (FeedPublisher { tx }, FeedSubscriber { rx })
}

/// Writing half, owned by the worker
#[derive(Debug)]
pub struct FeedPublisher {
    tx: watch::Sender<FeedSnapshot>,
}

impl FeedPublisher {
    /// Replace the current snapshot; never blocks, works with no reader
    pub fn publish(&self, snapshot: FeedSnapshot) {
        self.tx.send_replace(snapshot);
    }
}

/// Reading half, owned by the display
#[derive(Debug)]
pub struct FeedSubscriber {
    rx: watch::Receiver<FeedSnapshot>,
}

impl FeedSubscriber {
    /// Newest snapshot, marking it seen
    pub fn latest(&mut self) -> FeedSnapshot {
        self.rx.borrow_and_update().clone()
    }

    /// Whether a snapshot arrived since the last [`latest`](Self::latest)
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// False once the worker has dropped its publisher
    pub fn is_connected(&self) -> bool {
        self.rx.has_changed().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_wins() {
        let (publisher, mut subscriber) = feed();
        assert_eq!(subscriber.latest().label, "Idle");

        publisher.publish(FeedSnapshot::new(GestureEvent::Click, 1, true));
        publisher.publish(FeedSnapshot::new(GestureEvent::ScrollUp, 2, true));
        assert!(subscriber.has_changed());

        let snapshot = subscriber.latest();
        assert_eq!(snapshot.event, GestureEvent::ScrollUp);
        assert_eq!(snapshot.label, "Scroll Up");
        assert_eq!(snapshot.frame, 2);
        assert!(!subscriber.has_changed());
    }

    #[test]
    fn test_disconnect_is_visible() {
        let (publisher, mut subscriber) = feed();
        publisher.publish(FeedSnapshot::new(GestureEvent::Pause, 7, true));
        drop(publisher);

        assert!(!subscriber.is_connected());
        assert_eq!(subscriber.latest().frame, 7);
    }

    #[test]
    fn test_publish_across_threads() {
        let (publisher, mut subscriber) = feed();
        let handle = std::thread::spawn(move || {
            for frame in 1..=100 {
                publisher.publish(FeedSnapshot::new(GestureEvent::Idle, frame, false));
            }
        });
        handle.join().unwrap();
        assert_eq!(subscriber.latest().frame, 100);
    }
}

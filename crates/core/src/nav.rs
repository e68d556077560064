//! Overlay navigation stack.
//!
//! The application shell owns one [`NavStack`] and every overlay (details
//! modal, player, search) goes through it. Observers subscribe for change
//! notifications instead of hooking platform history events, so the stack has
//! no coupling to any browser or window API.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::media::MediaType;

/// One overlay that can sit on top of the base screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    /// Details modal for a movie or show.
    DetailsModal { media_id: u32, media_type: MediaType },
    /// Active playback surface.
    Player {
        media_id: u32,
        media_type: MediaType,
        season: Option<u32>,
        episode: Option<u32>,
    },
    /// Search overlay.
    Search,
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavChange {
    Pushed(Overlay),
    Popped(Overlay),
    Cleared,
}

/// Explicit overlay stack with broadcast change notifications.
#[derive(Debug)]
pub struct NavStack {
    stack: Mutex<Vec<Overlay>>,
    events: broadcast::Sender<NavChange>,
}

impl NavStack {
    /// Create a stack whose notification channel buffers `capacity` events.
    pub fn new(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity);
        Self {
            stack: Mutex::new(Vec::new()),
            events,
        }
    }

    /// Push an overlay onto the stack and notify subscribers.
    pub fn push(&self, overlay: Overlay) {
        let mut stack = self.stack.lock().unwrap();
        stack.push(overlay.clone());
        debug!(depth = stack.len(), "overlay pushed");
        drop(stack);
        self.notify(NavChange::Pushed(overlay));
    }

    /// Pop the topmost overlay. Returns `None` on an empty stack, in which
    /// case no notification is sent.
    pub fn pop(&self) -> Option<Overlay> {
        let popped = self.stack.lock().unwrap().pop();
        if let Some(overlay) = &popped {
            self.notify(NavChange::Popped(overlay.clone()));
        }
        popped
    }

    /// Remove every overlay. Empty stacks stay silent.
    pub fn clear(&self) {
        let mut stack = self.stack.lock().unwrap();
        if stack.is_empty() {
            return;
        }
        stack.clear();
        drop(stack);
        self.notify(NavChange::Cleared);
    }

    /// Clone of the topmost overlay, if any.
    pub fn top(&self) -> Option<Overlay> {
        self.stack.lock().unwrap().last().cloned()
    }

    /// Number of overlays currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth() == 0
    }

    /// Subscribe to change notifications. Only changes made after the call
    /// are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<NavChange> {
        self.events.subscribe()
    }

    fn notify(&self, change: NavChange) {
        // A send error only means nobody is subscribed right now.
        let _ = self.events.send(change);
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(media_id: u32) -> Overlay {
        Overlay::DetailsModal {
            media_id,
            media_type: MediaType::Movie,
        }
    }

    #[test]
    fn test_push_top_depth() {
        let nav = NavStack::default();
        assert!(nav.is_empty());

        nav.push(details(1));
        nav.push(Overlay::Search);

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.top(), Some(Overlay::Search));
    }

    #[test]
    fn test_pop_is_lifo() {
        let nav = NavStack::default();
        nav.push(details(1));
        nav.push(details(2));

        assert_eq!(nav.pop(), Some(details(2)));
        assert_eq!(nav.pop(), Some(details(1)));
        assert_eq!(nav.pop(), None);
    }

    #[test]
    fn test_pop_on_empty_is_silent() {
        let nav = NavStack::default();
        let mut rx = nav.subscribe();

        assert_eq!(nav.pop(), None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_clear_notifies_once() {
        let nav = NavStack::default();
        nav.push(details(1));
        nav.push(details(2));

        let mut rx = nav.subscribe();
        nav.clear();

        assert!(nav.is_empty());
        assert_eq!(rx.try_recv().ok(), Some(NavChange::Cleared));
        assert!(rx.try_recv().is_err());

        // Clearing an already-empty stack emits nothing.
        nav.clear();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_subscribers_see_changes_in_order() {
        let nav = NavStack::default();
        let mut rx = nav.subscribe();

        nav.push(details(7));
        nav.pop();

        assert_eq!(rx.try_recv().ok(), Some(NavChange::Pushed(details(7))));
        assert_eq!(rx.try_recv().ok(), Some(NavChange::Popped(details(7))));
    }

    #[test]
    fn test_overlay_serialization_tags() {
        let json = serde_json::to_value(details(42)).unwrap();
        assert_eq!(json["kind"], "details_modal");
        assert_eq!(json["media_id"], 42);
        assert_eq!(json["media_type"], "movie");

        let json = serde_json::to_value(Overlay::Player {
            media_id: 9,
            media_type: MediaType::Tv,
            season: Some(1),
            episode: Some(3),
        })
        .unwrap();
        assert_eq!(json["kind"], "player");
        assert_eq!(json["season"], 1);

        let json = serde_json::to_value(Overlay::Search).unwrap();
        assert_eq!(json["kind"], "search");
    }
}

//! Affective state store.
//!
//! Holds the single current emotion label the rest of the product treats as
//! "the user's mood right now", and fans state changes out to subscribers
//! (theme switcher, recommendation panel, analytics header).
//!
//! The store is an explicit, constructible object (no module-level mutable
//! globals) so tests and concurrent host sessions can each own one. There
//! is exactly one logical writer per operation by contract; the mutex exists
//! so a multi-threaded host stays safe, with last-write-wins semantics.

use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use crate::types::{AffectiveState, EmotionLabel};

/// Opaque handle returned by [`AffectiveStateStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

type Callback = Box<dyn Fn(&AffectiveState) + Send>;

struct Inner {
    label: EmotionLabel,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

/// Store for the process-wide affective state.
pub struct AffectiveStateStore {
    inner: Mutex<Inner>,
}

impl AffectiveStateStore {
    /// Create a store starting at `Neutral`.
    pub fn new() -> Self {
        Self::with_initial(None)
    }

    /// Create a store seeded from the host's stored mood, if any.
    pub fn with_initial(initial: Option<EmotionLabel>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                label: initial.unwrap_or(EmotionLabel::Neutral),
                subscribers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state. Pure read; the theme token always mirrors the label.
    pub fn current(&self) -> AffectiveState {
        AffectiveState::new(self.lock().label)
    }

    /// Set the current mode and notify subscribers.
    ///
    /// The label and theme update together (one assignment, the theme is
    /// derived from the label) so no intermediate state is observable.
    /// Subscribers are notified synchronously, in subscription order;
    /// callbacks must not call back into the store.
    pub fn set_mode(&self, label: EmotionLabel) {
        let mut inner = self.lock();
        inner.label = label;
        let state = AffectiveState::new(label);
        tracing::debug!(label = %label, theme = %state.theme, "Affective state updated");
        for (_, callback) in &inner.subscribers {
            callback(&state);
        }
    }

    /// Set the current mode from a host-supplied token.
    ///
    /// Unknown tokens are ignored with no state change, not treated as errors.
    pub fn set_mode_token(&self, token: &str) {
        match token.parse::<EmotionLabel>() {
            Ok(label) => self.set_mode(label),
            Err(_) => {
                tracing::debug!(token, "Ignoring unknown mode token");
            }
        }
    }

    /// Register a subscriber for state changes.
    ///
    /// Returns an id usable with [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AffectiveState) + Send + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.lock().subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }
}

impl Default for AffectiveStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_starts_neutral() {
        let store = AffectiveStateStore::new();
        assert_eq!(store.current().label, EmotionLabel::Neutral);
        assert_eq!(store.current().theme, "neutral");
    }

    #[test]
    fn test_initial_mood_from_host() {
        let store = AffectiveStateStore::with_initial(Some(EmotionLabel::Focused));
        assert_eq!(store.current().label, EmotionLabel::Focused);

        let store = AffectiveStateStore::with_initial(None);
        assert_eq!(store.current().label, EmotionLabel::Neutral);
    }

    #[test]
    fn test_set_mode_updates_label_and_theme_together() {
        let store = AffectiveStateStore::new();
        store.set_mode(EmotionLabel::Anxious);
        let state = store.current();
        assert_eq!(state.label, EmotionLabel::Anxious);
        assert_eq!(state.theme, "anxious");
    }

    #[test]
    fn test_unknown_token_is_ignored() {
        let store = AffectiveStateStore::new();
        store.set_mode(EmotionLabel::Happy);
        store.set_mode_token("rhapsodic");
        assert_eq!(store.current().label, EmotionLabel::Happy);

        store.set_mode_token("tired");
        assert_eq!(store.current().label, EmotionLabel::Tired);
    }

    #[test]
    fn test_subscribers_notified_in_subscription_order() {
        let store = AffectiveStateStore::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            store.subscribe(move |state| {
                order.lock().unwrap().push((tag, state.theme.clone()));
            });
        }

        store.set_mode(EmotionLabel::Sad);
        let seen = order.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("first", "sad".to_string()),
                ("second", "sad".to_string()),
                ("third", "sad".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let store = AffectiveStateStore::new();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_mode(EmotionLabel::Happy);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id));
        store.set_mode(EmotionLabel::Sad);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Unsubscribing twice reports the id as already gone.
        assert!(!store.unsubscribe(id));
    }
}

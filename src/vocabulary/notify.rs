//! Synchronous change-notification fan-out.
//!
//! Each service channel is a [`ChangeNotifier`]: observers register a
//! callback and get back a [`SubscriptionId`] token they can later cancel
//! with. Delivery is synchronous, in subscription order, and finishes
//! before the mutating call that triggered it returns.
//!
//! New subscribers do not get a replay of the last value; they read the
//! current state through the service's query operations and then receive
//! subsequent changes.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Token handed out by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A single multicast channel.
///
/// Handles are cheap clones sharing one subscriber list, so an observer
/// may keep a clone and unsubscribe from inside its own callback. A
/// subscriber removed mid-dispatch is skipped if it has not been invoked
/// yet; the remaining observers of that dispatch are unaffected.
pub struct ChangeNotifier<T> {
    subscribers: Arc<Mutex<Vec<(SubscriptionId, Callback<T>)>>>,
}

impl<T> Clone for ChangeNotifier<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an observer. Returns the token needed to unsubscribe.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers
            .lock()
            .unwrap()
            .push((id, Arc::new(callback)));
        id
    }

    /// Remove an observer. Returns `false` if the token was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap();
        let before = subscribers.len();
        subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
        subscribers.len() < before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }

    /// Deliver `value` to every current subscriber, in subscription order.
    ///
    /// The lock is not held while callbacks run, so callbacks may
    /// subscribe or unsubscribe without deadlocking.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<(SubscriptionId, Callback<T>)> =
            self.subscribers.lock().unwrap().clone();
        for (id, callback) in snapshot {
            let still_subscribed = self
                .subscribers
                .lock()
                .unwrap()
                .iter()
                .any(|(subscriber_id, _)| *subscriber_id == id);
            if still_subscribed {
                callback(value);
            }
        }
    }
}

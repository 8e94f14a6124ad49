use crate::domain::{PropertyRecord, SearchCriteria};

/// Payload published on every completed search, including zero-result
/// searches: listening panels must clear themselves too.
#[derive(Debug, Clone)]
pub struct SearchBroadcast {
    pub results: Vec<PropertyRecord>,
    pub criteria: SearchCriteria,
}

/// Handle returned by `subscribe`, used to detach the subscriber again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(usize);

type Subscriber<'a> = Box<dyn FnMut(&SearchBroadcast) + 'a>;

/// Explicit publish/subscribe channel between the search composer and any
/// number of listing panels. Delivery is synchronous and in registration
/// order; there is no buffering, so a subscriber attached after a publish
/// sees nothing and keeps its own default set.
#[derive(Default)]
pub struct SearchBus<'a> {
    subscribers: Vec<(usize, Subscriber<'a>)>,
    next_id: usize,
}

impl<'a> SearchBus<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, f: F) -> Subscription
    where
        F: FnMut(&SearchBroadcast) + 'a,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        Subscription(id)
    }

    pub fn unsubscribe(&mut self, sub: Subscription) {
        self.subscribers.retain(|(id, _)| *id != sub.0);
    }

    /// Fire-and-forget: a publish with no subscribers is simply dropped.
    pub fn publish(&mut self, broadcast: &SearchBroadcast) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(broadcast);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

use std::fmt::{self, Debug, Formatter};

use log::{debug, trace};

use super::Delegate;
use crate::collections::{Enumerable, List};

/// A multicast event: an ordered List of [`Delegate`]s that are all invoked on dispatch.
///
/// The same Delegate may be subscribed more than once, in which case it is invoked once per
/// subscription. Dispatching borrows the Event immutably, so handlers can't subscribe or
/// unsubscribe while a dispatch is in progress.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of subscriptions.
///
/// | Method | Complexity |
/// |-|-|
/// | `subscribe` | `O(1)`* |
/// | `unsubscribe` | `O(n)` |
/// | `dispatch` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use std::cell::Cell;
/// # use std::rc::Rc;
/// # use enumerable_lib::event::{Delegate, Event};
/// let total = Rc::new(Cell::new(0));
/// let mut on_score = Event::new();
///
/// let counter = Rc::clone(&total);
/// let handler = on_score.subscribe(Delegate::new(move |points: &u32| {
///     counter.set(counter.get() + points);
/// }));
///
/// on_score.dispatch(&5);
/// on_score.dispatch(&3);
/// assert_eq!(total.get(), 8);
///
/// on_score.unsubscribe(&handler);
/// on_score.dispatch(&100);
/// assert_eq!(total.get(), 8);
/// ```
pub struct Event<A: ?Sized> {
    pub(crate) handlers: List<Delegate<A>>,
}

impl<A: ?Sized> Event<A> {
    /// Creates a new Event without any subscriptions.
    pub const fn new() -> Event<A> {
        Event {
            handlers: List::new(),
        }
    }

    /// Returns the number of subscriptions.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is subscribed to the Event.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Subscribes `delegate` to the Event, returning a handle that can later be passed to
    /// [`unsubscribe`](Event::unsubscribe).
    pub fn subscribe(&mut self, delegate: Delegate<A>) -> Delegate<A> {
        self.handlers.add(delegate.clone());
        trace!("Subscribed delegate, {} subscription(s) now", self.handlers.len());
        delegate
    }

    /// Removes every subscription of `delegate`, returning how many were removed.
    pub fn unsubscribe(&mut self, delegate: &Delegate<A>) -> usize {
        let removed = self.handlers.remove_all(delegate);
        trace!("Unsubscribed delegate from {removed} subscription(s)");
        removed
    }

    /// Removes every subscription.
    pub fn clear(&mut self) {
        debug!("Clearing {} subscription(s)", self.handlers.len());
        self.handlers.clear();
    }

    /// Invokes every subscribed Delegate with `args`, in subscription order.
    ///
    /// # Panics
    /// Panics raised by a handler propagate immediately, so later handlers aren't invoked.
    pub fn dispatch(&self, args: &A) {
        trace!("Dispatching to {} subscription(s)", self.handlers.len());
        self.handlers.each(|delegate, _| delegate.invoke(args));
    }
}

impl<A: ?Sized> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> Clone for Event<A> {
    fn clone(&self) -> Self {
        Event {
            handlers: self.handlers.clone(),
        }
    }
}

impl<A: ?Sized> Debug for Event<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.handlers.as_read_only().as_slice())
            .field("len", &self.len())
            .finish()
    }
}

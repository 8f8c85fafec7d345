use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Reacts to a change of some state owner `S`.
///
/// Listeners receive a shared reference and pull whatever they need from it.
/// Closures taking `&S` are listeners.
pub trait Listener<S: ?Sized> {
    fn on_change(&self, source: &S);
}

impl<S: ?Sized, F: Fn(&S)> Listener<S> for F {
    fn on_change(&self, source: &S) {
        self(source)
    }
}

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber<S: ?Sized> {
    id: SubscriptionId,
    listener: Rc<dyn Listener<S>>,
}

/// Publishes "state changed" events to registered listeners.
///
/// Listeners are called in subscription order. The notifier only needs a
/// shared reference for every operation, so a listener may subscribe or
/// unsubscribe others while it is being notified. A listener unsubscribed
/// during a publish is not called for the rest of it; one subscribed during
/// a publish is first called on the next one.
pub struct ChangeNotifier<S: ?Sized> {
    subscribers: RefCell<Vec<Subscriber<S>>>,
    next_id: Cell<u64>,
}

fn same_listener<S: ?Sized>(a: &Rc<dyn Listener<S>>, b: &Rc<dyn Listener<S>>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl<S: ?Sized> ChangeNotifier<S> {
    pub fn new() -> Self {
        ChangeNotifier {
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Registers `listener`. Subscribing the same `Rc` again returns the
    /// existing handle instead of adding a second entry.
    pub fn subscribe(&self, listener: Rc<dyn Listener<S>>) -> SubscriptionId {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(existing) = subscribers
            .iter()
            .find(|s| same_listener(&s.listener, &listener))
        {
            return existing.id;
        }

        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        subscribers.push(Subscriber { id, listener });
        id
    }

    /// Removes `listener`; returns whether it was subscribed.
    pub fn unsubscribe(&self, listener: &Rc<dyn Listener<S>>) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| !same_listener(&s.listener, listener));
        subscribers.len() != before
    }

    /// Removes the subscription behind `id`; returns whether it existed.
    pub fn cancel(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.borrow().iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every current listener once with `source`.
    pub fn publish(&self, source: &S) {
        let snapshot: Vec<_> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| (s.id, Rc::clone(&s.listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.is_subscribed(id) {
                listener.on_change(source);
            }
        }
    }
}

impl<S: ?Sized> Default for ChangeNotifier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for ChangeNotifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.len())
            .finish()
    }
}

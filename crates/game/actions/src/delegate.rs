//! Landing notification with scoped subscriptions.
//!
//! A pawn owns one [`LandedDelegate`]. Listeners hold a
//! [`LandedSubscription`] guard; dropping the guard unsubscribes, so every
//! exit path of the holder releases it. Broadcasting marks each bound
//! subscription with the landing hit, which the holder then takes.
//!
//! Single-threaded: the delegate is shared through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::env::HitResult;

/// Identifier of a landed subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
struct Listeners {
    next_id: u64,
    bound: Vec<Listener>,
}

#[derive(Debug)]
struct Listener {
    id: SubscriptionId,
    pending: Option<HitResult>,
}

impl Listeners {
    fn find_mut(&mut self, id: SubscriptionId) -> Option<&mut Listener> {
        self.bound.iter_mut().find(|listener| listener.id == id)
    }
}

/// Multicast "landed" notification.
#[derive(Debug, Default)]
pub struct LandedDelegate {
    listeners: Rc<RefCell<Listeners>>,
}

impl LandedDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a new listener. The returned guard unbinds it on drop.
    pub fn subscribe(&self) -> LandedSubscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.bound.push(Listener { id, pending: None });

        LandedSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Notifies every bound listener. Returns how many were notified.
    pub fn broadcast(&self, hit: HitResult) -> usize {
        let mut listeners = self.listeners.borrow_mut();
        for listener in listeners.bound.iter_mut() {
            listener.pending = Some(hit);
        }
        listeners.bound.len()
    }

    /// Number of bound listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().bound.len()
    }

    /// Returns `true` if any listener is bound.
    pub fn is_bound(&self) -> bool {
        self.listener_count() > 0
    }
}

/// Scoped binding to a [`LandedDelegate`].
#[derive(Debug)]
pub struct LandedSubscription {
    id: SubscriptionId,
    listeners: Weak<RefCell<Listeners>>,
}

impl LandedSubscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns `true` while the delegate is alive and still holds this binding.
    pub fn is_bound(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.borrow().bound.iter().any(|l| l.id == self.id))
    }

    /// Takes the landing delivered since the last call, if any.
    pub fn take_landed(&self) -> Option<HitResult> {
        let listeners = self.listeners.upgrade()?;
        let mut listeners = listeners.borrow_mut();
        listeners.find_mut(self.id)?.pending.take()
    }
}

impl Drop for LandedSubscription {
    fn drop(&mut self) {
        // Delegate may already be gone with its pawn.
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .bound
                .retain(|listener| listener.id != self.id);
        }
    }
}

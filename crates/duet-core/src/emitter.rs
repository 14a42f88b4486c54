use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::Scope;

new_key_type! {
    /// Handle returned by [`Emitter::subscribe`], used to unsubscribe.
    pub struct SubId;
}

type Subscriber<T> = Rc<dyn Fn(&T)>;
type Subscribers<T> = RefCell<SlotMap<SubId, Subscriber<T>>>;

/// Cloneable, single-threaded event channel.
///
/// Clones share the same subscriber list, so an emitter can be handed out to
/// listeners while its owner keeps emitting.
pub struct Emitter<T: 'static>(Rc<Subscribers<T>>);

impl<T> Emitter<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(SlotMap::with_key())))
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.0.borrow_mut().insert(Rc::new(f))
    }

    /// Subscribes for as long as `scope` lives; the subscription is removed
    /// when the scope is disposed.
    pub fn subscribe_in(&self, scope: &Scope, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.subscribe(f);
        let subs: Weak<Subscribers<T>> = Rc::downgrade(&self.0);
        scope.add_disposer(move || {
            if let Some(subs) = subs.upgrade() {
                subs.borrow_mut().remove(id);
            }
        });
        id
    }

    /// Returns `false` if `id` was already removed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0.borrow_mut().remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn emit(&self, value: &T) {
        // Snapshot so subscribers can (un)subscribe or emit again.
        let subs: SmallVec<[Subscriber<T>; 4]> = self.0.borrow().values().cloned().collect();
        for s in subs {
            s(value);
        }
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

pub fn emitter<T>() -> Emitter<T> {
    Emitter::new()
}

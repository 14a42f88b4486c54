use std::cell::RefCell;
use std::rc::Rc;

use crate::{Emitter, SubId};

/// Observable value. Every write notifies subscribers with the new value.
pub struct Signal<T: 'static> {
    value: Rc<RefCell<T>>,
    changed: Emitter<T>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            changed: Emitter::new(),
        }
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        *self.value.borrow_mut() = v.clone();
        self.changed.emit(&v);
    }
    /// Writes and notifies only when `v` differs from the stored value.
    /// Returns whether a write happened.
    pub fn set_if_changed(&self, v: T) -> bool
    where
        T: Clone + PartialEq,
    {
        if *self.value.borrow() == v {
            return false;
        }
        self.set(v);
        true
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let v = {
            let mut inner = self.value.borrow_mut();
            f(&mut inner);
            inner.clone()
        };
        self.changed.emit(&v);
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.changed.subscribe(f)
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            changed: self.changed.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&*self.value.borrow()).finish()
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}

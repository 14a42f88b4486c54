use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::Dispose;

/// Owner of a group of cleanups. Disposing the scope runs all of them once.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    disposers: RefCell<Vec<Dispose>>,
    children: RefCell<Vec<Scope>>,
    disposed: Cell<bool>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                disposers: RefCell::new(Vec::new()),
                children: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Registers a cleanup. On an already disposed scope it runs right away.
    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) {
        if self.is_disposed() {
            log::trace!("scope already disposed; running disposer immediately");
            disposer();
            return;
        }
        self.inner.disposers.borrow_mut().push(Dispose::new(disposer));
    }

    pub fn child(&self) -> Scope {
        let child = Scope::new();
        if self.is_disposed() {
            child.clone().dispose();
        } else {
            self.inner.children.borrow_mut().push(child.clone());
        }
        child
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub fn dispose(self) {
        if self.inner.disposed.replace(true) {
            return;
        }

        // Dispose children first
        let children = std::mem::take(&mut *self.inner.children.borrow_mut());
        for child in children {
            child.dispose();
        }

        let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
        log::trace!("disposing scope ({} disposers)", disposers.len());
        for disposer in disposers {
            disposer.run();
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("disposed", &self.is_disposed())
            .field("disposers", &self.inner.disposers.borrow().len())
            .field("children", &self.inner.children.borrow().len())
            .finish()
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in children {
            drop(child);
        }

        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for disposer in disposers {
            disposer.run();
        }
    }
}

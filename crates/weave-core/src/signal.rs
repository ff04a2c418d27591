use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::effects::Dispose;
use crate::subscribers::{Subscribers, deliver};

/// Observable value with a current state.
///
/// A `Signal` always holds a value. `set` replaces it and notifies every
/// listener synchronously. Derived signals (`map`, `combine_latest*`) cache
/// their latest result, so every listener of a derived node sees the value
/// computed once for that change.
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

/// Non-owning handle to a [`Signal`].
pub struct WeakSignal<T: 'static>(Weak<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Subscribers<T>,
    /// Links to the nodes this one is derived from. Released on drop.
    upstream: SmallVec<[Dispose; 4]>,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        for link in self.upstream.drain(..) {
            link.run();
        }
    }
}

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: 'static> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: std::fmt::Debug + 'static> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&self.0.borrow().value).finish()
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Subscribers::default(),
            upstream: SmallVec::new(),
        })))
    }

    pub fn get(&self) -> T {
        self.0.borrow().value.clone()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    pub fn set(&self, v: T) {
        let value = {
            let mut inner = self.0.borrow_mut();
            inner.value = v;
            inner.value.clone()
        };
        self.notify(&value);
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        let value = {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
            inner.value.clone()
        };
        self.notify(&value);
    }

    fn notify(&self, value: &T) {
        let snapshot = self.0.borrow().subs.snapshot();
        deliver(snapshot, value, |id| self.0.borrow().subs.contains(id));
    }

    /// Listen to future changes. The returned handle keeps this signal alive
    /// until it is run.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = self.0.borrow_mut().subs.insert(f);
        let source = self.clone();
        Dispose::new(move || {
            source.0.borrow_mut().subs.remove(id);
        })
    }

    /// Like `subscribe`, but `f` first receives the current value (replay of
    /// one), so a bound target is never left unset.
    pub fn bind(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let current = self.get();
        f(&current);
        self.subscribe(f)
    }

    /// Derived node holding `f` of this signal's latest value.
    ///
    /// `f` runs once per change of `self` no matter how many listeners the
    /// result has.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Signal<U> {
        let out = Signal::new(self.with(&f));
        let target = out.downgrade();
        let link = self.subscribe(move |v| {
            if let Some(out) = target.upgrade() {
                out.set(f(v));
            }
        });
        out.link_upstream(link);
        out
    }

    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal(Rc::downgrade(&self.0))
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }

    pub(crate) fn link_upstream(&self, link: Dispose) {
        self.0.borrow_mut().upstream.push(link);
    }
}

impl<T: Clone + 'static> WeakSignal<T> {
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.0.upgrade().map(Signal)
    }
}

pub fn signal<T: Clone + 'static>(t: T) -> Signal<T> {
    Signal::new(t)
}

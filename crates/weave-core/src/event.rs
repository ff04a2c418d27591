use std::cell::RefCell;
use std::rc::Rc;

use crate::effects::Dispose;
use crate::subscribers::{Subscribers, deliver};

/// Stream of discrete events with no current value (taps, submits).
///
/// Unlike [`Signal`](crate::Signal), nothing is replayed to late subscribers.
pub struct EventSource<T: 'static>(Rc<RefCell<Subscribers<T>>>);

impl<T: 'static> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> EventSource<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Subscribers::default())))
    }

    pub fn emit(&self, value: T) {
        let snapshot = self.0.borrow().snapshot();
        deliver(snapshot, &value, |id| self.0.borrow().contains(id));
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = self.0.borrow_mut().insert(f);
        let source = self.clone();
        Dispose::new(move || {
            source.0.borrow_mut().remove(id);
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().len()
    }
}

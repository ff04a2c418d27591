use std::cell::RefCell;
use std::rc::Rc;

use crate::scope::Scope;

/// Handle that releases a subscription (or any other resource) when run.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// A handle with nothing to release.
    pub fn empty() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        // take first so a disposer that re-enters this handle sees it spent
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.0.borrow().is_none()
    }

    /// Hands this handle to `scope`, which runs it on teardown.
    pub fn disposed_by(self, scope: &Scope) {
        scope.add(self);
    }
}

/// Merge several handles into one that runs them in order.
pub fn dispose_all(handles: impl IntoIterator<Item = Dispose>) -> Dispose {
    let handles: Vec<Dispose> = handles.into_iter().collect();
    Dispose::new(move || {
        for h in handles {
            h.run();
        }
    })
}

/// Helper to build a cleanup from a plain closure.
pub fn on_dispose(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

use std::{cell::RefCell, fmt::Debug, rc::Rc};

use serde::{Deserialize, Serialize};
use weave_core::*;


pub trait NavKey: Clone + Debug + 'static + Serialize + for<'de> Deserialize<'de> {}
impl<T> NavKey for T where T: Clone + Debug + 'static + Serialize + for<'de> Deserialize<'de> {}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionDir {
    None,
    Push,
    Pop,
}

struct Entry<K: NavKey, S> {
    id: u64,
    key: K,
    screen: Rc<S>,
    /// Scope owned by this navigation entry.
    /// Disposed when the entry is popped, so the screen's subscriptions end with it.
    scope: Scope,
}

struct BackState<K: NavKey, S> {
    entries: Vec<Entry<K, S>>,
    next_id: u64,
    last_dir: TransitionDir,
}

/// What a screen factory gets to build an entry.
pub struct EntryScope<K: NavKey, S: 'static> {
    id: u64,
    key: K,
    scope: Scope,
    nav: Navigator<K, S>,
}

impl<K: NavKey, S: 'static> EntryScope<K, S> {
    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn key(&self) -> &K {
        &self.key
    }
    /// Dispose bag of this entry; register every subscription here.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
    pub fn navigator(&self) -> Navigator<K, S> {
        self.nav.clone()
    }
}

pub type ScreenFactory<K, S> = Rc<dyn Fn(&EntryScope<K, S>) -> S>;
pub fn factory<K: NavKey, S: 'static>(
    f: impl Fn(&EntryScope<K, S>) -> S + 'static,
) -> ScreenFactory<K, S> {
    Rc::new(f)
}

/// Stack of live screens. Each entry owns a `Scope` that is disposed when the
/// entry leaves the stack.
pub struct NavBackStack<K: NavKey, S: 'static> {
    inner: Rc<RefCell<BackState<K, S>>>,
    factory: ScreenFactory<K, S>,
    version: Signal<u64>,
}

impl<K: NavKey, S: 'static> Clone for NavBackStack<K, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            factory: self.factory.clone(),
            version: self.version.clone(),
        }
    }
}

impl<K: NavKey, S: 'static> NavBackStack<K, S> {
    /// New stack showing `start`.
    pub fn new(start: K, factory: ScreenFactory<K, S>) -> Self {
        let stack = Self {
            inner: Rc::new(RefCell::new(BackState {
                entries: Vec::new(),
                next_id: 1,
                last_dir: TransitionDir::None,
            })),
            factory,
            version: signal(0),
        };
        stack.push_inner(start);
        stack.inner.borrow_mut().last_dir = TransitionDir::None;
        stack
    }

    pub fn navigator(&self) -> Navigator<K, S> {
        Navigator {
            stack: self.clone(),
        }
    }

    pub fn top(&self) -> Option<(u64, K, Rc<S>)> {
        let s = self.inner.borrow();
        s.entries
            .last()
            .map(|e| (e.id, e.key.clone(), e.screen.clone()))
    }
    pub fn top_screen(&self) -> Option<Rc<S>> {
        self.inner.borrow().entries.last().map(|e| e.screen.clone())
    }
    pub fn keys(&self) -> Vec<K> {
        self.inner.borrow().entries.iter().map(|e| e.key.clone()).collect()
    }
    pub fn size(&self) -> usize {
        self.inner.borrow().entries.len()
    }
    pub fn last_dir(&self) -> TransitionDir {
        self.inner.borrow().last_dir
    }
    /// Bumped on every stack change; hosts re-render on it.
    pub fn version(&self) -> Signal<u64> {
        self.version.clone()
    }
    fn bump(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    fn build(&self, key: K) -> Entry<K, S> {
        let id = {
            let mut s = self.inner.borrow_mut();
            let id = s.next_id;
            s.next_id += 1;
            id
        };
        let scope = Scope::new();
        let entry_scope = EntryScope {
            id,
            key: key.clone(),
            scope: scope.clone(),
            nav: self.navigator(),
        };
        // built without holding the stack borrow; factories may read the stack
        let screen = Rc::new((self.factory)(&entry_scope));
        log::debug!("nav: built entry {id} for {key:?}");
        Entry {
            id,
            key,
            screen,
            scope,
        }
    }

    fn push_inner(&self, key: K) {
        let entry = self.build(key);
        let mut s = self.inner.borrow_mut();
        s.entries.push(entry);
        s.last_dir = TransitionDir::Push;
    }

    /// Pop the top entry (if any) and dispose its scope.
    fn pop_inner(&self) -> bool {
        let entry = {
            let mut s = self.inner.borrow_mut();
            s.last_dir = TransitionDir::Pop;
            s.entries.pop()
        };

        if let Some(e) = entry {
            log::debug!("nav: disposing entry {} ({:?})", e.id, e.key);
            e.scope.dispose();
            true
        } else {
            false
        }
    }

    fn replace_inner(&self, key: K) {
        let entry = self.build(key);
        let old = {
            let mut s = self.inner.borrow_mut();
            s.last_dir = TransitionDir::Push;
            let old = s.entries.pop();
            s.entries.push(entry);
            old
        };
        if let Some(e) = old {
            e.scope.dispose();
        }
    }

    /// Dispose every entry, leaving the stack empty.
    pub fn clear(&self) {
        while self.pop_inner() {}
        self.inner.borrow_mut().last_dir = TransitionDir::None;
        self.bump();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.keys()).unwrap_or("[]".into())
    }

    /// Rebuild the stack from persisted keys. Invalid or empty input leaves
    /// the stack untouched and returns false.
    pub fn from_json(&self, json: &str) -> bool {
        let keys = match serde_json::from_str::<Vec<K>>(json) {
            Ok(keys) if !keys.is_empty() => keys,
            Ok(_) => {
                log::warn!("nav: refusing to restore an empty back stack");
                return false;
            }
            Err(e) => {
                log::warn!("nav: invalid back stack json: {e}");
                return false;
            }
        };

        // Dispose all existing scopes before clearing.
        while self.pop_inner() {}
        for k in keys {
            self.push_inner(k);
        }
        self.inner.borrow_mut().last_dir = TransitionDir::None;
        self.bump();
        true
    }
}

pub struct Navigator<K: NavKey, S: 'static> {
    pub stack: NavBackStack<K, S>,
}

impl<K: NavKey, S: 'static> Clone for Navigator<K, S> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<K: NavKey, S: 'static> Navigator<K, S> {
    pub fn push(&self, k: K) {
        self.stack.push_inner(k);
        self.stack.bump();
    }
    pub fn replace(&self, k: K) {
        self.stack.replace_inner(k);
        self.stack.bump();
    }
    pub fn pop(&self) -> bool {
        // Don't pop if only one entry is present
        if self.stack.size() <= 1 {
            return false;
        }
        let ok = self.stack.pop_inner();
        if ok {
            self.stack.bump();
        }
        ok
    }
    pub fn clear_and_push(&self, k: K) {
        while self.stack.pop_inner() {}
        self.stack.push_inner(k);
        self.stack.bump();
    }
    pub fn pop_to<F: Fn(&K) -> bool>(&self, pred: F, inclusive: bool) {
        let count = {
            let s = self.stack.inner.borrow();
            if let Some(idx) = s.entries.iter().rposition(|e| pred(&e.key)) {
                s.entries.len() - idx - (if inclusive { 0 } else { 1 })
            } else {
                0
            }
        };
        // never pop the root
        let count = count.min(self.stack.size().saturating_sub(1));
        for _ in 0..count {
            let _ = self.stack.pop_inner();
        }
        if count > 0 {
            self.stack.bump();
        }
    }
}

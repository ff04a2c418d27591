use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Key of one listener inside a signal or event source.
    pub(crate) struct SubId;
}

pub(crate) type Callback<T> = Rc<dyn Fn(&T)>;

/// Listener registry shared by `Signal` and `EventSource`.
pub(crate) struct Subscribers<T> {
    slots: SlotMap<SubId, Callback<T>>,
    // slot indices get reused, so subscription order is kept separately
    order: Vec<SubId>,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }
}

impl<T> Subscribers<T> {
    pub fn insert(&mut self, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.slots.insert(Rc::new(f));
        self.order.push(id);
        id
    }

    pub fn remove(&mut self, id: SubId) -> bool {
        if self.slots.remove(id).is_some() {
            self.order.retain(|k| *k != id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: SubId) -> bool {
        self.slots.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Listeners in subscription order.
    pub fn snapshot(&self) -> Vec<(SubId, Callback<T>)> {
        self.order
            .iter()
            .filter_map(|id| self.slots.get(*id).map(|f| (*id, f.clone())))
            .collect()
    }
}

/// Deliver `value` to a snapshot of listeners.
///
/// `live` is consulted before every call so a listener removed earlier in the
/// same delivery is skipped. No borrow of the owning node is held while a
/// listener runs.
pub(crate) fn deliver<T>(
    snapshot: Vec<(SubId, Callback<T>)>,
    value: &T,
    live: impl Fn(SubId) -> bool,
) {
    for (id, f) in snapshot {
        if live(id) {
            f(value);
        }
    }
}

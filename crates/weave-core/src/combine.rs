//! Combine-latest over signals.
//!
//! The output is computed from the current value of every source as soon as
//! it is created, then recomputed whenever any source changes, always reading
//! the latest value of all of them. Sources are held weakly by the listeners
//! and strongly by the output's upstream links, so the output keeps its
//! sources alive and dropping the output detaches it.

use std::rc::Rc;

use crate::signal::{Signal, WeakSignal};

pub fn combine_latest2<A, B, R>(
    a: &Signal<A>,
    b: &Signal<B>,
    f: impl Fn(&A, &B) -> R + 'static,
) -> Signal<R>
where
    A: Clone + 'static,
    B: Clone + 'static,
    R: Clone + 'static,
{
    let out = Signal::new(f(&a.get(), &b.get()));
    let (wa, wb, target) = (a.downgrade(), b.downgrade(), out.downgrade());
    let recompute = Rc::new(move || {
        if let (Some(a), Some(b), Some(out)) = (wa.upgrade(), wb.upgrade(), target.upgrade()) {
            out.set(f(&a.get(), &b.get()));
        }
    });
    link(&out, a, recompute.clone());
    link(&out, b, recompute);
    out
}

pub fn combine_latest4<A, B, C, D, R>(
    a: &Signal<A>,
    b: &Signal<B>,
    c: &Signal<C>,
    d: &Signal<D>,
    f: impl Fn(&A, &B, &C, &D) -> R + 'static,
) -> Signal<R>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    D: Clone + 'static,
    R: Clone + 'static,
{
    let out = Signal::new(f(&a.get(), &b.get(), &c.get(), &d.get()));
    let (wa, wb, wc, wd) = (a.downgrade(), b.downgrade(), c.downgrade(), d.downgrade());
    let target = out.downgrade();
    let recompute = Rc::new(move || {
        if let (Some(a), Some(b), Some(c), Some(d), Some(out)) = (
            wa.upgrade(),
            wb.upgrade(),
            wc.upgrade(),
            wd.upgrade(),
            target.upgrade(),
        ) {
            out.set(f(&a.get(), &b.get(), &c.get(), &d.get()));
        }
    });
    link(&out, a, recompute.clone());
    link(&out, b, recompute.clone());
    link(&out, c, recompute.clone());
    link(&out, d, recompute);
    out
}

/// Combine-latest over any number of signals of one type.
///
/// `f` receives the latest values in the order of `sources`.
pub fn combine_latest_all<T, R>(sources: &[Signal<T>], f: impl Fn(&[T]) -> R + 'static) -> Signal<R>
where
    T: Clone + 'static,
    R: Clone + 'static,
{
    let values: Vec<T> = sources.iter().map(Signal::get).collect();
    let out = Signal::new(f(&values));
    let weak: Vec<WeakSignal<T>> = sources.iter().map(Signal::downgrade).collect();
    let target = out.downgrade();
    let recompute = Rc::new(move || {
        let Some(out) = target.upgrade() else {
            return;
        };
        let values: Option<Vec<T>> = weak.iter().map(|w| w.upgrade().map(|s| s.get())).collect();
        if let Some(values) = values {
            out.set(f(&values));
        }
    });
    for source in sources {
        link(&out, source, recompute.clone());
    }
    out
}

fn link<S, R>(out: &Signal<R>, source: &Signal<S>, recompute: Rc<impl Fn() + 'static>)
where
    S: Clone + 'static,
    R: Clone + 'static,
{
    let handle = source.subscribe(move |_| recompute());
    out.link_upstream(handle);
}

//! # Signals, Combinators, and Scopes
//!
//! Weave is a small single-threaded reactive core for wiring widget inputs to
//! widget outputs. There are four pieces:
//!
//! - `Signal<T>`: observable value with a current state.
//! - `EventSource<T>`: stream of discrete events (taps) with no state.
//! - `combine_latest*` and `Signal::map`: derived nodes that cache their
//!   latest result and recompute when a dependency changes.
//! - `Dispose` / `Scope`: subscription handles and the bag that owns them.
//!
//! ## Signals
//!
//! ```rust
//! use weave_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Derived state
//!
//! A derived node is computed once per change and shared by all of its
//! listeners:
//!
//! ```rust
//! use weave_core::*;
//!
//! let first = signal("Jane".to_string());
//! let last = signal("Doe".to_string());
//!
//! let full = combine_latest2(&first, &last, |f, l| format!("{f} {l}"));
//! assert_eq!(full.get(), "Jane Doe");
//!
//! last.set("Roe".to_string());
//! assert_eq!(full.get(), "Jane Roe");
//! ```
//!
//! ## Scoped disposal
//!
//! Every subscription returns a `Dispose`. Hand it to a `Scope` and it is
//! released when the scope is disposed or dropped:
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use weave_core::*;
//!
//! let scope = Scope::new();
//! let name = signal(String::new());
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! name.subscribe({
//!     let seen = seen.clone();
//!     move |v: &String| seen.borrow_mut().push(v.clone())
//! })
//! .disposed_by(&scope);
//!
//! name.set("a".into());
//! scope.dispose();
//! name.set("b".into());
//! assert_eq!(*seen.borrow(), vec!["a".to_string()]);
//! ```

pub mod combine;
pub mod effects;
pub mod event;
pub mod scope;
pub mod signal;
mod subscribers;

pub use combine::*;
pub use effects::*;
pub use event::*;
pub use scope::*;
pub use signal::*;

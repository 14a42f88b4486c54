//! # Emitters, Signals, and Scopes
//!
//! Duet's widgets talk to each other through a small single-threaded
//! reactive core. There are three pieces:
//!
//! - `Emitter<T>`: a cloneable event channel.
//! - `Signal<T>`: an observable value built on an emitter.
//! - `Scope` / `Dispose`: cleanups that run once, together.
//!
//! ## Emitters
//!
//! ```rust
//! use duet_core::*;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let clicks = emitter::<u32>();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let id = clicks.subscribe({
//!     let seen = seen.clone();
//!     move |n| seen.borrow_mut().push(*n)
//! });
//! clicks.emit(&1);
//! clicks.unsubscribe(id);
//! clicks.emit(&2);
//! assert_eq!(*seen.borrow(), vec![1]);
//! ```
//!
//! ## Signals
//!
//! ```rust
//! use duet_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Scopes and cleanup
//!
//! Subscriptions made with `subscribe_in` belong to a `Scope`. Disposing the
//! scope cancels every one of them at once:
//!
//! ```rust
//! use duet_core::*;
//!
//! let scope = Scope::new();
//! let ticks = emitter::<()>();
//! ticks.subscribe_in(&scope, |_| log::info!("tick"));
//! assert_eq!(ticks.subscriber_count(), 1);
//! scope.dispose();
//! assert_eq!(ticks.subscriber_count(), 0);
//! ```

pub mod effects;
pub mod emitter;
pub mod scope;
pub mod signal;

pub use effects::*;
pub use emitter::*;
pub use scope::*;
pub use signal::*;

//! # Composition locals
//!
//! Hosts hand ambient services to components through thread‑local
//! “composition locals” instead of globals. Today there is one:
//!
//! - the title sink — where document/window title writes go.
//!
//! A host wraps composition and effect flushing in `with_title_sink`; a
//! component grabs the sink with `title_sink()` and moves it into its effect:
//!
//! ```rust
//! use hooks_core::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(String::new()));
//! let sink: SharedTitleSink = Rc::new({
//!     let seen = seen.clone();
//!     move |t: &str| *seen.borrow_mut() = t.to_string()
//! });
//!
//! with_title_sink(sink, || title_sink().set_title("hello"));
//! assert_eq!(*seen.borrow(), "hello");
//! ```
//!
//! Outside any `with_title_sink` frame the getter falls back to
//! [`DiscardTitle`].

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::{DiscardTitle, SharedTitleSink};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}

fn local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>()))
            .and_then(|v| v.downcast_ref::<T>().cloned())
    })
}

/// Installs `sink` for everything composed or flushed inside `f`.
pub fn with_title_sink<R>(sink: SharedTitleSink, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<SharedTitleSink>(), Box::new(sink));
        f()
    })
}

/// Innermost installed title sink, or a discarding one.
pub fn title_sink() -> SharedTitleSink {
    local::<SharedTitleSink>().unwrap_or_else(|| Rc::new(DiscardTitle))
}

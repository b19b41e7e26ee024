use std::fmt;

use crate::{Signal, remember, signal};

/// Setter half of `use_state`. Cloning shares the same slot.
pub struct SetState<T: 'static> {
    inner: Signal<T>,
}

impl<T: 'static> Clone for SetState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> SetState<T> {
    /// Replaces the stored value; the next frame sees `v`.
    pub fn set(&self, v: T) {
        self.inner.set(v);
    }

    /// Replaces the stored value with `f(current)`.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        self.inner.update(|cur| *cur = f(cur));
    }
}

impl<T: 'static> fmt::Debug for SetState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SetState(..)")
    }
}

/// Remembered state slot: returns this frame's snapshot plus its setter.
///
/// `init` only runs on the first composition of the instance.
pub fn use_state<T: Clone + 'static>(init: impl FnOnce() -> T) -> (T, SetState<T>) {
    let slot = remember(|| signal(init()));
    let value = slot.get();
    (
        value,
        SetState {
            inner: (*slot).clone(),
        },
    )
}

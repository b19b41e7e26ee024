use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::runtime::{is_composing, queue_effect};
use crate::{Dispose, current_scope, remember};

struct EffectSlot<K> {
    last_deps: RefCell<Option<K>>,
    cleanup: RefCell<Option<Dispose>>,
    installed: Cell<bool>,
}

impl<K> EffectSlot<K> {
    fn new() -> Self {
        Self {
            last_deps: RefCell::new(None),
            cleanup: RefCell::new(None),
            installed: Cell::new(false),
        }
    }

    fn run_cleanup(&self) {
        let prev = self.cleanup.borrow_mut().take();
        if let Some(d) = prev {
            d.run();
        }
    }
}

/// Post-commit effect gated on `deps`.
///
/// Queued only when `deps` differs from the value seen at the last run (or on
/// first composition). When it runs, the previous cleanup goes first. The
/// latest cleanup runs once more when the owning scope is disposed.
pub fn use_effect<K: PartialEq + 'static>(deps: K, effect: impl FnOnce() -> Dispose + 'static) {
    if !is_composing() {
        log::warn!("use_effect called outside composition; ignored");
        return;
    }
    let slot: Rc<EffectSlot<K>> = remember(EffectSlot::new);

    // One unmount disposer per callsite.
    if !slot.installed.replace(true) {
        match current_scope() {
            Some(scope) => {
                let slot = slot.clone();
                scope.add_disposer(move || slot.run_cleanup());
            }
            None => log::warn!("use_effect: no current scope; cleanup won't run at teardown"),
        }
    }

    let changed = slot.last_deps.borrow().as_ref() != Some(&deps);
    if !changed {
        log::trace!("use_effect: deps unchanged; skipping");
        return;
    }

    queue_effect(move || {
        slot.run_cleanup();
        *slot.last_deps.borrow_mut() = Some(deps);
        let d = effect();
        *slot.cleanup.borrow_mut() = Some(d);
    });
}

/// runs after every committed frame
pub fn side_effect(effect: impl FnOnce() + 'static) {
    queue_effect(effect);
}

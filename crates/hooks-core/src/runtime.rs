use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::{View, semantics::Role};

thread_local! {
    pub(crate) static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// Slot storage for one instance. Owned by its `Scheduler` and installed in
/// `COMPOSER` only while that scheduler composes or flushes.
#[derive(Default)]
pub(crate) struct Composer {
    pub(crate) slots: Vec<Box<dyn Any>>,
    pub(crate) cursor: usize,
    pub(crate) keyed_slots: HashMap<String, Box<dyn Any>>,
    pending_effects: Vec<Box<dyn FnOnce()>>,
    composing: bool,
}

struct ComposeGuard {
    _private: (),
}

impl ComposeGuard {
    fn begin() -> Self {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.cursor = 0;
            c.composing = true;
            // An uncommitted composition never gets its effects run.
            if !c.pending_effects.is_empty() {
                log::debug!(
                    "compose: dropping {} effect(s) from an unflushed frame",
                    c.pending_effects.len()
                );
                c.pending_effects.clear();
            }
        });
        ComposeGuard { _private: () }
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        COMPOSER.with(|c| c.borrow_mut().composing = false);
    }
}

/// True while a root is being built.
pub fn is_composing() -> bool {
    COMPOSER.with(|c| c.borrow().composing)
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let cursor = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;
        cursor
    });

    let existing = COMPOSER.with(|c| {
        let c = c.borrow();
        c.slots
            .get(cursor)
            .map(|slot| slot.downcast_ref::<Rc<T>>().cloned())
    });

    match existing {
        Some(Some(rc)) => rc,
        Some(None) => {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots[cursor] = Box::new(rc.clone()));
            rc
        }
        None => {
            // init may itself remember; run it without holding the composer
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| {
                let mut c = c.borrow_mut();
                if cursor >= c.slots.len() {
                    c.slots.push(Box::new(rc.clone()));
                } else {
                    c.slots[cursor] = Box::new(rc.clone());
                }
            });
            log::trace!("remember: new slot {cursor}");
            rc
        }
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        c.borrow()
            .keyed_slots
            .get(&key)
            .map(|slot| slot.downcast_ref::<Rc<T>>().cloned())
    });

    match existing {
        Some(Some(rc)) => return rc,
        Some(None) => log::warn!(
            "remember_with_key: key '{}' reused with a different type; replacing.",
            key
        ),
        None => {}
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| {
        c.borrow_mut()
            .keyed_slots
            .insert(key, Box::new(rc.clone()))
    });
    rc
}

/// Queue work to run once the current frame has been committed.
pub(crate) fn queue_effect(f: impl FnOnce() + 'static) {
    COMPOSER.with(|c| c.borrow_mut().pending_effects.push(Box::new(f)));
}

/// An instance's composer swapped into `COMPOSER`; `finish` swaps it back out.
struct Installed {
    prev: Option<Composer>,
}

impl Installed {
    fn swap_in(composer: Composer) -> Self {
        let prev = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), composer));
        Self { prev: Some(prev) }
    }

    fn finish(mut self) -> Composer {
        let prev = self.prev.take().unwrap_or_default();
        COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), prev))
    }
}

impl Drop for Installed {
    fn drop(&mut self) {
        // Only reached with `prev` still set when a build or effect unwound.
        if let Some(prev) = self.prev.take() {
            let lost = COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), prev));
            log::warn!("unwound with {} slot(s) installed; dropping them", lost.slots.len());
            drop(lost);
        }
    }
}

/// Ask the host for a new frame. Signal writes call this.
pub fn request_frame() {
    FRAME_REQUESTED.with(|r| r.set(true));
}

/// Frame — output of composition for a tick: committed tree + input/semantics.
#[derive(Clone, Debug)]
pub struct Frame {
    pub root: View,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
}

impl Frame {
    pub fn hit_by_id(&self, id: u64) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.id == id)
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: u64,
    pub label: String,
    pub on_click: Option<Rc<dyn Fn()>>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// Flattened semantics node produced at commit.
///
/// This is the source of truth for accessibility queries: it contains the
/// role, label, and focus/enabled state of every node that declared semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub focused: bool,
    pub enabled: bool,
}

/// Drives composition and effect flushing for a single component instance.
///
/// Each scheduler owns its slots, so any number may live on one thread.
pub struct Scheduler {
    scope: Scope,
    composer: Composer,
    frames: u64,
    torn_down: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            scope: Scope::new(),
            composer: Composer::default(),
            frames: 0,
            torn_down: false,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Effects queued by the last composition and not yet flushed.
    pub fn pending_effects(&self) -> usize {
        self.composer.pending_effects.len()
    }

    /// Builds the root inside the instance scope and hands it to `commit`.
    /// Effects queued by the build stay pending until `flush_effects`.
    pub fn compose<F>(&mut self, mut build_root: F, commit: impl FnOnce(View) -> Frame) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        FRAME_REQUESTED.with(|r| r.set(false));
        let scope = self.scope.clone();
        let installed = Installed::swap_in(std::mem::take(&mut self.composer));
        let root = {
            let _guard = ComposeGuard::begin();
            scope.run(|| build_root(self))
        };
        self.composer = installed.finish();
        self.frames += 1;
        let frame = commit(root);
        log::debug!(
            "frame {}: {} hit region(s), {} effect(s) pending",
            self.frames,
            frame.hit_regions.len(),
            self.pending_effects()
        );
        frame
    }

    /// Runs effects queued by the last composition, in call order.
    /// Returns how many ran.
    pub fn flush_effects(&mut self) -> usize {
        let pending = std::mem::take(&mut self.composer.pending_effects);
        let n = pending.len();
        let installed = Installed::swap_in(std::mem::take(&mut self.composer));
        self.scope.run(|| {
            for effect in pending {
                effect();
            }
        });
        self.composer = installed.finish();
        n
    }

    /// Whether a signal write asked for a frame since the last check.
    pub fn take_frame_request(&mut self) -> bool {
        FRAME_REQUESTED.with(|r| r.replace(false))
    }

    /// Runs every registered cleanup once and drops all remembered state.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.scope.dispose();
        // Only this instance's slots; other schedulers on the thread keep theirs.
        drop(std::mem::take(&mut self.composer));
        log::debug!("scheduler torn down after {} frame(s)", self.frames);
    }
}

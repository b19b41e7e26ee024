//! Hosts for Hooks components: a headless host that owns one instance, and a
//! console runner that drives it from stdin.
//!

mod common;
pub mod config;
pub mod console;
pub mod title;

pub use config::HostConfig;
pub use console::{run_console_app, run_console_session};
pub use title::{ConsoleTitle, RecordingTitle};

use hooks_core::*;
use hooks_devtools::{FrameTimer, Inspector, Metrics};
use hooks_ui::commit;

/// Renders in a row before the host gives up on a component that keeps
/// writing state from its own effects.
const MAX_PASSES: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for input.
    Idle,
    /// Running a callback, rendering, and flushing effects.
    Updating,
    /// Instance destroyed; cleanups have run.
    TornDown,
}

pub struct HeadlessHost {
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    sched: Scheduler,
    title: SharedTitleSink,
    inspector: Inspector,
    frame: Option<Frame>,
    phase: Phase,
    focused: Option<u64>,
    config: HostConfig,
}

impl HeadlessHost {
    pub fn new(
        root: impl FnMut(&mut Scheduler) -> View + 'static,
        title: SharedTitleSink,
        config: HostConfig,
    ) -> Self {
        let mut inspector = Inspector::new();
        inspector.hud.inspector_enabled = config.inspector;
        Self {
            root: Box::new(root),
            sched: Scheduler::new(),
            title,
            inspector,
            frame: None,
            phase: Phase::Idle,
            focused: None,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn root(&self) -> Option<&View> {
        self.frame.as_ref().map(|f| &f.root)
    }

    pub fn frame_count(&self) -> u64 {
        self.sched.frame_count()
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// First render plus effect flush. A second call is a no-op.
    pub fn mount(&mut self) -> Result<&Frame, HostError> {
        if self.phase == Phase::TornDown {
            return Err(HostError::TornDown);
        }
        if self.frame.is_none() {
            log::debug!("host: mounting");
            if let Some(t) = &self.config.initial_title {
                self.title.set_title(t);
            }
            self.phase = Phase::Updating;
            self.pump(true);
            self.phase = Phase::Idle;
        }
        self.frame.as_ref().ok_or(HostError::NotMounted)
    }

    /// Delivers a click to the button with `id`, then re-renders and flushes
    /// effects before returning to idle.
    pub fn click(&mut self, id: ViewId) -> Result<(), HostError> {
        self.ensure_idle()?;
        let frame = self.frame.as_ref().ok_or(HostError::NotMounted)?;
        let on_click = match common::hit_index_by_id(frame, id) {
            Some(i) => frame.hit_regions[i]
                .on_click
                .clone()
                .ok_or(HostError::NotClickable(id))?,
            None if frame.root.find(id).is_some() => return Err(HostError::NotClickable(id)),
            None => return Err(HostError::UnknownTarget(id)),
        };

        log::debug!("host: click #{id}");
        self.phase = Phase::Updating;
        self.focused = Some(id);
        with_title_sink(self.title.clone(), || on_click());
        self.pump(false);
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Clicks the first button whose label starts with `prefix`.
    pub fn click_button(&mut self, prefix: &str) -> Result<(), HostError> {
        self.ensure_idle()?;
        let frame = self.frame.as_ref().ok_or(HostError::NotMounted)?;
        let id = common::button_by_label(frame, prefix)
            .map(|h| h.id)
            .ok_or_else(|| HostError::NoSuchButton(prefix.to_string()))?;
        self.click(id)
    }

    /// Re-render without any input. Gated effects stay put.
    pub fn render(&mut self) -> Result<&Frame, HostError> {
        self.ensure_idle()?;
        self.phase = Phase::Updating;
        self.pump(true);
        self.phase = Phase::Idle;
        self.frame.as_ref().ok_or(HostError::NotMounted)
    }

    /// Runs every pending cleanup once. Idempotent.
    pub fn teardown(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.sched.teardown();
        self.frame = None;
        self.phase = Phase::TornDown;
        log::debug!("host: torn down");
    }

    fn ensure_idle(&self) -> Result<(), HostError> {
        match self.phase {
            Phase::TornDown => Err(HostError::TornDown),
            Phase::Updating => Err(HostError::Reentrant),
            Phase::Idle if self.frame.is_none() => Err(HostError::NotMounted),
            Phase::Idle => Ok(()),
        }
    }

    /// Render + flush until no signal asks for another frame.
    fn pump(&mut self, mut force: bool) {
        for _ in 0..MAX_PASSES {
            if !force && !self.sched.take_frame_request() {
                return;
            }
            force = false;

            let timer = FrameTimer::start();
            let focused = self.focused;
            let frame = with_title_sink(self.title.clone(), || {
                self.sched
                    .compose(&mut self.root, |root| commit(root, focused))
            });
            let effects_run = with_title_sink(self.title.clone(), || self.sched.flush_effects());

            let nodes = frame.root.node_count();
            self.frame = Some(frame);
            self.inspector.frame(Metrics {
                build_commit_ms: timer.elapsed_ms(),
                nodes,
                effects_run,
            });
        }
        log::warn!("host: still requesting frames after {MAX_PASSES} passes; yielding");
    }
}

impl Drop for HeadlessHost {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooks_ui::{Button, Column, Text};
    use std::cell::Cell;
    use std::rc::Rc;

    fn tally(_s: &mut Scheduler) -> View {
        let (n, set_n) = use_state(|| 0u32);
        let title = title_sink();
        use_effect(n, move || {
            title.set_title(&format!("tally {n}"));
            Dispose::empty()
        });
        Column(Modifier::new()).with_children(vec![
            Text(format!("n = {n}")),
            Button(format!("add ({n})"), move || set_n.set(n + 1)),
        ])
    }

    fn host_with(title: &RecordingTitle) -> HeadlessHost {
        HeadlessHost::new(
            tally,
            title.sink(),
            HostConfig {
                initial_title: None,
                inspector: false,
            },
        )
    }

    #[test]
    fn test_mount_then_click() {
        let title = RecordingTitle::new();
        let mut host = host_with(&title);
        assert!(matches!(host.click(3), Err(HostError::NotMounted)));

        host.mount().expect("mount");
        assert_eq!(title.history(), vec!["tally 0"]);
        assert_eq!(host.phase(), Phase::Idle);

        host.click(3).expect("click");
        host.click_button("add").expect("click by label");
        assert_eq!(title.history(), vec!["tally 0", "tally 1", "tally 2"]);
        assert_eq!(host.frame_count(), 3);
        assert_eq!(host.inspector().hud.frame_count(), 3);
    }

    #[test]
    fn test_initial_title_precedes_first_effect() {
        let title = RecordingTitle::new();
        let mut host = HeadlessHost::new(tally, title.sink(), HostConfig::default());
        host.mount().expect("mount");
        host.mount().expect("second mount is a no-op");
        assert_eq!(title.history(), vec!["Hooks Counter", "tally 0"]);
        assert_eq!(host.frame_count(), 1);
    }

    #[test]
    fn test_click_errors() {
        let title = RecordingTitle::new();
        let mut host = host_with(&title);
        host.mount().expect("mount");

        assert_eq!(host.click(2), Err(HostError::NotClickable(2)));
        assert_eq!(host.click(99), Err(HostError::UnknownTarget(99)));
        assert_eq!(
            host.click_button("nope"),
            Err(HostError::NoSuchButton("nope".into()))
        );
        assert_eq!(host.phase(), Phase::Idle);
    }

    #[test]
    fn test_render_without_input_is_stable() {
        let title = RecordingTitle::new();
        let mut host = host_with(&title);
        let first = host.mount().expect("mount").root.clone();
        let second = host.render().expect("render").root.clone();
        assert_eq!(first, second);
        assert_eq!(title.writes(), 1);
    }

    #[test]
    fn test_teardown_runs_cleanup_once_and_blocks_input() {
        let cleanups = Rc::new(Cell::new(0));
        let mut host = HeadlessHost::new(
            {
                let cleanups = cleanups.clone();
                move |_: &mut Scheduler| {
                    let cleanups = cleanups.clone();
                    use_effect((), move || {
                        on_unmount(move || cleanups.set(cleanups.get() + 1))
                    });
                    Column(Modifier::new())
                }
            },
            RecordingTitle::new().sink(),
            HostConfig::default(),
        );
        host.mount().expect("mount");
        host.render().expect("render");
        assert_eq!(cleanups.get(), 0);

        host.teardown();
        host.teardown();
        drop(host);
        assert_eq!(cleanups.get(), 1);
    }

    #[test]
    fn test_torn_down_host_rejects_everything() {
        let title = RecordingTitle::new();
        let mut host = host_with(&title);
        host.mount().expect("mount");
        host.teardown();
        assert_eq!(host.phase(), Phase::TornDown);
        assert!(host.root().is_none());
        assert_eq!(host.click(3), Err(HostError::TornDown));
        assert!(matches!(host.render(), Err(HostError::TornDown)));
        assert!(matches!(host.mount(), Err(HostError::TornDown)));
    }

    #[test]
    fn test_panicking_callback_leaves_host_updating() {
        let mut host = HeadlessHost::new(
            |_: &mut Scheduler| Button("boom", || panic!("boom")),
            RecordingTitle::new().sink(),
            HostConfig::default(),
        );
        host.mount().expect("mount");
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| host.click(1)));
        assert!(caught.is_err());
        assert_eq!(host.phase(), Phase::Updating);
        assert_eq!(host.click(1), Err(HostError::Reentrant));
    }

    #[test]
    fn test_effect_writing_state_settles() {
        let title = RecordingTitle::new();
        let mut host = HeadlessHost::new(
            |_: &mut Scheduler| {
                let (n, set_n) = use_state(|| 0u32);
                let title = title_sink();
                use_effect(n, move || {
                    title.set_title(&format!("n={n}"));
                    if n < 3 {
                        set_n.set(n + 1);
                    }
                    Dispose::empty()
                });
                Text(format!("{n}"))
            },
            title.sink(),
            HostConfig {
                initial_title: None,
                inspector: true,
            },
        );
        host.mount().expect("mount");
        assert_eq!(title.history(), vec!["n=0", "n=1", "n=2", "n=3"]);
        assert_eq!(host.frame_count(), 4);
    }
}

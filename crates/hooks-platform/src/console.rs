//! Line-driven runner: a terminal stands in for the window.

use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Context;
use hooks_core::{Scheduler, SharedTitleSink, View};
use hooks_devtools::Inspector;

use crate::{ConsoleTitle, HeadlessHost, HostConfig};

const HELP: &str = "commands: click [id] | render | tree | help | quit";

/// Runs `root` against stdin/stdout until `quit` or EOF.
pub fn run_console_app(root: impl FnMut(&mut Scheduler) -> View + 'static) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_console_session(
        root,
        Rc::new(ConsoleTitle),
        HostConfig::from_env(),
        stdin.lock(),
        stdout.lock(),
    )
}

/// Host errors are reported on `out` and the session continues; only I/O
/// failures end it early.
pub fn run_console_session(
    root: impl FnMut(&mut Scheduler) -> View + 'static,
    title: SharedTitleSink,
    config: HostConfig,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    let mut host = HeadlessHost::new(root, title, config);
    let frame = host.mount().context("mounting root")?;
    writeln!(out, "{}", Inspector::outline(&frame.root))?;
    writeln!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            continue;
        };

        let result = match cmd {
            "click" | "c" => match words.next() {
                Some(raw) => match raw.parse::<u64>() {
                    Ok(id) => host.click(id),
                    Err(_) => {
                        writeln!(out, "not a view id: {raw}")?;
                        continue;
                    }
                },
                None => {
                    let first = host
                        .frame()
                        .and_then(|f| f.hit_regions.first())
                        .map(|h| h.id);
                    match first {
                        Some(id) => host.click(id),
                        None => {
                            writeln!(out, "nothing to click")?;
                            continue;
                        }
                    }
                }
            },
            "render" | "r" => host.render().map(|_| ()),
            "tree" | "t" => Ok(()),
            "help" | "h" | "?" => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            "quit" | "q" | "exit" => break,
            other => {
                writeln!(out, "unknown command: {other}")?;
                continue;
            }
        };

        match result {
            Ok(()) => {
                if let Some(root) = host.root() {
                    writeln!(out, "{}", Inspector::outline(root))?;
                }
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    host.teardown();
    writeln!(out, "bye")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingTitle;
    use hooks_core::*;
    use hooks_ui::{Button, Column};

    fn toggler(_s: &mut Scheduler) -> View {
        let (on, set_on) = use_state(|| false);
        let title = title_sink();
        use_effect(on, move || {
            title.set_title(if on { "on" } else { "off" });
            Dispose::empty()
        });
        Column(Modifier::new()).with_children(vec![Button(
            if on { "on" } else { "off" },
            move || set_on.set(!on),
        )])
    }

    fn session(script: &str) -> (String, RecordingTitle) {
        let title = RecordingTitle::new();
        let mut out = Vec::new();
        run_console_session(
            toggler,
            title.sink(),
            HostConfig {
                initial_title: None,
                inspector: false,
            },
            script.as_bytes(),
            &mut out,
        )
        .expect("session");
        (String::from_utf8(out).expect("utf8"), title)
    }

    #[test]
    fn test_clicks_and_quit() {
        let (out, title) = session("click\nc 2\nquit\nclick\n");
        assert_eq!(title.history(), vec!["off", "on", "off"]);
        assert!(out.contains("#2 Button \"on\""));
        assert!(out.trim_end().ends_with("bye"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (out, title) = session("click 1\nclick 42\nclick x\nfrobnicate\n\nrender\n");
        assert!(out.contains("error: view 1 does not accept clicks"));
        assert!(out.contains("error: no view with id 42 in the current frame"));
        assert!(out.contains("not a view id: x"));
        assert!(out.contains("unknown command: frobnicate"));
        assert_eq!(title.writes(), 1);
        assert!(out.trim_end().ends_with("bye"));
    }
}

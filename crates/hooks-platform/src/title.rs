//! Title sinks a host can inject.

use std::cell::RefCell;
use std::rc::Rc;

use hooks_core::{SharedTitleSink, TitleSink};

/// Keeps every title written, oldest first. Clones share the history.
#[derive(Clone, Debug, Default)]
pub struct RecordingTitle(Rc<RefCell<Vec<String>>>);

impl RecordingTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.0.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn sink(&self) -> SharedTitleSink {
        Rc::new(self.clone())
    }
}

impl TitleSink for RecordingTitle {
    fn set_title(&self, title: &str) {
        self.0.borrow_mut().push(title.to_string());
    }
}

/// Prints `title: ...` lines to stdout, standing in for a window title bar.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTitle;

impl TitleSink for ConsoleTitle {
    fn set_title(&self, title: &str) {
        log::info!("title -> {title:?}");
        println!("title: {title}");
    }
}

//! Seams to the environment that owns the component instance.

use std::rc::Rc;

/// Write-through side channel for the window/document title.
///
/// Components never reach for a global; the host injects one of these via
/// [`with_title_sink`](crate::with_title_sink) and effects read it back with
/// [`title_sink`](crate::title_sink).
pub trait TitleSink {
    fn set_title(&self, title: &str);
}

impl<F: Fn(&str)> TitleSink for F {
    fn set_title(&self, title: &str) {
        self(title)
    }
}

/// Sink used when no host provided one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardTitle;

impl TitleSink for DiscardTitle {
    fn set_title(&self, title: &str) {
        log::debug!("no title sink installed; dropping {title:?}");
    }
}

pub type SharedTitleSink = Rc<dyn TitleSink>;

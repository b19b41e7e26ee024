/// Presentation hints attached to a `View`. The headless host never lays
/// anything out, so this only carries what tests and the inspector look at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifier {
    /// Style class, as a stylesheet would reference it (`App-header`, ...).
    pub class: Option<String>,
    /// Stable tag for finding a node from tests.
    pub test_tag: Option<String>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }
}

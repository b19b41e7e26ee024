use crate::Modifier;
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    Column,
    Header,
    Paragraph,
    Image {
        src: String,
        alt: String,
    },
    Text {
        text: String,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
}

impl ViewKind {
    /// Short kind name used in logs and outlines.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Column => "Column",
            ViewKind::Header => "Header",
            ViewKind::Paragraph => "Paragraph",
            ViewKind::Image { .. } => "Image",
            ViewKind::Text { .. } => "Text",
            ViewKind::Button { .. } => "Button",
        }
    }
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Header => write!(f, "Header"),
            ViewKind::Paragraph => write!(f, "Paragraph"),
            ViewKind::Image { src, alt } => f
                .debug_struct("Image")
                .field("src", src)
                .field("alt", alt)
                .finish(),
            ViewKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ViewKind::Button { text, on_click } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
        }
    }
}

/// Callbacks never compare; only their presence does.
impl PartialEq for ViewKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ViewKind::Column, ViewKind::Column)
            | (ViewKind::Header, ViewKind::Header)
            | (ViewKind::Paragraph, ViewKind::Paragraph) => true,
            (ViewKind::Image { src: a, alt: b }, ViewKind::Image { src: c, alt: d }) => {
                a == c && b == d
            }
            (ViewKind::Text { text: a }, ViewKind::Text { text: b }) => a == b,
            (
                ViewKind::Button {
                    text: a,
                    on_click: ca,
                },
                ViewKind::Button {
                    text: b,
                    on_click: cb,
                },
            ) => a == b && ca.is_some() == cb.is_some(),
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first search by id.
    pub fn find(&self, id: ViewId) -> Option<&View> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(View::node_count).sum::<usize>()
    }
}

use serde::Serialize;
use web_time::Instant;

use hooks_core::{Semantics, View, ViewKind};

pub struct Hud {
    pub inspector_enabled: bool,
    frame_count: u64,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            frame_count: 0,
            metrics: None,
        }
    }
    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn record(&mut self, m: Metrics) {
        self.frame_count += 1;
        self.metrics = Some(m);
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!("frame: {}", self.frame_count)];
        if let Some(m) = &self.metrics {
            lines.push(format!("build+commit: {:.2} ms", m.build_commit_ms));
            lines.push(format!("nodes: {}", m.nodes));
            lines.push(format!("effects: {}", m.effects_run));
        }
        lines.join("  |  ")
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Metrics {
    pub build_commit_ms: f32,
    pub nodes: usize,
    pub effects_run: usize,
}

/// Wall-clock stopwatch for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimer(Instant);

impl FrameTimer {
    pub fn start() -> Self {
        Self(Instant::now())
    }
    pub fn elapsed_ms(&self) -> f32 {
        self.0.elapsed().as_secs_f32() * 1000.0
    }
}

/// Serializable mirror of a committed `View`, minus callbacks.
#[derive(Clone, Debug, Serialize)]
pub struct TreeNode {
    pub id: u64,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantics: Option<Semantics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

pub struct Inspector {
    pub hud: Hud,
}
impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    /// Records frame metrics; logs the HUD line when the inspector is on.
    pub fn frame(&mut self, m: Metrics) {
        self.hud.record(m);
        if self.hud.inspector_enabled {
            log::debug!("{}", self.hud.summary());
        }
    }

    /// One line per node, two spaces of indent per level.
    pub fn outline(root: &View) -> String {
        fn line(v: &View, depth: usize, out: &mut Vec<String>) {
            let mut s = format!("{}#{} {}", "  ".repeat(depth), v.id, v.kind.name());
            match &v.kind {
                ViewKind::Text { text } | ViewKind::Button { text, .. } => {
                    s.push_str(&format!(" {text:?}"));
                }
                ViewKind::Image { src, alt } => {
                    s.push_str(&format!(" {alt:?} src={src}"));
                }
                ViewKind::Column | ViewKind::Header | ViewKind::Paragraph => {}
            }
            if let Some(class) = &v.modifier.class {
                s.push_str(&format!(" .{class}"));
            }
            out.push(s);
            for c in &v.children {
                line(c, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        line(root, 0, &mut out);
        out.join("\n")
    }

    pub fn snapshot(root: &View) -> TreeNode {
        let text = match &root.kind {
            ViewKind::Text { text } | ViewKind::Button { text, .. } => Some(text.clone()),
            ViewKind::Image { alt, .. } => Some(alt.clone()),
            ViewKind::Column | ViewKind::Header | ViewKind::Paragraph => None,
        };
        TreeNode {
            id: root.id,
            kind: root.kind.name(),
            text,
            class: root.modifier.class.clone(),
            semantics: root.semantics.clone(),
            children: root.children.iter().map(Inspector::snapshot).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooks_core::Modifier;
    use hooks_ui::{Button, Column, Header, Image, Paragraph, Text, commit};

    fn tree() -> View {
        let root = Column(Modifier::new().class("App")).with_children(vec![
            Header(Modifier::new().class("App-header")).with_children(vec![
                Image(Modifier::new().class("App-logo"), "logo.svg", "logo"),
                Text("React Hooks"),
            ]),
            Column(Modifier::new()).with_children(vec![
                Paragraph(),
                Button("You Clicked me 0 times", || {}),
            ]),
        ]);
        commit(root, None).root
    }

    #[test]
    fn test_outline() {
        insta::assert_snapshot!(Inspector::outline(&tree()), @r#"
        #1 Column .App
          #2 Header .App-header
            #3 Image "logo" src=logo.svg .App-logo
            #4 Text "React Hooks"
          #5 Column
            #6 Paragraph
            #7 Button "You Clicked me 0 times"
        "#);
    }

    #[test]
    fn test_snapshot_serializes_without_callbacks() {
        let json = serde_json::to_value(Inspector::snapshot(&tree())).expect("serialize");
        assert_eq!(json["kind"], "Column");
        assert_eq!(json["class"], "App");
        let button = &json["children"][1]["children"][1];
        assert_eq!(button["kind"], "Button");
        assert_eq!(button["text"], "You Clicked me 0 times");
        assert_eq!(button["semantics"]["role"], "Button");
        assert!(json["children"][1]["children"][0].get("children").is_none());
    }

    #[test]
    fn test_hud_summary() {
        let mut hud = Hud::new();
        assert_eq!(hud.summary(), "frame: 0");
        hud.record(Metrics {
            build_commit_ms: 0.5,
            nodes: 7,
            effects_run: 1,
        });
        assert_eq!(
            hud.summary(),
            "frame: 1  |  build+commit: 0.50 ms  |  nodes: 7  |  effects: 1"
        );
    }
}

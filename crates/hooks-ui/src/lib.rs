#![allow(non_snake_case)]
//! Widgets and the commit pass.

use std::rc::Rc;

use hooks_core::*;

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Header(modifier: Modifier) -> View {
    View::new(0, ViewKind::Header)
        .modifier(modifier)
        .semantics(Semantics::new(Role::Header))
}

/// Empty block-level spacer.
pub fn Paragraph() -> View {
    View::new(0, ViewKind::Paragraph)
}

pub fn Text(text: impl Into<String>) -> View {
    let text = text.into();
    View::new(0, ViewKind::Text { text: text.clone() })
        .semantics(Semantics::new(Role::Text).label(text))
}

pub fn Image(modifier: Modifier, src: impl Into<String>, alt: impl Into<String>) -> View {
    let alt = alt.into();
    View::new(
        0,
        ViewKind::Image {
            src: src.into(),
            alt: alt.clone(),
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::Image).label(alt))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics {
        role: Role::Button,
        label: Some(text),
        focused: false,
        enabled: true,
    })
}

/// Stamps ids depth-first from 1 and collects hit regions and semantics.
///
/// `focused` marks the matching semantics node; it has no other effect.
pub fn commit(root: View, focused: Option<u64>) -> Frame {
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }

    fn walk(v: &View, focused: Option<u64>, hits: &mut Vec<HitRegion>, sems: &mut Vec<SemNode>) {
        if let ViewKind::Button { text, on_click } = &v.kind {
            hits.push(HitRegion {
                id: v.id,
                label: text.clone(),
                on_click: on_click.clone(),
            });
        }
        if let Some(s) = &v.semantics {
            sems.push(SemNode {
                id: v.id,
                role: s.role,
                label: s.label.clone(),
                focused: s.focused || focused == Some(v.id),
                enabled: s.enabled,
            });
        }
        for c in &v.children {
            walk(c, focused, hits, sems);
        }
    }

    let mut id = 1u64;
    let root = stamp(root, &mut id);

    let mut hits = Vec::new();
    let mut sems = Vec::new();
    walk(&root, focused, &mut hits, &mut sems);
    log::trace!(
        "commit: {} node(s), {} hit region(s)",
        id - 1,
        hits.len()
    );

    Frame {
        root,
        hit_regions: hits,
        semantics_nodes: sems,
    }
}

#![allow(non_snake_case)]
//! Click counter: one piece of state, one title effect gated on it.

use hooks_core::prelude::*;
use hooks_ui::*;

pub const LOGO_SRC: &str = "logo.svg";
pub const HEADING: &str = "React Hooks";
pub const COUNTER_TAG: &str = "counter";

pub fn title_text(count: u64) -> String {
    format!("You clicked {count} times")
}

pub fn button_label(count: u64) -> String {
    format!("You Clicked me {count} times")
}

pub fn App(_s: &mut Scheduler) -> View {
    let (count, set_count) = use_state(|| 0u64);

    let title = title_sink();
    use_effect(count, move || {
        title.set_title(&title_text(count));
        // nothing to release
        Dispose::empty()
    });

    Column(Modifier::new().class("App")).with_children(vec![
        Header(Modifier::new().class("App-header")).with_children(vec![
            Image(Modifier::new().class("App-logo"), LOGO_SRC, "logo"),
            Text(HEADING),
        ]),
        Column(Modifier::new()).with_children(vec![
            Paragraph(),
            Button(button_label(count), move || set_count.set(count + 1))
                .modifier(Modifier::new().test_tag(COUNTER_TAG)),
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hooks_platform::{HeadlessHost, HostConfig, Phase, RecordingTitle};

    fn mounted() -> (HeadlessHost, RecordingTitle) {
        let title = RecordingTitle::new();
        let mut host = HeadlessHost::new(
            App,
            title.sink(),
            HostConfig {
                initial_title: None,
                inspector: false,
            },
        );
        host.mount().expect("mount");
        (host, title)
    }

    fn counter(root: &View) -> Option<&View> {
        if root.modifier.test_tag.as_deref() == Some(COUNTER_TAG) {
            return Some(root);
        }
        root.children.iter().find_map(counter)
    }

    fn displayed(host: &HeadlessHost) -> String {
        let root = host.root().expect("mounted");
        match &counter(root).expect("counter button").kind {
            ViewKind::Button { text, .. } => text.clone(),
            other => panic!("counter is not a button: {other:?}"),
        }
    }

    fn click(host: &mut HeadlessHost) {
        let id = host
            .root()
            .and_then(counter)
            .map(|v| v.id)
            .expect("counter button");
        host.click(id).expect("click");
    }

    #[test]
    fn test_initial_render() {
        let (host, title) = mounted();
        assert_eq!(displayed(&host), "You Clicked me 0 times");
        assert_eq!(title.current().as_deref(), Some("You clicked 0 times"));
        assert_eq!(title.writes(), 1);
    }

    #[test]
    fn test_structure() {
        let (host, _) = mounted();
        let root = host.root().expect("mounted");
        assert_eq!(root.modifier.class.as_deref(), Some("App"));

        let header = &root.children[0];
        assert_eq!(header.kind, ViewKind::Header);
        assert_eq!(
            header.children[0].kind,
            ViewKind::Image {
                src: LOGO_SRC.into(),
                alt: "logo".into()
            }
        );
        assert_eq!(
            header.children[1].kind,
            ViewKind::Text {
                text: HEADING.into()
            }
        );
        assert_eq!(root.children[1].children[0].kind, ViewKind::Paragraph);
    }

    #[test]
    fn test_n_clicks() {
        for n in [1u64, 2, 5, 17] {
            let (mut host, title) = mounted();
            for _ in 0..n {
                click(&mut host);
            }
            assert_eq!(displayed(&host), button_label(n));
            assert_eq!(title.current(), Some(title_text(n)));
        }
    }

    #[test]
    fn test_monotonic_by_one() {
        let (mut host, title) = mounted();
        for _ in 0..10 {
            click(&mut host);
        }
        let expected: Vec<String> = (0..=10).map(title_text).collect();
        assert_eq!(title.history(), expected);
        assert_eq!(host.phase(), Phase::Idle);
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let (mut host, title) = mounted();
        click(&mut host);
        let before = host.root().cloned().expect("mounted");
        let after = host.render().expect("render").root.clone();
        assert_eq!(before, after);
        let after_again = host.render().expect("render").root.clone();
        assert_eq!(after, after_again);
        assert_eq!(title.writes(), 2);
    }

    #[test]
    fn test_second_host_leaves_first_alone() {
        let (mut a, title_a) = mounted();
        click(&mut a);
        click(&mut a);
        {
            let (mut b, title_b) = mounted();
            click(&mut b);
            assert_eq!(displayed(&b), button_label(1));
            assert_eq!(title_b.current(), Some(title_text(1)));
        }
        assert_eq!(displayed(&a), button_label(2));
        click(&mut a);
        assert_eq!(displayed(&a), button_label(3));
        let expected: Vec<String> = (0..=3).map(title_text).collect();
        assert_eq!(title_a.history(), expected);
    }

    #[test]
    fn test_teardown() {
        let (mut host, title) = mounted();
        click(&mut host);
        host.teardown();
        assert_eq!(host.phase(), Phase::TornDown);
        assert_eq!(title.writes(), 2);
        assert_eq!(host.click(7), Err(HostError::TornDown));
    }
}

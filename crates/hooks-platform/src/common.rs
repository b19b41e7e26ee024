use hooks_core::{Frame, HitRegion};

pub(crate) fn hit_index_by_id(frame: &Frame, id: u64) -> Option<usize> {
    frame.hit_regions.iter().position(|h| h.id == id)
}

/// First button (in tree order) whose label starts with `prefix`.
pub(crate) fn button_by_label<'a>(frame: &'a Frame, prefix: &str) -> Option<&'a HitRegion> {
    frame
        .hit_regions
        .iter()
        .find(|h| h.on_click.is_some() && h.label.starts_with(prefix))
}

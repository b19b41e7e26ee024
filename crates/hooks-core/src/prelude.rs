pub use crate::effects::{Dispose, on_unmount};
pub use crate::effects_ext::{side_effect, use_effect};
pub use crate::error::HostError;
pub use crate::host::{DiscardTitle, SharedTitleSink, TitleSink};
pub use crate::locals::{title_sink, with_title_sink};
pub use crate::modifier::Modifier;
pub use crate::runtime::{Frame, HitRegion, Scheduler, SemNode, remember, remember_with_key};
pub use crate::scope::Scope;
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::state::{SetState, use_state};
pub use crate::view::{View, ViewId, ViewKind};

//! # State, Effects, and Cleanup
//!
//! Hooks uses a small reactive core instead of an explicit widget tree with
//! mutable fields. There are three main pieces:
//!
//! - `use_state` / `Signal<T>` — remembered, replace‑on‑write state.
//! - `remember*` — lifecycle‑aware storage bound to the component instance.
//! - `use_effect` — post‑commit side effects gated on a dependency value, with
//!   cleanup.
//!
//! ## State
//!
//! `use_state` returns the value for this frame plus a setter. Setting
//! replaces the value (it never merges) and asks the host for a new frame:
//!
//! ```rust
//! use hooks_core::*;
//!
//! fn Counter(_s: &mut Scheduler) -> View {
//!     let (count, set_count) = use_state(|| 0u64);
//!     View::new(
//!         0,
//!         ViewKind::Button {
//!             text: format!("Count = {count}"),
//!             on_click: Some(std::rc::Rc::new(move || set_count.set(count + 1))),
//!         },
//!     )
//! }
//! ```
//!
//! - `remember` is order‑based: the Nth call in a composition always refers
//!   to the Nth stored value.
//! - `remember_with_key` is key‑based and stable across conditional branches.
//!
//! ## Effects and cleanup
//!
//! `use_effect(deps, f)` never runs during the build. If `deps` differs from
//! the last run it is queued, and the host runs it right after the frame is
//! committed. The `Dispose` it returns runs before the next run and once more
//! at teardown:
//!
//! ```rust
//! use hooks_core::*;
//!
//! fn Titled(_s: &mut Scheduler) -> View {
//!     let (count, _) = use_state(|| 0u64);
//!     let title = title_sink();
//!     use_effect(count, move || {
//!         title.set_title(&format!("count is {count}"));
//!         Dispose::empty()
//!     });
//!     View::new(0, ViewKind::Column)
//! }
//! ```
//!
//! Everything is single-threaded. Each `Scheduler` owns its instance's slots
//! and installs them on the thread only while it builds or flushes; scopes and
//! locals are thread-local, and the `Scheduler` serialises build → commit → effects.

pub mod effects;
pub mod effects_ext;
pub mod error;
pub mod host;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod view;

pub use effects::*;
pub use effects_ext::*;
pub use error::*;
pub use host::*;
pub use locals::*;
pub use modifier::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;

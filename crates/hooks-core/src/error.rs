use crate::ViewId;

/// Misuse of a host: dispatching input it can't deliver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host has not been mounted")]
    NotMounted,
    #[error("component instance was torn down")]
    TornDown,
    #[error("no view with id {0} in the current frame")]
    UnknownTarget(ViewId),
    #[error("view {0} does not accept clicks")]
    NotClickable(ViewId),
    #[error("input dispatched while a previous update is still in progress")]
    Reentrant,
    #[error("no button labelled {0:?}")]
    NoSuchButton(String),
}

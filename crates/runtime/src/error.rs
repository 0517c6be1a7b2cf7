//! Unified error type surfaced by the runtime API.
//!
//! Wraps content mismatches, bad actor references and report I/O so clients
//! can bubble them up with consistent context. Configuration problems in the
//! wave table are not errors here: the controller reports them as events and
//! disables itself.
use horde_core::ActorId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires {part} before building")]
    MissingContent { part: &'static str },

    #[error("campaign references kinds missing from the bestiary: {kinds:?}")]
    UnknownKinds { kinds: Vec<String> },

    #[error("spawn kind `{kind}` is not in the bestiary")]
    UnknownKind { kind: String },

    #[error("passive `{name}` is not in the catalog")]
    UnknownPassive { name: String },

    #[error("{0} is not a live hostile")]
    UnknownActor(ActorId),

    #[error("failed to serialize run report")]
    Report(#[from] serde_json::Error),

    #[error("failed to write run report")]
    Io(#[from] std::io::Error),
}

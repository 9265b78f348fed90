use thiserror::Error;

/// Everything that can go wrong building or driving an [`Orrery`](crate::Orrery).
///
/// Construction errors are configuration mistakes and are surfaced immediately.
/// The only runtime failure is picking a body that does not exist.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("body `{id}` has invalid orbit radius {radius} (must be > 0)")]
    InvalidOrbitRadius { id: String, radius: f32 },

    #[error("duplicate body id `{0}`")]
    DuplicateBody(String),

    #[error("body id must not be empty")]
    EmptyBodyId,

    #[error("twinkle field needs at least one star")]
    EmptyTwinkleField,

    #[error("body `{id}` has invalid material color `{value}` (expected #rrggbb)")]
    InvalidColor { id: String, value: String },

    #[error("invalid camera transition pacing: {0}")]
    InvalidTransition(String),

    #[error("no body with id `{0}`")]
    NotFound(String),

    #[error("failed to parse orrery config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrreryError>;

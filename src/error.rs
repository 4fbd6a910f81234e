use thiserror::Error;

/// Errors produced by the harness.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed harness configuration, e.g. a non-positive iteration count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two cases in the same suite share a name.
    #[error("duplicate case name `{0}`")]
    DuplicateName(String),

    /// The timing primitive returned an unusable reading.
    #[error("timer fault: {0}")]
    TimerFault(String),

    /// Suite-level setup failed. Fatal to the whole run; no case executes.
    #[error("suite setup failed: {0}")]
    SetupFailed(#[source] anyhow::Error),

    /// A case's workload failed during timed execution. Non-fatal to the
    /// suite; the remaining cases still run.
    #[error("case `{name}` failed: {reason}")]
    CaseFailed { name: String, reason: String },
}

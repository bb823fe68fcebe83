use std::path::PathBuf;

/// Why a single log record was rejected by the parser.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("expected at least 6 fields, found {0}")]
    TooFewFields(usize),
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("empty vehicle id")]
    EmptyVehicleId,
    #[error("unknown event type {0:?}")]
    UnknownEventKind(String),
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}

/// Errors reading an event log as a whole.
#[derive(Debug, thiserror::Error)]
pub enum EventLogError {
    #[error("failed to open event log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write event log: {0}")]
    Write(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

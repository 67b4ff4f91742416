use crate::model::GroupId;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("group '{0}' not found")]
    GroupNotFound(GroupId),
    #[error("failed to access '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed ledger data: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to load group '{group}'")]
    Ledger {
        group: GroupId,
        #[source]
        source: LedgerError,
    },
    #[error("failed to record payment {from} -> {to}")]
    Recording {
        from: String,
        to: String,
        #[source]
        source: LedgerError,
    },
}

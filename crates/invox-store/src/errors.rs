//! Error handling for invox-store
//!
//! Backend-local failures are modelled with a `thiserror` enum and converted
//! into the canonical structured error at the crate boundary, with the
//! failing operation attached as context.

use invox_core::errors::{ErrorKind, LedgerError};
use thiserror::Error;

/// Failures local to a store backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BackendError {
    /// Convert into the canonical error, naming the failing operation
    pub fn into_ledger(self, operation: &str) -> LedgerError {
        LedgerError::from(self).with_op(operation)
    }
}

impl From<BackendError> for LedgerError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Io(e) => LedgerError::new(ErrorKind::Io).with_message(e.to_string()),
            BackendError::Json(e) => {
                LedgerError::new(ErrorKind::Serialization).with_message(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_io_maps_to_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LedgerError = BackendError::from(io).into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_backend_json_maps_to_serialization_kind() {
        let json = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: LedgerError = BackendError::from(json).into();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn test_into_ledger_attaches_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BackendError::from(io).into_ledger("open_store");

        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.op(), Some("open_store"));
        assert!(err.message().contains("denied"));
    }
}

use invox_core_types::{RequestId, TraceId};

/// Result type alias using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the invoice ledger. Each kind maps to a stable error code that can be
/// used for programmatic error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Validation
    /// Input rejected before any write (e.g. empty replace-all mapping)
    InvalidInput,
    /// A requested path or key does not exist
    NotFound,
    /// Export or download requested with no invoices present
    MissingInvoiceData,

    // Backup pipeline
    /// BackupCount disagrees with the actual retained-snapshot set.
    /// Detected incidentally (eviction query returned nothing while the
    /// counter says the store is at capacity); tolerated, never fatal.
    InconsistentBackupCount,

    // Integration/IO
    /// An underlying store operation failed; propagated unchanged, no retry
    StoreUnavailable,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::MissingInvoiceData => "ERR_MISSING_INVOICE_DATA",
            ErrorKind::InconsistentBackupCount => "ERR_INCONSISTENT_BACKUP_COUNT",
            ErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification plus context for debugging: the operation that
/// failed, the store path involved, and correlation identifiers. Context is
/// attached with builder methods so call sites only state what they know.
#[derive(Debug, Clone)]
pub struct LedgerError {
    kind: ErrorKind,
    op: Option<String>,
    path: Option<String>,
    key: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<LedgerError>>,
}

impl LedgerError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            key: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add store path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add store key context (e.g. the snapshot key being evicted)
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: LedgerError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the store path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the store key context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&LedgerError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::new(ErrorKind::Serialization).with_message(err.to_string())
    }
}

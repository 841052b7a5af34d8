use std::path::PathBuf;

/// Failures raised while building or writing a config record.
#[derive(Debug)]
pub enum EncodeError {
    /// Caller supplied the wrong number of values.
    ContractViolation { expected: usize, actual: usize },
    /// A value does not fit in a signed 32-bit integer.
    OutOfRange { index: usize, value: i64 },
    /// The sink could not be created, written or flushed.
    Io {
        path: Option<PathBuf>,
        source: std::io::Error,
    },
}

impl EncodeError {
    pub fn io(source: std::io::Error) -> Self {
        EncodeError::Io { path: None, source }
    }

    /// True for errors caused by the caller's input rather than the sink.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            EncodeError::ContractViolation { .. } | EncodeError::OutOfRange { .. }
        )
    }

    pub(crate) fn with_path(
        self,
        path: impl Into<PathBuf>,
    ) -> Self {
        match self {
            EncodeError::Io { source, .. } => EncodeError::Io {
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for EncodeError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            EncodeError::ContractViolation { expected, actual } => {
                write!(f, "expected exactly {expected} values, got {actual}")
            }
            EncodeError::OutOfRange { index, value } => write!(
                f,
                "value {value} at position {} does not fit in a signed 32-bit integer",
                index + 1
            ),
            EncodeError::Io {
                path: Some(path), ..
            } => write!(f, "failed to write {}", path.display()),
            EncodeError::Io { path: None, .. } => write!(f, "failed to write config record"),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EncodeError {
    fn from(source: std::io::Error) -> Self {
        EncodeError::io(source)
    }
}

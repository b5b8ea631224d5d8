use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LodestoneError {
    IoError(std::io::Error),
    /// The input carried gzip magic but could not be inflated.
    Decompression(String),
    /// A tag kind byte outside 0..=12.
    UnknownTagKind { kind: u8, offset: u64 },
    InvalidPayload { offset: u64, reason: String },
    /// A read needed more bytes than the buffer has left.
    Truncated {
        offset: u64,
        needed: usize,
        available: usize,
    },
    /// A schematic field is present but has the wrong shape.
    InvalidField { field: String, reason: String },
    /// The root compound matches none of the known schematic layouts.
    UnsupportedDialect { keys: Vec<String> },
    InvalidConfig(String),
}

/// Coarse grouping of `LodestoneError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Io,
    Decompression,
    Format,
    Truncation,
    UnsupportedDialect,
    Config,
}

impl LodestoneError {
    pub fn class(&self) -> ErrorClass {
        match self {
            LodestoneError::IoError(_) => ErrorClass::Io,
            LodestoneError::Decompression(_) => ErrorClass::Decompression,
            LodestoneError::UnknownTagKind { .. }
            | LodestoneError::InvalidPayload { .. }
            | LodestoneError::InvalidField { .. } => ErrorClass::Format,
            LodestoneError::Truncated { .. } => ErrorClass::Truncation,
            LodestoneError::UnsupportedDialect { .. } => ErrorClass::UnsupportedDialect,
            LodestoneError::InvalidConfig(_) => ErrorClass::Config,
        }
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LodestoneError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LodestoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LodestoneError::IoError(err) => write!(f, "IO error: {}", err),
            LodestoneError::Decompression(msg) => write!(f, "Decompression error: {}", msg),
            LodestoneError::UnknownTagKind { kind, offset } => write!(
                f,
                "Format error: unknown tag kind {:#04x} at offset {}",
                kind, offset
            ),
            LodestoneError::InvalidPayload { offset, reason } => {
                write!(f, "Format error at offset {}: {}", offset, reason)
            }
            LodestoneError::Truncated {
                offset,
                needed,
                available,
            } => write!(
                f,
                "Truncation error: needed {} bytes at offset {}, only {} available",
                needed, offset, available
            ),
            LodestoneError::InvalidField { field, reason } => {
                write!(f, "Format error in field '{}': {}", field, reason)
            }
            LodestoneError::UnsupportedDialect { keys } => write!(
                f,
                "Unsupported schematic dialect (top-level keys: [{}])",
                keys.join(", ")
            ),
            LodestoneError::InvalidConfig(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl Error for LodestoneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LodestoneError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LodestoneError {
    fn from(err: std::io::Error) -> Self {
        LodestoneError::IoError(err)
    }
}

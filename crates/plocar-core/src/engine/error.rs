use super::state::DecodeStage;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding the contents of a PLOCAR stream.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unsupported precision code {0}: only 'prec = 4, 8' are supported")]
    UnsupportedPrecision(i32),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid record for ion {ion}: nlm = {nlm} is outside [0, {nlmmax}]")]
    InvalidRecord { ion: usize, nlm: i32, nlmmax: i32 },

    #[error("Unexpected end of file while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("I/O error while reading {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

impl FormatError {
    /// Classifies a failed read: short reads become [`FormatError::UnexpectedEof`].
    pub fn from_io(source: io::Error, context: &'static str) -> Self {
        if source.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof { context }
        } else {
            Self::Io { context, source }
        }
    }
}

/// The error returned by the public decode entry points.
#[derive(Debug, Error)]
pub enum PlocarError {
    #[error("Error opening {path}: {source}", path = path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading {origin} while {stage}: {source}")]
    Format {
        origin: String,
        stage: DecodeStage,
        #[source]
        source: FormatError,
    },
}

impl PlocarError {
    /// The underlying format error, if the failure happened after the file was opened.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::FileOpen { .. } => None,
            Self::Format { source, .. } => Some(source),
        }
    }

    /// The stage at which decoding stopped, if the failure happened after the file was opened.
    pub fn stage(&self) -> Option<DecodeStage> {
        match self {
            Self::FileOpen { .. } => None,
            Self::Format { stage, .. } => Some(*stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reads_are_classified_as_unexpected_eof() {
        let err = FormatError::from_io(io::Error::from(io::ErrorKind::UnexpectedEof), "weight");
        assert!(matches!(err, FormatError::UnexpectedEof { context: "weight" }));
    }

    #[test]
    fn other_read_failures_keep_the_system_message() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = FormatError::from_io(source, "header field 'nion'");
        assert!(matches!(err, FormatError::Io { .. }));
        assert_eq!(
            err.to_string(),
            "I/O error while reading header field 'nion': access denied"
        );
    }

    #[test]
    fn format_error_message_names_origin_and_stage() {
        let err = PlocarError::Format {
            origin: "PLOCAR".into(),
            stage: DecodeStage::Decoding,
            source: FormatError::UnexpectedEof {
                context: "PLO values",
            },
        };
        assert_eq!(
            err.to_string(),
            "Error reading PLOCAR while decoding records: Unexpected end of file while reading PLO values"
        );
        assert_eq!(err.stage(), Some(DecodeStage::Decoding));
        assert!(err.format_error().is_some());
    }

    #[test]
    fn file_open_error_has_no_stage() {
        let err = PlocarError::FileOpen {
            path: PathBuf::from("missing/PLOCAR"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("Error opening missing/PLOCAR: "));
        assert_eq!(err.stage(), None);
        assert!(err.format_error().is_none());
    }
}

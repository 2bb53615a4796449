//! Error types for roadgraph-core.

use thiserror::Error;

/// Structural rule a single record violated.
///
/// Produced by the record parser without any positional context; the loader
/// wraps it into [`Error::MalformedRecord`] together with the line number and
/// the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record separator left nothing to read a place from.
    #[error("record has no place descriptor")]
    MissingNodeDescriptor,

    /// The place descriptor did not split into `category` and `name`.
    #[error("place descriptor has {found} field(s), expected 2")]
    NodeFieldCount {
        /// Number of fields actually found.
        found: usize,
    },

    /// The place name is empty.
    #[error("place name is empty")]
    EmptyName,

    /// A neighbour descriptor has the wrong number of fields.
    #[error("neighbour descriptor #{index} has {found} field(s), expected {expected}")]
    EdgeFieldCount {
        /// 1-based position of the descriptor within the record.
        index: usize,
        /// Field count required by the active profile.
        expected: usize,
        /// Number of fields actually found.
        found: usize,
    },
}

/// Roadgraph error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A line does not match the structure of the active delimiter profile.
    #[error("malformed record at line {line} ({text:?}): {reason}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// The line, without its terminator.
        text: String,
        /// Which structural rule failed.
        #[source]
        reason: RecordError,
    },

    /// A neighbour descriptor names a place that was never declared.
    #[error("line {line}: road from '{source_name}' leads to undeclared place '{destination}'")]
    UnresolvedReference {
        /// 1-based line number.
        line: usize,
        /// Name of the place the road starts from.
        source_name: String,
        /// The destination name that could not be resolved.
        destination: String,
    },

    /// A matrix coordinate lies outside the fixed-size table.
    #[error("row {row} is out of range for a {len}x{len} matrix")]
    RowOutOfRange {
        /// The offending coordinate.
        row: usize,
        /// Side length of the matrix.
        len: usize,
    },

    /// A delimiter profile cannot be used to parse records.
    #[error("invalid delimiter profile: {0}")]
    InvalidProfile(String),

    /// Configuration could not be extracted.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading the source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for roadgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_display() {
        let err = Error::MalformedRecord {
            line: 3,
            text: "city".to_string(),
            reason: RecordError::NodeFieldCount { found: 1 },
        };
        assert_eq!(
            err.to_string(),
            "malformed record at line 3 (\"city\"): place descriptor has 1 field(s), expected 2"
        );
    }

    #[test]
    fn test_malformed_record_exposes_reason_as_source() {
        use std::error::Error as _;

        let err = Error::MalformedRecord {
            line: 1,
            text: "city:A|road:B".to_string(),
            reason: RecordError::EdgeFieldCount {
                index: 1,
                expected: 3,
                found: 2,
            },
        };
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            "neighbour descriptor #1 has 2 field(s), expected 3"
        );
    }

    #[test]
    fn test_unresolved_reference_display() {
        let err = Error::UnresolvedReference {
            line: 2,
            source_name: "A".to_string(),
            destination: "Z".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 2: road from 'A' leads to undeclared place 'Z'"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

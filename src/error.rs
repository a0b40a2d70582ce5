use core::fmt;

/// Result alias for `scatter`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by seed selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Length mismatch between the point matrix and a companion array.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// An assignment id referenced a cluster outside `[0, k)`.
    InvalidAssignment {
        /// The offending cluster id.
        id: usize,
        /// Number of clusters requested.
        n_clusters: usize,
    },

    /// An assignment stream entry could not be parsed.
    MalformedAssignment {
        /// 1-based line number of the offending entry.
        line: usize,
        /// Error message.
        message: String,
    },

    /// A cluster received no assigned rows, so its centroid is undefined.
    EmptyCluster {
        /// The empty cluster's id.
        cluster: usize,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::InvalidAssignment { id, n_clusters } => {
                write!(
                    f,
                    "assignment id {id} is out of range for {n_clusters} clusters"
                )
            }
            Error::MalformedAssignment { line, message } => {
                write!(f, "malformed assignment at line {line}: {message}")
            }
            Error::EmptyCluster { cluster } => {
                write!(f, "cluster {cluster} has no assigned rows")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

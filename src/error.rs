//! Error type shared by the model core and the Python bridge.

/// Possible model errors.
#[derive(Debug)]
pub enum MsisError {
    /// A 3-hour Ap history didn't have exactly 7 entries
    ApHistoryLength(usize),
    /// The inputs don't have the expected shape(s)
    InconsistentInputs,
    /// An array is not contiguous when it was assumed to be
    NotContiguous,
    /// The operation was aborted early
    Cancelled,
}

impl std::fmt::Display for MsisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MsisError::ApHistoryLength(len) => {
                write!(f, "Ap history must have exactly 7 entries, got {len}")
            }
            MsisError::InconsistentInputs => {
                write!(f, "inputs to the model have the wrong shape")
            }
            MsisError::NotContiguous => write!(f, "array slice not contiguous in memory"),
            MsisError::Cancelled => write!(f, "operation cancelled early"),
        }
    }
}

impl std::error::Error for MsisError {}

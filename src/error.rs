use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// Everything that can go wrong while building, training or persisting a network.
#[derive(Debug)]
pub enum NetError {
    /// A shape precondition was violated. `left` and `right` are the two
    /// conflicting dimensions, in operand order.
    DimensionMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    /// A matrix was built with zero rows or zero columns.
    EmptyMatrix,
    InvalidConfig(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl NetError {
    pub(crate) fn mismatch(what: &'static str, left: usize, right: usize) -> NetError {
        NetError::DimensionMismatch { what, left, right }
    }
}

impl Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::DimensionMismatch { what, left, right } => {
                write!(f, "dimension mismatch in {what}: {left} != {right}")
            }
            NetError::EmptyMatrix => write!(f, "a matrix needs at least one row and one column"),
            NetError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            NetError::Io(e) => write!(f, "i/o error: {e}"),
            NetError::Json(e) => write!(f, "malformed model snapshot: {e}"),
        }
    }
}

impl Error for NetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetError::Io(e) => Some(e),
            NetError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        NetError::Io(e)
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        NetError::Json(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mismatch_message_names_both_dimensions() {
        let err = NetError::mismatch("matrix multiply", 2, 1);
        assert_eq!(err.to_string(), "dimension mismatch in matrix multiply: 2 != 1");
    }
}

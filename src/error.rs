use std::collections::TryReserveError;
use std::error;
use std::fmt;
use std::io;
use std::result;

/// Errors surfaced by the collections in this crate.
#[derive(Debug)]
pub enum Error {
    /// A parameter was rejected before any mutation took place.
    InvalidArgument(&'static str),
    /// The operation requires at least one element.
    EmptyTree,
    /// The searched value is not stored in the tree.
    NotFound,
    /// Node or queue storage could not be reserved.
    AllocationFailed(TryReserveError),
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Error {
        Error::AllocationFailed(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::AllocationFailed(error) => Some(error),
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::EmptyTree => write!(f, "tree is empty"),
            Error::NotFound => write!(f, "value not found"),
            Error::AllocationFailed(error) => write!(f, "allocation failed: {}", error),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyTree.to_string(), "tree is empty");
        assert_eq!(Error::NotFound.to_string(), "value not found");
        assert_eq!(
            Error::InvalidArgument("chunk size must be non-zero").to_string(),
            "invalid argument: chunk size must be non-zero",
        );
    }

    #[test]
    fn test_from_io_error() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "disk full");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_try_reserve_error() {
        let mut vec: Vec<u64> = Vec::new();
        let reserve_err = vec.try_reserve_exact(usize::max_value()).unwrap_err();
        match Error::from(reserve_err) {
            Error::AllocationFailed(_) => {},
            other => panic!("unexpected error: {}", other),
        }
    }
}

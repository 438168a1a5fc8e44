//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = GuesstagError> = core::result::Result<T, E>;

#[derive(Debug)]
pub enum GuesstagError {
    InvalidTagSet(InvalidTagSetError),
    InvalidArgument(InvalidArgumentError),
}

impl GuesstagError {
    pub(crate) fn invalid_tag_set<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidTagSet(InvalidTagSetError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }
}

impl fmt::Display for GuesstagError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidTagSet(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
        }
    }
}

impl Error for GuesstagError {}

/// Error used when the tag vocabulary cannot back a guesser.
#[derive(Debug)]
pub struct InvalidTagSetError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidTagSetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidTagSetError: {}", self.msg)
    }
}

impl Error for InvalidTagSetError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

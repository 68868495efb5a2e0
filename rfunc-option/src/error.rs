use strum::EnumMessage;
use strum_macros::EnumMessage;
use thiserror::Error;

/// RFunc error kind
///
/// Every failure the library raises is one of these. None of them are
/// retried or swallowed internally; they surface at the point of violation.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumMessage)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// Invalid construction.
    ///
    /// A sequence was built from something that is not an ordered
    /// collection, or a present value was built from the absence marker.
    #[error("{target} cannot be constructed from {found}")]
    InvalidConstruction {
        /// The type that was being constructed
        target: &'static str,
        /// A rendering of the rejected input
        found: String,
    },
    /// Invalid return type.
    ///
    /// A callback that is required to return an option (or an ordered
    /// collection) returned something else.
    #[error("invalid return type {value}, expected {expected}")]
    InvalidReturnType {
        /// A rendering of the offending value
        value: String,
        /// The name of the expected type
        expected: &'static str,
    },
    /// Empty access.
    ///
    /// The first element of an empty sequence, or the value of an absent
    /// option, was requested through an accessor that cannot return an
    /// absence marker.
    #[error("{target} is empty")]
    EmptyAccess {
        /// A rendering of the empty container
        target: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_construction(target: &'static str, found: impl ToString) -> Self {
        Error::InvalidConstruction {
            target,
            found: found.to_string(),
        }
    }

    pub fn invalid_return_type(value: impl ToString, expected: &'static str) -> Self {
        Error::InvalidReturnType {
            value: value.to_string(),
            expected,
        }
    }

    pub fn empty_access(target: impl ToString) -> Self {
        Error::EmptyAccess {
            target: target.to_string(),
        }
    }

    /// A stable code identifying the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidConstruction { .. } => "RF0001",
            Error::InvalidReturnType { .. } => "RF0002",
            Error::EmptyAccess { .. } => "RF0003",
        }
    }

    /// The one-line summary of the error kind.
    pub fn message(&self) -> &str {
        self.documentation_pieces().0
    }

    /// A longer explanation of when the error kind is raised.
    pub fn note(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("").trim();
            let second = pieces.next().unwrap_or("").trim();
            (first, second)
        } else {
            ("", "")
        }
    }
}

use std::fmt;

use crate::Contact;

/// Result type alias for list operations
pub type Result<T> = std::result::Result<T, ListError>;

/// Failures reported by [`DynamicArray`](crate::DynamicArray).
///
/// A search miss is not an error; `search` returns `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Rejected constructor input
    InvalidArgument(String),
    /// The backing store could not be allocated or resized. `capacity` is the
    /// slot count asked for, saturated to `usize::MAX` when growth overflows.
    Allocation { capacity: usize },
    /// Removal from an array with no elements
    EmptyCollection,
    /// Index outside the live range
    IndexOutOfBounds { index: usize, length: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            ListError::Allocation { capacity } => {
                write!(f, "Allocation failed for capacity {capacity}")
            }
            ListError::EmptyCollection => write!(f, "Collection is empty"),
            ListError::IndexOutOfBounds { index, length } => {
                write!(f, "Index {index} out of bounds for length {length}")
            }
        }
    }
}

impl std::error::Error for ListError {}

/// A failed `push`. Holds the contact that was not inserted so the caller
/// keeps ownership of it.
#[derive(Debug)]
pub struct PushError {
    contact: Box<Contact>,
    error: ListError,
}

impl PushError {
    pub(crate) fn new(contact: Box<Contact>, error: ListError) -> Self {
        Self { contact, error }
    }

    pub fn error(&self) -> &ListError {
        &self.error
    }

    /// Takes back the rejected contact.
    pub fn into_inner(self) -> Box<Contact> {
        self.contact
    }
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; contact {} was not inserted", self.error, self.contact.id())
    }
}

impl std::error::Error for PushError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<PushError> for ListError {
    fn from(err: PushError) -> Self {
        err.error
    }
}

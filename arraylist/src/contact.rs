use std::fmt;

/// A phone-book entry. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    id: u64,
    name: String,
}

impl Contact {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Numeric identifier, usually a phone number.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.name)
    }
}

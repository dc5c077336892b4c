use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidTime { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidTime { input } => {
                write!(f, "invalid gateway time: {input:?} (expected YYYYMMDDTHHmmss)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

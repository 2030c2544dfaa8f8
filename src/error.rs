use std::fmt;

/// Which of the two compared outputs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Expected,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

/// Errors that can occur while preparing outputs for comparison.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("{side} output is not valid UTF-8 (decoded as {encoding})")]
    InvalidEncoding {
        side: Side,
        encoding: &'static str,
    },
}

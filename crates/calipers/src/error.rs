//! Error taxonomy for the kernel.
//!
//! Every failure is a value scoped to one call; nothing here is retried or
//! logged. `ErrorKind` groups variants the way callers usually branch on them.

use thiserror::Error;

/// Coarse classification of a [`GeomError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value could not be constructed (zero denominator).
    Construction,
    /// The caller's input is unusable (empty point set, malformed text).
    Input,
    /// The input is well formed but structurally too small for the operation.
    Structural,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("convex hull needs at least one point")]
    InsufficientPoints,
    #[error("rotating calipers need a hull with at least 3 vertices, got {vertices}")]
    DegenerateHull { vertices: usize },
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl GeomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeomError::DivisionByZero => ErrorKind::Construction,
            GeomError::InsufficientPoints | GeomError::Parse { .. } => ErrorKind::Input,
            GeomError::DegenerateHull { .. } => ErrorKind::Structural,
        }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        GeomError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(GeomError::DivisionByZero.kind(), ErrorKind::Construction);
        assert_eq!(GeomError::InsufficientPoints.kind(), ErrorKind::Input);
        assert_eq!(GeomError::parse("x", "bad").kind(), ErrorKind::Input);
        assert_eq!(
            GeomError::DegenerateHull { vertices: 2 }.kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn messages_name_the_problem() {
        let e = GeomError::DegenerateHull { vertices: 1 };
        assert!(e.to_string().contains("got 1"));
        let p = GeomError::parse("(1,", "unclosed parenthesis");
        assert_eq!(p.to_string(), "cannot parse \"(1,\": unclosed parenthesis");
    }
}

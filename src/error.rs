use std::fmt;

/// The kind of authorization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No credentials, or credentials the identity provider rejected
    Unauthenticated,
    /// Authenticated, but not entitled to the requested operation
    Forbidden,
    /// The identity provider could not be reached; distinct from an explicit
    /// denial so a transient outage never silently grants or locks out
    IdentityProviderUnavailable,
}

impl ErrorKind {
    /// Default HTTP status for this kind of failure.
    ///
    /// `IdentityProviderUnavailable` defaults to 503; callers that prefer to
    /// surface provider outages as 401 can remap using the kind recorded on
    /// the decision.
    pub fn http_status(self) -> u16 {
        match self {
            ErrorKind::Unauthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::IdentityProviderUnavailable => 503,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unauthenticated => write!(f, "Unauthenticated"),
            ErrorKind::Forbidden => write!(f, "Forbidden"),
            ErrorKind::IdentityProviderUnavailable => {
                write!(f, "Identity provider unavailable")
            }
        }
    }
}

/// A denied authorization with details about what failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    /// The kind of failure
    pub kind: ErrorKind,
    /// Human-readable reason for the denial
    pub reason: String,
}

impl Denial {
    /// Creates a new denial.
    pub fn new(kind: ErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    /// Default HTTP status for this denial.
    pub fn http_status(&self) -> u16 {
        self.kind.http_status()
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.reason)
    }
}

impl std::error::Error for Denial {}

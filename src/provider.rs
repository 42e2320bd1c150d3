//! The identity-provider seam.
//!
//! Bearer tokens are opaque to this crate; verification is delegated entirely
//! to an external managed service behind the [`IdentityProvider`] trait.
//! The token format is that service's concern, not ours.

use std::collections::HashMap;
use std::fmt;

/// Identity reported by the provider for a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Stable principal identifier
    pub principal_id: String,
    /// Email associated with the identity, if the provider reports one
    pub email: Option<String>,
}

/// Failure modes of bearer-token verification.
///
/// `InvalidToken` is an explicit rejection; `Unavailable` is a transient
/// outage of the provider itself. The two must stay distinct: an outage is
/// never allowed to look like a denial, and never converted into an allow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The provider examined the token and rejected it
    InvalidToken,
    /// The provider could not be reached or did not answer
    Unavailable(String),
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationError::InvalidToken => write!(f, "invalid token"),
            VerificationError::Unavailable(detail) => {
                write!(f, "identity provider unavailable: {}", detail)
            }
        }
    }
}

impl std::error::Error for VerificationError {}

/// External identity provider that verifies bearer tokens.
///
/// The verification call is the only operation in this crate that may block on
/// the network. No retry is performed here; a failure surfaces immediately in
/// the decision, and retry policy (if any) belongs to the caller.
///
/// # Examples
///
/// ```
/// use authz_core::{IdentityProvider, VerificationError, VerifiedIdentity};
///
/// struct AlwaysAlice;
///
/// impl IdentityProvider for AlwaysAlice {
///     fn verify(&self, _token: &str) -> Result<VerifiedIdentity, VerificationError> {
///         Ok(VerifiedIdentity {
///             principal_id: "alice".to_string(),
///             email: Some("alice@example.com".to_string()),
///         })
///     }
/// }
/// ```
pub trait IdentityProvider {
    /// Verifies a bearer token, returning the identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::InvalidToken` for a token the provider
    /// rejects, or `VerificationError::Unavailable` when the provider cannot
    /// be reached.
    fn verify(&self, token: &str) -> Result<VerifiedIdentity, VerificationError>;
}

/// Deterministic in-memory identity provider for tests and demos.
///
/// Holds a fixed token-to-identity table. Unknown tokens are rejected as
/// invalid, and the whole provider can be switched into a simulated outage.
///
/// # Examples
///
/// ```
/// use authz_core::{IdentityProvider, StaticIdentityProvider};
///
/// let mut provider = StaticIdentityProvider::new();
/// provider.insert("tok-u1", "u1", Some("u1@example.com"));
///
/// assert!(provider.verify("tok-u1").is_ok());
/// assert!(provider.verify("tok-unknown").is_err());
/// ```
#[derive(Debug, Default)]
pub struct StaticIdentityProvider {
    identities: HashMap<String, VerifiedIdentity>,
    unavailable: bool,
}

impl StaticIdentityProvider {
    /// Creates an empty provider that rejects every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token and the identity it verifies to.
    pub fn insert(&mut self, token: &str, principal_id: &str, email: Option<&str>) {
        self.identities.insert(
            token.to_string(),
            VerifiedIdentity {
                principal_id: principal_id.to_string(),
                email: email.map(str::to_string),
            },
        );
    }

    /// Switches the provider into (or out of) a simulated outage.
    ///
    /// While unavailable, every verification fails with
    /// `VerificationError::Unavailable` regardless of the token.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn verify(&self, token: &str) -> Result<VerifiedIdentity, VerificationError> {
        if self.unavailable {
            return Err(VerificationError::Unavailable(
                "simulated outage".to_string(),
            ));
        }

        self.identities
            .get(token)
            .cloned()
            .ok_or(VerificationError::InvalidToken)
    }
}
